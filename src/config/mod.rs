#[cfg(feature = "cli")]
pub mod cli;
pub mod roster;

use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SequenceStyle {
    #[default]
    Functional,
    Imperative,
}
