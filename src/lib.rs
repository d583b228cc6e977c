pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{DirectoryRegistry, RecordedBirthdays};
pub use crate::app::{sequence_roster, sequence_with};
pub use crate::config::{roster::RosterConfig, SequenceStyle};
pub use crate::core::{
    engine::SequenceEngine, functional::FunctionalSequencer, imperative::ImperativeSequencer,
};
pub use crate::domain::model::{BirthdayGroup, Person};
pub use crate::domain::ports::{BirthdayRegistry, Sequencer};
pub use crate::utils::error::{Result, SequenceError};
