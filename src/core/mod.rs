pub mod engine;
pub mod functional;
pub mod grouping;
pub mod imperative;

pub use crate::domain::model::{BirthdayGroup, Person};
pub use crate::domain::ports::{BirthdayRegistry, Sequencer};
pub use crate::utils::error::Result;
