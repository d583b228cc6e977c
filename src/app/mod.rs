// Application layer: wires a roster to a registry, a sequencer style and the engine.

use crate::adapters::{DirectoryRegistry, RecordedBirthdays};
use crate::config::roster::RosterConfig;
use crate::config::SequenceStyle;
use crate::core::engine::SequenceEngine;
use crate::core::functional::FunctionalSequencer;
use crate::core::imperative::ImperativeSequencer;
use crate::core::{BirthdayRegistry, Person, Result};
use chrono::NaiveDate;

pub fn sequence_with<R: BirthdayRegistry>(
    registry: R,
    style: SequenceStyle,
    people: &[Person],
    reference_date: Option<NaiveDate>,
) -> Result<String> {
    tracing::debug!("Using {:?} sequencer", style);
    match style {
        SequenceStyle::Functional => {
            SequenceEngine::new(FunctionalSequencer::new(registry)).run(people, reference_date)
        }
        SequenceStyle::Imperative => {
            SequenceEngine::new(ImperativeSequencer::new(registry)).run(people, reference_date)
        }
    }
}

/// Sequences a roster. Explicit `style`/`reference_date` win over the roster's own settings.
pub fn sequence_roster(
    roster: &RosterConfig,
    style: Option<SequenceStyle>,
    reference_date: Option<NaiveDate>,
) -> Result<String> {
    let style = style.unwrap_or_else(|| roster.style());
    let reference_date = reference_date.or_else(|| roster.reference_date());

    match &roster.directory {
        Some(directory) => {
            tracing::info!("Resolving birthdays from a directory of {} entries", directory.len());
            sequence_with(
                DirectoryRegistry::new(directory.clone()),
                style,
                &roster.people,
                reference_date,
            )
        }
        None => sequence_with(RecordedBirthdays, style, &roster.people, reference_date),
    }
}
