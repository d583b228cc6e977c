use crate::core::{Person, Result, Sequencer};
use chrono::NaiveDate;

pub struct SequenceEngine<S: Sequencer> {
    sequencer: S,
}

impl<S: Sequencer> SequenceEngine<S> {
    pub fn new(sequencer: S) -> Self {
        Self { sequencer }
    }

    pub fn sequencer(&self) -> &S {
        &self.sequencer
    }

    /// Runs the sequencer, measuring against today when no reference date is given.
    pub fn run(&self, people: &[Person], reference_date: Option<NaiveDate>) -> Result<String> {
        let today = reference_date.unwrap_or_else(|| chrono::Local::now().date_naive());

        tracing::info!(
            "Sequencing birthdays of {} people against {}",
            people.len(),
            today
        );

        let summary = self.sequencer.birthday_sequence(people, today)?;

        let segments = if summary.is_empty() {
            0
        } else {
            summary.split("; ").count()
        };
        tracing::debug!("Rendered {} birthday groups", segments);

        Ok(summary)
    }
}
