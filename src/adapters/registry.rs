use crate::core::{BirthdayRegistry, Person, Result};
use crate::utils::error::SequenceError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Trusts the birthday recorded on the person.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedBirthdays;

impl BirthdayRegistry for RecordedBirthdays {
    fn birthday(&self, person: &Person) -> Result<NaiveDate> {
        Ok(person.birthday)
    }
}

/// Name-keyed birthday directory. Recorded birthdays on `Person` are ignored.
#[derive(Debug, Clone, Default)]
pub struct DirectoryRegistry {
    entries: HashMap<String, NaiveDate>,
}

impl DirectoryRegistry {
    pub fn new(entries: HashMap<String, NaiveDate>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, NaiveDate)> for DirectoryRegistry {
    fn from_iter<I: IntoIterator<Item = (N, NaiveDate)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, birthday)| (name.into(), birthday))
                .collect(),
        )
    }
}

impl BirthdayRegistry for DirectoryRegistry {
    fn birthday(&self, person: &Person) -> Result<NaiveDate> {
        self.entries
            .get(&person.full_name)
            .copied()
            .ok_or_else(|| {
                tracing::warn!("No directory entry for {}", person.full_name);
                SequenceError::UnknownPerson {
                    name: person.full_name.clone(),
                }
            })
    }
}
