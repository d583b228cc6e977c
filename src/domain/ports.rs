use crate::domain::model::Person;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Resolves the birthday of a person. Lookups must be read-only.
pub trait BirthdayRegistry: Send + Sync {
    fn birthday(&self, person: &Person) -> Result<NaiveDate>;
}

impl<F> BirthdayRegistry for F
where
    F: Fn(&Person) -> Result<NaiveDate> + Send + Sync,
{
    fn birthday(&self, person: &Person) -> Result<NaiveDate> {
        self(person)
    }
}

pub trait Sequencer: Send + Sync {
    /// Groups `people` by birthday and renders the groups closest to `today` first.
    fn birthday_sequence(&self, people: &[Person], today: NaiveDate) -> Result<String>;
}
