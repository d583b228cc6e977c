use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub full_name: String,
    pub birthday: NaiveDate,
}

impl Person {
    pub fn new(full_name: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            birthday,
        }
    }
}

/// People sharing one exact calendar birthday. Only lives for a single sequencing run.
#[derive(Debug, Clone)]
pub struct BirthdayGroup<'a> {
    pub birthday: NaiveDate,
    pub celebrators: Vec<&'a Person>,
}

impl<'a> BirthdayGroup<'a> {
    pub fn new(birthday: NaiveDate, celebrators: Vec<&'a Person>) -> Self {
        Self {
            birthday,
            celebrators,
        }
    }

    /// Absolute distance in whole days between this birthday and `today`.
    pub fn distance_from(&self, today: NaiveDate) -> i64 {
        (today - self.birthday).num_days().abs()
    }

    pub fn sorted_names(&self) -> Vec<&'a str> {
        let mut names: Vec<&str> = self
            .celebrators
            .iter()
            .map(|&person| person.full_name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// `[Bob, Joe] - 1985-07-16`
    pub fn render(&self) -> String {
        format!(
            "[{}] - {}",
            self.sorted_names().join(", "),
            self.birthday.format("%Y-%m-%d")
        )
    }
}
