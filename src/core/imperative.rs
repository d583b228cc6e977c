use crate::core::{BirthdayRegistry, Person, Result, Sequencer};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Step-by-step rendition with explicit loops and manual string building.
pub struct ImperativeSequencer<R: BirthdayRegistry> {
    registry: R,
}

impl<R: BirthdayRegistry> ImperativeSequencer<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}

impl<R: BirthdayRegistry> Sequencer for ImperativeSequencer<R> {
    fn birthday_sequence(&self, people: &[Person], today: NaiveDate) -> Result<String> {
        let mut birthdays: Vec<NaiveDate> = Vec::new();
        let mut celebrators: HashMap<NaiveDate, Vec<&Person>> = HashMap::new();

        for person in people {
            let birthday = self.registry.birthday(person)?;
            match celebrators.get_mut(&birthday) {
                Some(group) => group.push(person),
                None => {
                    birthdays.push(birthday);
                    celebrators.insert(birthday, vec![person]);
                }
            }
        }

        // stable, so equal distances keep first-seen order
        birthdays.sort_by_key(|birthday| (today - *birthday).num_days().abs());

        tracing::debug!(
            "Grouped {} people into {} birthdays (reference {})",
            people.len(),
            birthdays.len(),
            today
        );

        let mut result = String::new();
        for birthday in &birthdays {
            let mut names: Vec<&str> = Vec::new();
            if let Some(group) = celebrators.get(birthday) {
                for person in group {
                    names.push(&person.full_name);
                }
            }
            names.sort_unstable();

            result.push('[');
            if let Some((last, rest)) = names.split_last() {
                for name in rest {
                    result.push_str(name);
                    result.push_str(", ");
                }
                result.push_str(last);
            }
            result.push_str("] - ");
            result.push_str(&birthday.format("%Y-%m-%d").to_string());
            result.push_str("; ");
        }

        // drop the trailing separator
        let trimmed = result.len().saturating_sub(2);
        result.truncate(trimmed);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SequenceError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recorded(person: &Person) -> Result<NaiveDate> {
        Ok(person.birthday)
    }

    #[test]
    fn test_empty_people_render_empty_string() {
        let sequencer = ImperativeSequencer::new(recorded);
        let result = sequencer.birthday_sequence(&[], date(1989, 9, 5)).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_duplicates_share_a_group() {
        let sequencer = ImperativeSequencer::new(recorded);
        let people = vec![
            Person::new("Bob", date(1985, 7, 16)),
            Person::new("Bob", date(1985, 7, 16)),
        ];

        let result = sequencer
            .birthday_sequence(&people, date(1990, 1, 1))
            .unwrap();
        assert_eq!(result, "[Bob, Bob] - 1985-07-16");
    }

    #[test]
    fn test_same_day_different_year_are_separate_groups() {
        let sequencer = ImperativeSequencer::new(recorded);
        let people = vec![
            Person::new("Older", date(1980, 3, 1)),
            Person::new("Younger", date(1990, 3, 1)),
        ];

        let result = sequencer
            .birthday_sequence(&people, date(1991, 1, 1))
            .unwrap();
        assert_eq!(result, "[Younger] - 1990-03-01; [Older] - 1980-03-01");
    }

    #[test]
    fn test_equal_distance_keeps_first_seen_order() {
        let sequencer = ImperativeSequencer::new(recorded);
        let people = vec![
            Person::new("Early", date(1999, 12, 22)),
            Person::new("Late", date(2000, 1, 11)),
        ];

        let result = sequencer
            .birthday_sequence(&people, date(2000, 1, 1))
            .unwrap();
        assert_eq!(result, "[Early] - 1999-12-22; [Late] - 2000-01-11");
    }

    #[test]
    fn test_registry_error_propagates() {
        let sequencer = ImperativeSequencer::new(|_: &Person| -> Result<NaiveDate> {
            Err(SequenceError::RegistryError {
                message: "directory offline".to_string(),
            })
        });
        let people = vec![Person::new("Bob", date(1985, 7, 16))];

        let err = sequencer
            .birthday_sequence(&people, date(2000, 1, 1))
            .unwrap_err();
        assert_eq!(err.to_string(), "Birthday registry failed: directory offline");
    }
}
