use crate::core::grouping::try_group_by;
use crate::core::{BirthdayGroup, BirthdayRegistry, Person, Result, Sequencer};
use chrono::NaiveDate;

/// Declarative rendition: group, stable-sort by distance, render, join.
pub struct FunctionalSequencer<R: BirthdayRegistry> {
    registry: R,
}

impl<R: BirthdayRegistry> FunctionalSequencer<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }
}

impl<R: BirthdayRegistry> Sequencer for FunctionalSequencer<R> {
    fn birthday_sequence(&self, people: &[Person], today: NaiveDate) -> Result<String> {
        let mut groups: Vec<BirthdayGroup> =
            try_group_by(people, |person| self.registry.birthday(person))?
                .into_iter()
                .map(|(birthday, celebrators)| BirthdayGroup::new(birthday, celebrators))
                .collect();

        // sort_by_key is stable: equal distances keep first-seen order
        groups.sort_by_key(|group| group.distance_from(today));

        tracing::debug!(
            "Grouped {} people into {} birthdays (reference {})",
            people.len(),
            groups.len(),
            today
        );

        Ok(groups
            .iter()
            .map(BirthdayGroup::render)
            .collect::<Vec<_>>()
            .join("; "))
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
    fn test_single_person() {
        let sequencer = FunctionalSequencer::new(recorded);
        let people = vec![Person::new("Maria", date(1989, 1, 2))];

        let result = sequencer
            .birthday_sequence(&people, date(2000, 1, 1))
            .unwrap();
        assert_eq!(result, "[Maria] - 1989-01-02");
    }

    #[test]
    fn test_empty_people_render_empty_string() {
        let sequencer = FunctionalSequencer::new(recorded);
        let result = sequencer.birthday_sequence(&[], date(2000, 1, 1)).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_equal_distance_keeps_first_seen_order() {
        let sequencer = FunctionalSequencer::new(recorded);
        let people = vec![
            Person::new("Late", date(2000, 1, 11)),
            Person::new("Early", date(1999, 12, 22)),
        ];

        let result = sequencer
            .birthday_sequence(&people, date(2000, 1, 1))
            .unwrap();
        assert_eq!(result, "[Late] - 2000-01-11; [Early] - 1999-12-22");
    }

    #[test]
    fn test_registry_decides_grouping() {
        // registry ignores the recorded birthday entirely
        let sequencer =
            FunctionalSequencer::new(|_: &Person| -> Result<NaiveDate> { Ok(date(1970, 1, 1)) });
        let people = vec![
            Person::new("Joe", date(1985, 7, 16)),
            Person::new("Alice", date(1989, 10, 25)),
        ];

        let result = sequencer
            .birthday_sequence(&people, date(2000, 1, 1))
            .unwrap();
        assert_eq!(result, "[Alice, Joe] - 1970-01-01");
    }

    #[test]
    fn test_registry_error_propagates() {
        let sequencer = FunctionalSequencer::new(|person: &Person| -> Result<NaiveDate> {
            Err(SequenceError::UnknownPerson {
                name: person.full_name.clone(),
            })
        });
        let people = vec![Person::new("Ghost", date(1985, 7, 16))];

        let err = sequencer
            .birthday_sequence(&people, date(2000, 1, 1))
            .unwrap_err();
        assert!(matches!(err, SequenceError::UnknownPerson { name } if name == "Ghost"));
    }
}
