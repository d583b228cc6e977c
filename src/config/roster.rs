use crate::config::SequenceStyle;
use crate::domain::model::Person;
use crate::utils::error::{Result, SequenceError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    pub sequence: Option<SequenceSettings>,
    #[serde(default)]
    pub people: Vec<Person>,
    /// When present, birthdays are looked up here by name instead of read off each person.
    pub directory: Option<HashMap<String, NaiveDate>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceSettings {
    pub style: Option<SequenceStyle>,
    pub reference_date: Option<NaiveDate>,
}

impl RosterConfig {
    /// Loads a roster from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a roster from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SequenceError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown ones stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SequenceError::ConfigParseError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn style(&self) -> SequenceStyle {
        self.sequence
            .as_ref()
            .and_then(|s| s.style)
            .unwrap_or_default()
    }

    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.sequence.as_ref().and_then(|s| s.reference_date)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        for person in &self.people {
            validation::validate_non_empty_string("people.full_name", &person.full_name)?;
        }

        if let Some(directory) = &self.directory {
            for name in directory.keys() {
                validation::validate_non_empty_string("directory", name)?;
            }
        }

        Ok(())
    }
}
