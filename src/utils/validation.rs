use crate::utils::error::{Result, SequenceError};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` date, reporting failures against `field_name`.
pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        SequenceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected a YYYY-MM-DD date: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("people.full_name", "Bob").is_ok());
        assert!(validate_non_empty_string("people.full_name", "").is_err());
        assert!(validate_non_empty_string("people.full_name", "   ").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("today", "1989-09-05").unwrap(),
            NaiveDate::from_ymd_opt(1989, 9, 5).unwrap()
        );
        assert!(parse_date("today", "1989-13-05").is_err());
        assert!(parse_date("today", "05/09/1989").is_err());
        assert!(parse_date("today", "").is_err());
    }
}
