use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("No birthday on record for {name}")]
    UnknownPerson { name: String },

    #[error("Birthday registry failed: {message}")]
    RegistryError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Registry,
    Configuration,
    System,
}

impl SequenceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SequenceError::UnknownPerson { .. } | SequenceError::RegistryError { .. } => {
                ErrorCategory::Registry
            }
            SequenceError::ConfigParseError { .. }
            | SequenceError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SequenceError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SequenceError::UnknownPerson { name } => {
                format!("Could not find a birthday for '{}'", name)
            }
            SequenceError::RegistryError { message } => {
                format!("Birthday lookup failed: {}", message)
            }
            SequenceError::IoError(e) => format!("Could not read input: {}", e),
            SequenceError::ConfigParseError { message } => {
                format!("The roster file is not valid: {}", message)
            }
            SequenceError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Registry => {
                "Add the missing person to the [directory] table or remove the table to use recorded birthdays"
            }
            ErrorCategory::Configuration => {
                "Check the roster file against the documented format (dates are YYYY-MM-DD)"
            }
            ErrorCategory::System => "Make sure the roster file exists and is readable",
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::System => 1,
            ErrorCategory::Registry => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;
