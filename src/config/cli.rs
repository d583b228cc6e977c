use crate::config::SequenceStyle;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "birthday-sequence")]
#[command(about = "Group people by birthday, closest to the reference date first")]
pub struct CliConfig {
    #[arg(short, long, default_value = "roster.toml", help = "Path to the TOML roster")]
    pub roster: String,

    #[arg(long, help = "Reference date (YYYY-MM-DD); defaults to the roster setting, then today")]
    pub today: Option<String>,

    #[arg(long, value_enum, help = "Override the sequencing style from the roster")]
    pub style: Option<SequenceStyle>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn reference_date(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|value| validation::parse_date("today", value))
            .transpose()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("roster", &self.roster)?;
        self.reference_date()?;
        Ok(())
    }
}
