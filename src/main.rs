use birthday_sequence::utils::{logger, validation::Validate};
use birthday_sequence::{sequence_roster, CliConfig, RosterConfig, SequenceError};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting birthday-sequence");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!("❌ Birthday sequencing failed: {} ({:?})", e, e.category());
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), SequenceError> {
    config.validate()?;

    tracing::info!("📁 Loading roster from: {}", config.roster);
    let roster = RosterConfig::from_file(&config.roster)?;
    roster.validate()?;
    tracing::info!("✅ Roster loaded with {} people", roster.people.len());

    let summary = sequence_roster(&roster, config.style, config.reference_date()?)?;
    println!("{}", summary);

    Ok(())
}
