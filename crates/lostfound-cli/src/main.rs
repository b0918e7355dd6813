mod logging;
mod settings;

use clap::Parser;
use lostfound_generate::{GenerationEngine, GenerationError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the CommunityTrackerDB seed script.
///
/// Settings are read from `lostfound.toml` in the working directory when
/// that file exists.
#[derive(Parser, Debug)]
#[command(name = "lostfound-seed", version, about = "Lost & Found tracker seed script generator")]
struct Cli {}

fn main() -> Result<(), CliError> {
    let _cli = Cli::parse();
    logging::init_logging()?;

    let config = settings::load_settings()?;
    let result = GenerationEngine::new(config).run()?;

    info!(
        seed = result.report.seed,
        sha256 = %result.report.sha256,
        "seed script ready"
    );
    println!("Successfully generated {}", result.output_path.display());
    Ok(())
}
