mod bootstrap;

use anyhow::Result;
use clap::Parser;
use statjoin_core::JoinConfig;
use statjoin_data::joiner::Joiner;

/// Join per-region metric tables into a single nested JSON document.
///
/// Reads `data/{region}/{metric}.csv` for the fixed region and metric lists
/// and writes the joined result to `data.json` in the working directory.
#[derive(Parser, Debug)]
#[command(
    name = "statjoin",
    about = "Join per-region metric CSV tables into data.json",
    version
)]
struct Cli {
    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    bootstrap::setup_logging(&cli.log_level)?;

    tracing::info!("statjoin v{} starting", env!("CARGO_PKG_VERSION"));

    let config = JoinConfig::default();
    let output_path = config.output_path.clone();

    Joiner::new(config).run()?;

    tracing::info!("Wrote {}", output_path.display());
    Ok(())
}
