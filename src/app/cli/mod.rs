//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{GenerateOptions, generate_with};
use crate::app::logging::init_cli_logger;
use crate::domain::{AppError, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "mlfleet")]
#[command(version)]
#[command(
    about = "Generate a multi-team MLflow deployment (Dockerfile, Compose file, setup script, team URLs)",
    long_about = None
)]
struct Cli {
    /// Fleet configuration file
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Directory receiving the generated files (created if missing)
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    if let Err(e) = run_generate(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: Cli) -> Result<(), AppError> {
    let options = GenerateOptions { config_path: cli.config, output_dir: cli.output_dir };
    let outcome = generate_with(&options, |kind, _path| println!("✅ Generated {}", kind))?;

    println!("Configured {} team(s); URLs use host {}", outcome.teams, outcome.host);
    Ok(())
}
