//! laptop-valuer - price laptop configurations from the command line
//!
//! Usage:
//!   laptop-valuer estimate spec.json            # Price one laptop (or a JSON array of them)
//!   laptop-valuer estimate spec.json --json     # Machine-readable breakdown
//!   laptop-valuer estimate - < spec.json        # Read the spec from stdin
//!   laptop-valuer schema                        # List the model's feature columns
//!
//! Logs go to stderr; `RUST_LOG` selects the level (default `info`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use laptop_valuer::config::ValuerConfig;

/// laptop-valuer - laptop price estimation
///
/// Loads the trained artifacts once and prices RawSpec JSON documents.
#[derive(Parser)]
#[command(name = "laptop-valuer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Artifact directory (overrides config and LAPTOP_VALUER_ARTIFACT_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    artifacts: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the price of one laptop or a batch
    Estimate {
        /// RawSpec JSON file, or `-` for stdin
        #[arg(value_name = "SPEC")]
        spec: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the feature schema columns
    Schema {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = ValuerConfig::load(cli.config.as_deref())
        .map(|config| config.with_artifact_dir(cli.artifacts.clone()))
        .map_err(error::CliError::Startup)
        .and_then(|config| match &cli.command {
            Commands::Estimate { spec, json } => commands::estimate(&config, spec, *json),
            Commands::Schema { json } => commands::schema(&config, *json),
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
