//! brewkit command line
//!
//! Converts brewing documents between the XML and JSON interchange formats
//! and prints their contents.
//!
//! Usage:
//!   brewkit convert recipes.xml recipes.json
//!   brewkit inspect recipes.xml
//!   brewkit units temperature

use std::path::PathBuf;

use anyhow::{Context, Result};
use brewkit_cli::{Config, convert, inspect, log_filter, units};
use brewkit_interchange::Format;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "brewkit")]
#[command(about = "Convert and inspect brewing record documents")]
struct Args {
    /// Path to a brewkit.toml (default: ./brewkit.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging (otherwise RUST_LOG, default info)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Re-encode a document, optionally in the other format
    Convert {
        input: PathBuf,
        output: PathBuf,
        /// Output format (xml or json)
        #[arg(long)]
        to: Option<Format>,
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
    /// List recipes, mashes and export statistics
    Inspect { input: PathBuf },
    /// List the unit names accepted for a physical quantity
    Units { quantity: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    FmtSubscriber::builder()
        .with_env_filter(log_filter(args.verbose, rust_log.as_deref()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let mut config = Config::discover(args.config.as_deref(), &cwd)?;
    debug!(?config, "effective configuration");

    match args.command {
        Command::Convert {
            input,
            output,
            to,
            compact,
        } => {
            if compact {
                config.export.options.pretty = false;
            }
            let summary = convert(&input, &output, to, &config)?;
            println!(
                "wrote {} ({}): {} recipes, {} mashes",
                output.display(),
                summary.format,
                summary.recipes,
                summary.mashes
            );
            print!("{}", summary.statistics);
        }
        Command::Inspect { input } => print!("{}", inspect(&input)?),
        Command::Units { quantity } => print!("{}", units(&quantity)?),
    }
    Ok(())
}
