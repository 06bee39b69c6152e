//! Kyrgyz text normalizer command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

mod commands;
mod logging;

use logging::LogFormat;

/// Kyrgyz text normalizer CLI
#[derive(Debug, Parser)]
#[command(name = "kgnorm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Log format (json or text)
    #[arg(long, default_value = "text", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize text into spoken words
    Normalize {
        /// Input text or file path (use @file.txt for file input)
        input: String,

        /// JSON lexicon overrides
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print every stage that changed the text
        #[arg(long)]
        trace: bool,
    },

    /// Spell an integer as a cardinal numeral
    Cardinal {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Spell an integer as an ordinal numeral
    Ordinal {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Decode a roman numeral
    Roman { numeral: String },

    /// List the cascade stages in order
    Stages,

    /// Show version info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level, cli.log_format);

    info!(version = env!("CARGO_PKG_VERSION"), "starting kgnorm");

    match cli.command {
        Commands::Normalize {
            input,
            config,
            trace,
        } => {
            commands::normalize::run(&input, config.as_deref(), trace)
                .context("normalization failed")?;
        }
        Commands::Cardinal { number } => {
            commands::numbers::cardinal(number).context("cardinal failed")?;
        }
        Commands::Ordinal { number } => {
            commands::numbers::ordinal(number).context("ordinal failed")?;
        }
        Commands::Roman { numeral } => {
            commands::numbers::roman(&numeral).context("roman conversion failed")?;
        }
        Commands::Stages => {
            commands::stages::run();
        }
        Commands::Info => {
            commands::info::run();
        }
    }

    Ok(())
}
