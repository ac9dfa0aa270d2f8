//! Hindi text normalization command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use text_normalizer::Normalizer;
use tn_core::EngineConfig;
use tracing::info;

mod commands;
mod logging;

/// Hindi text normalization engine CLI
#[derive(Debug, Parser)]
#[command(name = "tn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (defaults to the config file, then `RUST_LOG`)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (json or text)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    /// Engine configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

impl LogFormatArg {
    fn as_str(self) -> &'static str {
        match self {
            LogFormatArg::Json => "json",
            LogFormatArg::Text => "text",
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize text and show markup and automaton traces
    Normalize {
        /// Input text (use @file.txt for file input)
        input: String,

        /// Enabled categories in priority order (default: all)
        #[arg(short = 'C', long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Language code (defaults to the configured language)
        #[arg(long)]
        lang: Option<String>,

        /// Print the JSON response instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the categories available for a language
    Categories {
        /// Language code (defaults to the configured language)
        #[arg(long)]
        lang: Option<String>,
    },

    /// Show version and configuration info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let file_logging = cli.config.as_ref().map(|_| &config.logging);
    logging::init(&logging::settings(
        file_logging,
        cli.log_level.clone(),
        cli.log_format.map(LogFormatArg::as_str),
    ));

    info!(version = env!("CARGO_PKG_VERSION"), "Starting tn CLI");

    let normalizer = Normalizer::from_config(&config).context("failed to build normalizer")?;

    match cli.command {
        Commands::Normalize {
            input,
            categories,
            lang,
            json,
        } => {
            let options = commands::normalize::NormalizeOptions {
                input,
                categories,
                lang: lang.unwrap_or_else(|| config.default_language.clone()),
                json,
            };
            commands::normalize::run(&normalizer, options).context("normalization failed")?;
        }
        Commands::Categories { lang } => {
            let lang = lang.unwrap_or_else(|| config.default_language.clone());
            commands::categories::run(&normalizer, &lang)?;
        }
        Commands::Info => {
            commands::info::run(&normalizer, &config);
        }
    }

    Ok(())
}
