//! Kilo - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs one of the subcommands:
//! building an index from a corpus and answering prefix queries, validating
//! the configuration, or writing a default configuration file.

use clap::{Parser, Subcommand};
use kilo_lib::config::{ConfigLoader, KiloConfig, LogConfig, ENV_PREFIX};
use kilo_lib::corpus::CorpusLoader;
use kilo_lib::data_structures::Value;
use kilo_lib::error::config::ConfigError;
use kilo_lib::error::{KiloError, KiloResult};
use kilo_lib::index::IndexBuilder;
use std::path::PathBuf;
use std::process;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Kilo.
#[derive(Parser, Debug)]
#[clap(name = "kilo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build an index from a corpus file and print completions for each key
    Query {
        /// Path to the corpus file
        #[clap(long, value_parser)]
        corpus: PathBuf,

        /// Prefixes to complete
        #[clap(required = true)]
        keys: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &LogConfig) -> KiloResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| KiloError::Custom(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KiloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the corpus, builds the index and prints the results for every key.
fn run_query(config: &KiloConfig, corpus: PathBuf, keys: &[String]) -> KiloResult<()> {
    let corpus = CorpusLoader::new(config.corpus.clone()).load_file(&corpus)?;
    let built = IndexBuilder::new(&config.index).build(&corpus)?;

    for key in keys {
        let started = Instant::now();
        let results = built.group.get(key);
        let elapsed = started.elapsed();

        println!("{key}\t({} results, {elapsed:?})", results.len());
        for candidate in &results {
            println!(
                "  {}\t{:.6}\t{}",
                candidate.query(),
                candidate.score(),
                candidate.item_id
            );
        }
    }
    Ok(())
}

/// Loads and validates configuration, exiting on failure.
fn load_config(loader: &ConfigLoader) -> KiloConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> KiloResult<()> {
    // Parse command-line arguments
    let args = <Args as clap::Parser>::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command {
        Some(Command::Query { corpus, keys }) => {
            let config = load_config(&config_loader);
            init_logging(&config.log)?;
            run_query(&config, corpus, &keys)
        }
        Some(Command::Validate) | None => {
            let config = load_config(&config_loader);
            init_logging(&config.log)?;
            info!(
                max_node_len = config.index.max_node_len,
                max_results_len = config.index.max_results_len,
                encoders = ?config.index.encoders,
                "Configuration validated successfully"
            );
            Ok(())
        }
        Some(Command::GenConfig { output }) => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = KiloConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(KiloError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

            std::fs::write(&output, toml).map_err(KiloError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
