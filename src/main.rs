use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, reload};

use citydist::config::FileConfig;
use citydist::menu::{Menu, distance_sentence};
use citydist::{City, LengthUnit};

/// List sample cities and compute great-circle distances between them
///
/// Examples:
///   # Interactive menu
///   citydist
///
///   # Print the city table
///   citydist list
///
///   # Distance by name or list index, in kilometers
///   citydist distance London Sydney --unit kilometers
///   citydist distance 0 1
///
///   # Use a custom city list
///   citydist --config my-cities.toml
#[derive(Parser, Debug)]
#[command(name = "citydist")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches citydist.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every city with its coordinates
    List,

    /// Print the great-circle distance between two cities
    Distance {
        /// First city, by name or list index
        from: String,

        /// Second city, by name or list index
        to: String,

        /// Unit of measurement (defaults to the config `unit`, else miles)
        #[arg(short = 'u', long, value_enum)]
        unit: Option<LengthUnit>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (filter, log_handle) = reload::Layer::new(log_filter(args.verbose)?);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::load_from(config_path)?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    if file_config.verbose && !args.verbose {
        log_handle
            .reload(log_filter(true)?)
            .context("Failed to raise log level")?;
    }

    let catalog = file_config
        .catalog()
        .context("Invalid city in configuration")?;
    tracing::info!(cities = catalog.len(), "city catalog ready");

    match args.command {
        None => {
            let color = !args.no_color && file_config.color && io::stdout().is_terminal();
            colored::control::set_override(color);
            let stdin = io::stdin();
            Menu::new(&catalog, stdin.lock(), io::stdout().lock())
                .run()
                .context("Console I/O failed")?;
        }
        Some(Command::List) => {
            println!("{}", City::format_header());
            for city in &catalog {
                println!("{}", city.format());
            }
        }
        Some(Command::Distance { from, to, unit }) => {
            let unit = file_config.distance_unit(unit);
            let first = catalog.lookup(&from)?;
            let second = catalog.lookup(&to)?;
            let distance = first.distance_to_in(Some(second), unit);
            println!("{}", distance_sentence(first, second, distance, unit));
        }
    }

    Ok(())
}

/// Warnings by default, this crate at debug when verbose; `RUST_LOG` still applies
fn log_filter(verbose: bool) -> Result<EnvFilter> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    if verbose {
        Ok(filter.add_directive("citydist=debug".parse()?))
    } else {
        Ok(filter)
    }
}
