use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use day_layout::{events_from_str, generate_ticks, layout, AxisOptions};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Lay out a day of calendar events as non-overlapping columns.
#[derive(Parser)]
#[command(name = "daylayout", version, about)]
struct Cli {
    /// Log pipeline details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a JSON array of {id, start, end} events.
    Layout {
        /// Input file (reads stdin if omitted or "-").
        file: Option<PathBuf>,

        /// Width of the rendering surface in pixels.
        #[arg(short, long, default_value_t = 600.0, allow_negative_numbers = true)]
        width: f64,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the time-of-day sidebar ticks.
    Ticks {
        /// Minutes between ticks.
        #[arg(long, default_value_t = 30)]
        interval: u32,

        /// Minute of the day of the first tick.
        #[arg(long, default_value_t = 540)]
        start: u32,

        /// Minute of the day of the last tick.
        #[arg(long, default_value_t = 1260)]
        end: u32,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Layout {
            file,
            width,
            pretty,
        } => {
            let text = read_input(file.as_ref())?;
            let events = events_from_str(&text).context("Failed to read events")?;
            let output = layout(&events, width).context("Failed to lay out events")?;
            print_json(&output, pretty)?;
        }
        Commands::Ticks {
            interval,
            start,
            end,
            pretty,
        } => {
            let options = AxisOptions {
                interval_minutes: interval,
                start_minute: start,
                end_minute: end,
            };
            let ticks = generate_ticks(&options).context("Failed to generate ticks")?;
            print_json(&ticks, pretty)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            tracing::debug!(path = %path.display(), "reading events from file");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))
        }
        _ => {
            tracing::debug!("reading events from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
