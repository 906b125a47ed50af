//! Flip CLI - inspect animation timelines without running the game
//!
//! - `flip sample` plays a TOML timeline definition on a fixed frame grid
//!   and prints the value of each id per frame
//! - `flip easings` prints every easing curve as a table

mod sample;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flip_animation::{TimelineConfig, TimelineSet};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flip")]
#[command(about = "Sample Flip animation timelines and easing curves")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a timeline definition and print its values frame by frame
    Sample {
        /// TOML timeline definition
        file: PathBuf,

        /// Pick a named timeline from a `[timelines.<name>]` file
        #[arg(short, long)]
        timeline: Option<String>,

        /// Ids to print (default: every id in the timeline)
        #[arg(long = "id")]
        ids: Vec<String>,

        /// Frame interval in milliseconds
        #[arg(long, default_value_t = 1000.0 / 60.0)]
        step: f64,

        /// Last clock to sample (default: one frame past the end)
        #[arg(long)]
        until: Option<f64>,
    },

    /// Print every easing curve sampled over [0, 1]
    Easings {
        /// Number of intervals per curve
        #[arg(long, default_value_t = 10)]
        steps: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Sample {
            file,
            timeline,
            ids,
            step,
            until,
        } => {
            // Fail before reading the file
            sample::check_grid(step, until.unwrap_or(0.0))?;

            let mut built = match &timeline {
                Some(name) => TimelineSet::load(&file)
                    .with_context(|| format!("Failed to load {}", file.display()))?
                    .timeline(name)?,
                None => TimelineConfig::load(&file)
                    .with_context(|| format!("Failed to load {}", file.display()))?
                    .to_timeline()?,
            };

            let ids = if ids.is_empty() {
                sample::timeline_ids(&built)
            } else {
                ids
            };
            let until = until.unwrap_or(built.latest_end_time() + step);
            info!(file = %file.display(), step, until, "sampling timeline");

            let rows = sample::sample_timeline(&mut built, &ids, step, until)?;
            print!("{}", sample::format_table(&ids, &rows));
        }
        Command::Easings { steps } => {
            print!("{}", sample::format_easings(steps));
        }
    }

    Ok(())
}
