//! gesture-replay binary
//!
//! Reads a TOML scenario, replays it and prints the report as JSON on stdout.
//! Logs go to stderr so the output can be piped.

use anyhow::Context;
use clap::Parser;
use gesture_replay::{replay, Scenario};
use overlay_core::EngineConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "gesture-replay")]
#[command(
    version,
    about = "Replay recorded overlay gestures and print the committed updates"
)]
struct Args {
    /// Scenario file (TOML)
    scenario: PathBuf,

    /// Engine configuration file, overriding the scenario's [config] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print every step outcome at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let scenario = Scenario::from_file(&args.scenario)?;
    if let Some(ref name) = scenario.name {
        tracing::info!("Replaying scenario: {}", name);
    }

    let config = match args.config {
        Some(ref path) => Some(
            EngineConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
        ),
        None => None,
    };

    let report = replay(&scenario, config)?;
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{}", json);

    Ok(())
}
