//! SensorDash - rolling time-series dashboard for sensor metrics.
//!
//! The application renders one rolling chart panel per configured sensor
//! and keeps them updated from a periodic data feed.

use std::path::PathBuf;

use clap::Parser;
use iced::application;

use sensordash::app::SensorDash;
use sensordash_common::{DashboardConfig, init_tracing, load_config};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "sensordash",
    about = "Rolling time-series dashboard for sensor metrics"
)]
struct Args {
    /// Path to the configuration file (JSON5).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the feed interval in seconds.
    #[arg(long)]
    interval: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = resolve_config(&args)?;
    if let Some(interval) = args.interval {
        config.interval_secs = interval;
    }

    init_tracing(&config.logging)?;

    tracing::info!("Starting SensorDash");

    // Run the Iced application
    application(
        move || SensorDash::boot(config.clone()),
        SensorDash::update,
        SensorDash::view,
    )
    .title("SensorDash")
    .subscription(SensorDash::subscription)
    .theme(SensorDash::theme)
    .run()
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// Load configuration from the explicit path, the platform config
/// directory, or fall back to defaults.
fn resolve_config(args: &Args) -> anyhow::Result<DashboardConfig> {
    if let Some(ref path) = args.config {
        return Ok(load_config(path)?);
    }

    match dirs::config_dir().map(|dir| dir.join("sensordash/config.json5")) {
        Some(path) if path.exists() => Ok(load_config(path)?),
        _ => Ok(DashboardConfig::default()),
    }
}
