//! SensorDash Common Library
//!
//! This crate provides the GUI-independent core of the SensorDash dashboard:
//!
//! - [`sample`] - The sample data model (`Sample`)
//! - [`series`] - Capacity-bounded rolling sample window (`MetricSeries`)
//! - [`surface`] - The chart surface contract (`ChartSurface`)
//! - [`panel`] - One metric's panel: rolling window plus chart surface
//! - [`dashboard`] - The host container owning named panels
//! - [`config`] - Configuration loading (JSON5 format)
//! - [`error`] - Error types
//! - [`mock`] - Recording chart surface for tests

pub mod config;
pub mod dashboard;
pub mod error;
pub mod mock;
pub mod panel;
pub mod sample;
pub mod series;
pub mod surface;

// Re-export commonly used types at the crate root
pub use config::{DashboardConfig, LogFormat, LoggingConfig, SensorConfig, load_config, parse_config};
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use mock::RecordingSurface;
pub use panel::{Panel, format_displayed_value};
pub use sample::Sample;
pub use series::{MAX_SAMPLES, MetricSeries};
pub use surface::ChartSurface;

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
