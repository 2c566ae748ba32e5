use thiserror::Error;

/// Common error type for SensorDash components.
#[derive(Debug, Error)]
pub enum Error {
    /// A sample whose time or value is not a finite number.
    #[error("invalid sample for series '{series}': time={time}, value={value}")]
    InvalidSample {
        series: String,
        time: f64,
        value: f64,
    },

    /// A panel with this series name already exists in the dashboard.
    #[error("a panel named '{0}' already exists in this dashboard")]
    DuplicateSeriesName(String),

    /// No panel container exists for this series.
    #[error("no panel container for series '{0}'")]
    MissingContainer(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using SensorDash's Error.
pub type Result<T> = std::result::Result<T, Error>;
