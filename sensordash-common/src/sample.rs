use serde::{Deserialize, Serialize};

/// One (time, value) observation of a metric.
///
/// The canonical inbound shape is a record with named fields: `time` is
/// Unix epoch seconds (fractional seconds allowed), `value` is the measured
/// quantity. Samples are immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Unix epoch seconds when the measurement was taken.
    pub time: f64,
    /// The measured value.
    pub value: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    /// Whether both time and value are finite numbers.
    ///
    /// Non-finite samples are rejected at append time rather than silently
    /// plotted.
    pub fn is_finite(&self) -> bool {
        self.time.is_finite() && self.value.is_finite()
    }
}
