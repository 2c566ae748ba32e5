use sensordash_common::Sample;

/// Messages for the SensorDash application.
#[derive(Debug, Clone)]
pub enum Message {
    /// The feed started delivering readings.
    FeedStarted,

    /// Historical samples for one sensor, delivered once at startup.
    HistoryLoaded { name: String, samples: Vec<Sample> },

    /// One live reading from the feed.
    SampleReceived { name: String, time: f64, value: f64 },

    /// The feed stopped or failed.
    FeedFailed(String),

    /// Tick for periodic UI updates (e.g., relative timestamps).
    Tick,
}
