use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// One sensor shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Series name, unique within the dashboard.
    pub name: String,

    /// Panel title; the name is used when absent.
    #[serde(default)]
    pub title: Option<String>,
}

impl SensorConfig {
    /// Create a sensor entry with a title.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: Some(title.into()),
        }
    }

    /// The title to display for this sensor's panel.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Sensors to display, in panel order.
    #[serde(default = "default_sensors")]
    pub sensors: Vec<SensorConfig>,

    /// Seconds between feed readings.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Number of historical samples preloaded per sensor at startup.
    #[serde(default = "default_history_len")]
    pub history_len: usize,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_sensors() -> Vec<SensorConfig> {
    vec![
        SensorConfig::new("temperature", "Temperature [°C]"),
        SensorConfig::new("pressure", "Pressure [hPa]"),
        SensorConfig::new("humidity", "Humidity [%]"),
        SensorConfig::new("light", "Light [lx]"),
    ]
}

fn default_interval_secs() -> u64 {
    1
}

fn default_history_len() -> usize {
    300
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sensors: default_sensors(),
            interval_secs: default_interval_secs(),
            history_len: default_history_len(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Load a configuration file in JSON5 format.
pub fn load_config<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    json5::from_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Load a configuration from a JSON5 string.
pub fn parse_config<T: for<'de> Deserialize<'de>>(content: &str) -> Result<T> {
    json5::from_str(content).map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config: DashboardConfig = parse_config("{}").unwrap();

        assert_eq!(config.interval_secs, 1);
        assert_eq!(config.history_len, 300);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);

        let names: Vec<&str> = config.sensors.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["temperature", "pressure", "humidity", "light"]);
    }

    #[test]
    fn test_parse_config_overrides() {
        let json5 = r#"
        {
            sensors: [
                { name: "temperature" },
                { name: "light", title: "Ambient light" },
            ],
            interval_secs: 5,
            history_len: 60,
            logging: {
                level: "debug",
                format: "json",
            },
        }
        "#;

        let config: DashboardConfig = parse_config(json5).unwrap();

        assert_eq!(config.sensors.len(), 2);
        assert_eq!(config.sensors[0].display_title(), "temperature");
        assert_eq!(config.sensors[1].display_title(), "Ambient light");
        assert_eq!(config.interval_secs, 5);
        assert_eq!(config.history_len, 60);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result: Result<DashboardConfig> = load_config("/nonexistent/sensordash.json5");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
