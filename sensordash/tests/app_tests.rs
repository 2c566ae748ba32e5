//! Integration tests for the application update loop.
//!
//! These drive `SensorDash::update` directly, without a running event loop
//! or a real feed.

use sensordash::app::SensorDash;
use sensordash::message::Message;
use sensordash_common::{DashboardConfig, Sample};

fn boot() -> SensorDash {
    let (app, _task) = SensorDash::boot(DashboardConfig::default());
    app
}

#[test]
fn test_boot_creates_configured_panels() {
    let app = boot();

    let names: Vec<&str> = app.dashboard().panels.panels().map(|p| p.name()).collect();
    assert_eq!(names, vec!["temperature", "pressure", "humidity", "light"]);
    assert!(!app.dashboard().connected);
}

#[test]
fn test_live_sample_appends_and_redraws() {
    let mut app = boot();
    let _ = app.update(Message::FeedStarted);
    let _ = app.update(Message::SampleReceived {
        name: "temperature".to_string(),
        time: 1000.0,
        value: 21.46,
    });

    assert!(app.dashboard().connected);
    assert_eq!(app.dashboard().last_update, Some(1000.0));

    let panel = app.dashboard().panels.panel("temperature").unwrap();
    assert_eq!(panel.series().len(), 1);
    assert_eq!(panel.displayed_value(), Some("21.5"));
    // The redraw pushed the full buffer to the plot surface
    assert_eq!(panel.surface().points(), &[Sample::new(1000.0, 21.46)][..]);
}

#[test]
fn test_unknown_sensor_sample_is_dropped() {
    let mut app = boot();
    let _ = app.update(Message::SampleReceived {
        name: "voltage".to_string(),
        time: 1000.0,
        value: 3.3,
    });

    assert!(app.dashboard().panels.panel("voltage").is_none());
    assert_eq!(app.dashboard().last_update, None);
}

#[test]
fn test_invalid_sample_is_dropped() {
    let mut app = boot();
    let _ = app.update(Message::SampleReceived {
        name: "temperature".to_string(),
        time: 1000.0,
        value: f64::NAN,
    });

    let panel = app.dashboard().panels.panel("temperature").unwrap();
    assert!(panel.series().is_empty());
    assert_eq!(panel.displayed_value(), None);
}

#[test]
fn test_history_loaded_populates_panel() {
    let mut app = boot();
    let _ = app.update(Message::HistoryLoaded {
        name: "humidity".to_string(),
        samples: vec![Sample::new(1000.0, 10.0), Sample::new(1001.0, 30.567)],
    });

    let panel = app.dashboard().panels.panel("humidity").unwrap();
    assert_eq!(panel.series().len(), 2);
    assert_eq!(panel.displayed_value(), Some("30.6"));
    assert_eq!(panel.surface().points().len(), 2);
    assert_eq!(app.dashboard().last_update, Some(1001.0));
}

#[test]
fn test_feed_failure_is_reported() {
    let mut app = boot();
    let _ = app.update(Message::FeedStarted);
    let _ = app.update(Message::FeedFailed("stream ended".to_string()));

    assert!(!app.dashboard().connected);
    assert_eq!(app.dashboard().last_error.as_deref(), Some("stream ended"));
}
