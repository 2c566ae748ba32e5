//! UI tests using the iced_test Simulator.
//!
//! These verify the dashboard view renders without a running feed.

use iced_test::simulator;

use sensordash::view::dashboard::{DashboardState, dashboard_view};
use sensordash_common::Sample;

/// Test that the dashboard view renders correctly with no panels.
#[test]
fn test_dashboard_empty() {
    let state = DashboardState::default();
    let mut ui = simulator(dashboard_view(&state));

    assert!(ui.find("Waiting for sensor data...").is_ok());
    assert!(ui.find("Disconnected").is_ok());
}

/// Test that the dashboard shows panels when populated.
#[test]
fn test_dashboard_with_panels() {
    let mut state = DashboardState::default();
    state.connected = true;

    state
        .panels
        .create_panel("temperature", Some("Temperature [°C]"))
        .unwrap();
    state
        .panels
        .panel_mut("temperature")
        .unwrap()
        .load_initial_data(vec![Sample::new(1000.0, 21.46)])
        .unwrap();

    let mut ui = simulator(dashboard_view(&state));

    assert!(ui.find("Temperature [°C]").is_ok());
    // Current-value label, rounded to one decimal place
    assert!(ui.find("21.5").is_ok());
    assert!(ui.find("Connected").is_ok());
    assert!(ui.find("1 panels").is_ok());
}

/// Test that a feed error is shown in the header.
#[test]
fn test_dashboard_feed_error() {
    let mut state = DashboardState::default();
    state.last_error = Some("feed exhausted".to_string());

    let mut ui = simulator(dashboard_view(&state));

    assert!(ui.find("Disconnected").is_ok());
    assert!(ui.find("Error: feed exhausted").is_ok());
}
