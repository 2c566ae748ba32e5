//! SensorDash Iced application.

use iced::{Element, Subscription, Task, Theme};

use sensordash_common::{DashboardConfig, Sample};

use crate::message::Message;
use crate::subscription::{feed_subscription, tick_subscription};
use crate::view::dashboard::{DashboardState, dashboard_view};

/// The main SensorDash application.
pub struct SensorDash {
    /// Feed and panel configuration.
    config: DashboardConfig,
    /// Dashboard state.
    dashboard: DashboardState,
}

impl SensorDash {
    /// Boot the application with the given configuration.
    ///
    /// One panel is created per configured sensor, in configuration order.
    pub fn boot(config: DashboardConfig) -> (Self, Task<Message>) {
        let mut dashboard = DashboardState::default();

        for sensor in &config.sensors {
            if let Err(e) = dashboard
                .panels
                .create_panel(&sensor.name, Some(sensor.display_title()))
            {
                tracing::warn!(error = %e, "skipping sensor");
            }
        }

        (Self { config, dashboard }, Task::none())
    }

    /// Handle incoming messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FeedStarted => {
                tracing::info!("Feed started");
                self.dashboard.connected = true;
                self.dashboard.last_error = None;
            }

            Message::HistoryLoaded { name, samples } => {
                self.handle_history(&name, samples);
            }

            Message::SampleReceived { name, time, value } => {
                self.handle_sample(&name, time, value);
            }

            Message::FeedFailed(error) => {
                tracing::warn!(error = %error, "Feed failed");
                self.dashboard.connected = false;
                self.dashboard.last_error = Some(error);
            }

            Message::Tick => {
                // Relative timestamps in the header are recomputed on render
            }
        }

        Task::none()
    }

    /// Create subscriptions for the sensor feed and periodic updates.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([feed_subscription(self.config.clone()), tick_subscription()])
    }

    /// Render the view.
    pub fn view(&self) -> Element<'_, Message> {
        dashboard_view(&self.dashboard)
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Dashboard state (exposed for tests).
    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Handle a one-time history batch for one sensor.
    fn handle_history(&mut self, name: &str, samples: Vec<Sample>) {
        let count = samples.len();

        match self.dashboard.panels.panel_mut(name) {
            Some(panel) => match panel.load_initial_data(samples) {
                Ok(()) => {
                    self.dashboard.last_update = panel.series().latest().map(|s| s.time);
                    tracing::info!(panel = %name, count, "loaded initial data");
                }
                Err(e) => tracing::warn!(error = %e, "rejected initial data"),
            },
            None => tracing::warn!(panel = %name, "no panel container for history"),
        }
    }

    /// Handle one live reading: append, update the label, redraw.
    fn handle_sample(&mut self, name: &str, time: f64, value: f64) {
        if let Err(e) = self.dashboard.panels.add_sample(name, time, value) {
            tracing::warn!(error = %e, "dropping sample");
            return;
        }

        self.dashboard.last_update = Some(time);

        if let Some(panel) = self.dashboard.panels.panel_mut(name) {
            panel.set_displayed_value(value);
            panel.draw();
        }
    }
}
