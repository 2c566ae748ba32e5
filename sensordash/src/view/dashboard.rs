//! Dashboard view showing all sensor panels.

use iced::widget::{Column, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length, Theme};

use sensordash_common::{Dashboard, Panel};

use crate::message::Message;
use crate::view::formatting::format_timestamp;
use crate::view::plot::{PlotSurface, plot_view};

/// Dashboard view state.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// The host container with one panel per sensor.
    pub panels: Dashboard<PlotSurface>,
    /// Whether the feed is delivering readings.
    pub connected: bool,
    /// Last feed error, if any.
    pub last_error: Option<String>,
    /// Time of the most recent reading (epoch seconds).
    pub last_update: Option<f64>,
}

/// Render the dashboard view.
pub fn dashboard_view(state: &DashboardState) -> Element<'_, Message> {
    let header = render_header(state);
    let panels = render_panel_list(state);

    let content = column![header, rule::horizontal(1), panels]
        .spacing(10)
        .padding(20);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header with feed status.
fn render_header(state: &DashboardState) -> Element<'_, Message> {
    let title = text("SensorDash").size(24);

    let status = if state.connected {
        text("Connected")
            .size(14)
            .style(|_theme: &Theme| text::Style {
                color: Some(iced::Color::from_rgb(0.2, 0.8, 0.2)),
            })
    } else {
        text("Disconnected")
            .size(14)
            .style(|_theme: &Theme| text::Style {
                color: Some(iced::Color::from_rgb(0.8, 0.2, 0.2)),
            })
    };

    let panel_count = text(format!("{} panels", state.panels.len())).size(14);

    let mut header_row = row![title, panel_count, status]
        .spacing(20)
        .align_y(Alignment::Center);

    if let Some(last_update) = state.last_update {
        header_row = header_row.push(text(format!("updated {}", format_timestamp(last_update))).size(14));
    }

    let mut header_col = Column::new().push(header_row);

    if let Some(ref error) = state.last_error {
        let error_text = text(format!("Error: {}", error))
            .size(12)
            .style(|_theme: &Theme| text::Style {
                color: Some(iced::Color::from_rgb(0.8, 0.2, 0.2)),
            });
        header_col = header_col.push(error_text);
    }

    header_col.spacing(5).into()
}

/// Render the panel list.
fn render_panel_list(state: &DashboardState) -> Element<'_, Message> {
    if state.panels.is_empty() {
        return container(text("Waiting for sensor data...").size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut panel_list = Column::new().spacing(10);

    for panel in state.panels.panels() {
        panel_list = panel_list.push(render_panel_card(panel));
    }

    scrollable(panel_list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render a single panel card: title, current-value label, plot region.
fn render_panel_card(panel: &Panel<PlotSurface>) -> Element<'_, Message> {
    let title = text(panel.title().unwrap_or(panel.name())).size(16);
    let value = text(panel.displayed_value().unwrap_or("--")).size(22);

    let header = row![title, value].spacing(15).align_y(Alignment::Center);

    let card = column![header, plot_view(panel.surface())].spacing(5);

    container(card).padding(10).width(Length::Fill).into()
}
