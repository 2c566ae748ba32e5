//! Time-series plot surface using Iced canvas.

use iced::mouse;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

use sensordash_common::{ChartSurface, Sample};

use super::formatting::{format_clock, format_value};

/// Chart surface backed by an Iced canvas.
///
/// The surface retains the point sequence pushed by `set_data`;
/// `setup_grid` recomputes the axis bounds from it; `draw` invalidates the
/// canvas cache so the next frame repaints. The visual configuration is
/// fixed: time-mode x-axis, point markers, no connecting line, no shadow.
#[derive(Debug)]
pub struct PlotSurface {
    /// The point sequence to display, oldest first.
    data: Vec<Sample>,
    /// Time axis bounds (epoch seconds), recomputed by `setup_grid`.
    time_min: f64,
    time_max: f64,
    /// Value axis bounds, recomputed by `setup_grid`.
    value_min: f64,
    value_max: f64,
    /// Cache for the plot geometry.
    cache: Cache,
}

impl PlotSurface {
    /// Create an empty plot surface.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            time_min: 0.0,
            time_max: 1.0,
            value_min: 0.0,
            value_max: 1.0,
            cache: Cache::new(),
        }
    }

    /// The retained point sequence.
    pub fn points(&self) -> &[Sample] {
        &self.data
    }

    /// Time axis bounds as recomputed by the last `setup_grid`.
    pub fn time_bounds(&self) -> (f64, f64) {
        (self.time_min, self.time_max)
    }

    /// Value axis bounds as recomputed by the last `setup_grid`.
    pub fn value_bounds(&self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }
}

impl Default for PlotSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartSurface for PlotSurface {
    fn set_data(&mut self, data: Vec<Sample>) {
        self.data = data;
    }

    fn setup_grid(&mut self) {
        if self.data.is_empty() {
            self.time_min = 0.0;
            self.time_max = 1.0;
            self.value_min = 0.0;
            self.value_max = 1.0;
            return;
        }

        let mut time_min = f64::INFINITY;
        let mut time_max = f64::NEG_INFINITY;
        let mut value_min = f64::INFINITY;
        let mut value_max = f64::NEG_INFINITY;

        for sample in &self.data {
            time_min = time_min.min(sample.time);
            time_max = time_max.max(sample.time);
            value_min = value_min.min(sample.value);
            value_max = value_max.max(sample.value);
        }

        // A single point (or identical timestamps) gets a 30 s window
        if time_max - time_min < 1.0 {
            time_min -= 30.0;
            time_max += 30.0;
        }

        let range = value_max - value_min;
        if range < 0.001 {
            // Very small range, add artificial padding
            value_min -= 0.5;
            value_max += 0.5;
        } else {
            let padding = range * 0.1;
            value_min -= padding;
            value_max += padding;
        }

        self.time_min = time_min;
        self.time_max = time_max;
        self.value_min = value_min;
        self.value_max = value_max;
    }

    fn draw(&mut self) {
        self.cache.clear();
    }
}

/// Canvas program that renders the plot surface.
pub struct Plot<'a> {
    surface: &'a PlotSurface,
}

impl<'a> Plot<'a> {
    /// Create a new plot program over the surface.
    pub fn new(surface: &'a PlotSurface) -> Self {
        Self { surface }
    }
}

impl<'a> canvas::Program<crate::message::Message> for Plot<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.surface.cache.draw(renderer, bounds.size(), |frame| {
            self.draw_plot(frame, bounds.size());
        });

        vec![geometry]
    }
}

impl<'a> Plot<'a> {
    /// Draw the plot onto the frame.
    fn draw_plot(&self, frame: &mut Frame, size: Size) {
        let padding = 40.0;
        let plot_width = size.width - padding * 2.0;
        let plot_height = size.height - padding * 2.0;

        if plot_width <= 0.0 || plot_height <= 0.0 {
            return;
        }

        // Draw background
        let background = Path::rectangle(Point::ORIGIN, size);
        frame.fill(&background, Color::from_rgb(0.1, 0.1, 0.12));

        // Draw plot area background
        let plot_bg = Path::rectangle(
            Point::new(padding, padding),
            Size::new(plot_width, plot_height),
        );
        frame.fill(&plot_bg, Color::from_rgb(0.08, 0.08, 0.1));

        if self.surface.data.is_empty() {
            // Draw "no data" message
            let no_data = Text {
                content: "No data".to_string(),
                position: Point::new(size.width / 2.0 - 30.0, size.height / 2.0),
                color: Color::from_rgb(0.5, 0.5, 0.5),
                size: 16.0.into(),
                ..Text::default()
            };
            frame.fill_text(no_data);
            return;
        }

        let (time_min, time_max) = self.surface.time_bounds();
        let (value_min, value_max) = self.surface.value_bounds();
        let time_range = time_max - time_min;
        let value_range = value_max - value_min;

        // Draw grid lines
        self.draw_grid(frame, padding, plot_width, plot_height);

        // Draw point markers, no connecting line
        for sample in &self.surface.data {
            let x = padding + ((sample.time - time_min) / time_range) as f32 * plot_width;
            let y = padding + plot_height
                - ((sample.value - value_min) / value_range) as f32 * plot_height;

            let dot = Path::circle(Point::new(x, y), 2.0);
            frame.fill(&dot, Color::from_rgb(0.3, 0.8, 1.0));
        }
    }

    /// Draw grid lines and axis labels.
    fn draw_grid(&self, frame: &mut Frame, padding: f32, plot_width: f32, plot_height: f32) {
        let grid_color = Color::from_rgb(0.2, 0.2, 0.25);
        let label_color = Color::from_rgb(0.5, 0.5, 0.5);

        let (time_min, time_max) = self.surface.time_bounds();
        let (value_min, value_max) = self.surface.value_bounds();

        // Horizontal grid lines (value axis)
        let num_h_lines = 5;
        let value_range = value_max - value_min;

        for i in 0..=num_h_lines {
            let y = padding + (i as f32 / num_h_lines as f32) * plot_height;
            let value = value_max - (i as f64 / num_h_lines as f64) * value_range;

            // Grid line
            let line = Path::line(Point::new(padding, y), Point::new(padding + plot_width, y));
            frame.stroke(
                &line,
                Stroke::default().with_color(grid_color).with_width(1.0),
            );

            // Value label
            let label = Text {
                content: format_value(value),
                position: Point::new(5.0, y - 6.0),
                color: label_color,
                size: 10.0.into(),
                ..Text::default()
            };
            frame.fill_text(label);
        }

        // Vertical grid lines (time axis)
        let num_v_lines = 4;

        for i in 0..=num_v_lines {
            let x = padding + (i as f32 / num_v_lines as f32) * plot_width;
            let time = time_min + (i as f64 / num_v_lines as f64) * (time_max - time_min);

            // Grid line
            let line = Path::line(
                Point::new(x, padding),
                Point::new(x, padding + plot_height),
            );
            frame.stroke(
                &line,
                Stroke::default().with_color(grid_color).with_width(1.0),
            );

            // Wall-clock label
            let label = Text {
                content: format_clock(time),
                position: Point::new(x - 20.0, padding + plot_height + 10.0),
                color: label_color,
                size: 10.0.into(),
                ..Text::default()
            };
            frame.fill_text(label);
        }
    }
}

/// Create a plot element for the surface.
pub fn plot_view(surface: &PlotSurface) -> Element<'_, crate::message::Message> {
    Canvas::new(Plot::new(surface))
        .width(Length::Fill)
        .height(Length::Fixed(200.0))
        .into()
}
