use crate::error::{Error, Result};
use crate::sample::Sample;
use crate::series::MetricSeries;
use crate::surface::ChartSurface;

/// One metric's rolling sample window and its visual representation.
///
/// A panel exclusively owns its series buffer and its chart surface. The
/// surface is created at construction and mutated on every redraw. Panel
/// and plot regions are addressable by predictable identifiers derived
/// from the series name (`panel-<name>`, `plot-<name>`).
#[derive(Debug)]
pub struct Panel<S> {
    series: MetricSeries,
    surface: S,
    title: Option<String>,
    displayed_value: Option<String>,
}

impl<S> Panel<S> {
    /// Create a panel for `name` with the given chart surface.
    pub fn new(name: impl Into<String>, title: Option<&str>, surface: S) -> Self {
        Self {
            series: MetricSeries::new(name),
            surface,
            title: title.map(str::to_owned),
            displayed_value: None,
        }
    }

    /// Series name.
    pub fn name(&self) -> &str {
        self.series.name()
    }

    /// Panel title, if one was given at creation.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Identifier of the panel region, derived from the series name.
    pub fn panel_id(&self) -> String {
        format!("panel-{}", self.name())
    }

    /// Identifier of the plot region, derived from the series name.
    pub fn plot_id(&self) -> String {
        format!("plot-{}", self.name())
    }

    /// The rolling sample window.
    pub fn series(&self) -> &MetricSeries {
        &self.series
    }

    /// The chart surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the chart surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The current-value label content, if one has been set.
    pub fn displayed_value(&self) -> Option<&str> {
        self.displayed_value.as_deref()
    }

    /// Append one sample to the series buffer. Does not redraw.
    ///
    /// The sample is rejected when its time or value is not a finite
    /// number. Out-of-order timestamps are accepted and plotted as given;
    /// there is no monotonicity check.
    pub fn add(&mut self, time: f64, value: f64) -> Result<()> {
        let sample = Sample::new(time, value);
        if !sample.is_finite() {
            return Err(Error::InvalidSample {
                series: self.name().to_string(),
                time,
                value,
            });
        }
        self.series.push(sample);
        Ok(())
    }

    /// Update the panel's label to a rounded rendering of `value`.
    pub fn set_displayed_value(&mut self, value: f64) {
        self.displayed_value = Some(format_displayed_value(value));
    }
}

impl<S: ChartSurface> Panel<S> {
    /// Push the full current buffer to the chart surface and re-render.
    ///
    /// Three sequential surface calls: full data replacement, grid
    /// recompute, repaint. Idempotent with respect to buffer state.
    pub fn draw(&mut self) {
        self.surface.set_data(self.series.to_vec());
        self.surface.setup_grid();
        self.surface.draw();
    }

    /// Bulk-append historical samples, then redraw exactly once.
    ///
    /// All samples are validated before any is appended. Appending goes
    /// through the same evicting path as [`Panel::add`], so inputs longer
    /// than the window capacity keep only the most recent
    /// [`crate::series::MAX_SAMPLES`] entries. The displayed value is
    /// updated to the last sample's value when the input is non-empty.
    pub fn load_initial_data(&mut self, samples: impl IntoIterator<Item = Sample>) -> Result<()> {
        let samples: Vec<Sample> = samples.into_iter().collect();
        if let Some(bad) = samples.iter().find(|s| !s.is_finite()) {
            return Err(Error::InvalidSample {
                series: self.name().to_string(),
                time: bad.time,
                value: bad.value,
            });
        }

        for sample in &samples {
            self.series.push(*sample);
        }
        self.draw();

        if let Some(last) = samples.last() {
            self.set_displayed_value(last.value);
        }
        Ok(())
    }
}

/// Render a value for the current-value label, rounded to one decimal place.
pub fn format_displayed_value(value: f64) -> String {
    format!("{:.1}", value)
}
