//! Recording chart surface for testing.
//!
//! Provides a [`ChartSurface`] implementation that records the calls made
//! to it, so tests can assert the widget's redraw contract without a real
//! rendering backend.

use crate::sample::Sample;
use crate::surface::ChartSurface;

/// Chart surface that records every call made to it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Every `set_data` payload, in call order.
    pub set_data_calls: Vec<Vec<Sample>>,
    /// Number of `setup_grid` calls.
    pub setup_grid_calls: usize,
    /// Number of `draw` calls.
    pub draw_calls: usize,
}

impl RecordingSurface {
    /// Create a surface with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed redraws.
    pub fn redraw_count(&self) -> usize {
        self.draw_calls
    }

    /// The point sequence most recently pushed via `set_data`.
    pub fn last_data(&self) -> Option<&[Sample]> {
        self.set_data_calls.last().map(|data| data.as_slice())
    }
}

impl ChartSurface for RecordingSurface {
    fn set_data(&mut self, data: Vec<Sample>) {
        self.set_data_calls.push(data);
    }

    fn setup_grid(&mut self) {
        self.setup_grid_calls += 1;
    }

    fn draw(&mut self) {
        self.draw_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_records_calls() {
        let mut surface = RecordingSurface::new();
        surface.set_data(vec![Sample::new(1000.0, 1.0)]);
        surface.setup_grid();
        surface.draw();

        assert_eq!(surface.set_data_calls.len(), 1);
        assert_eq!(surface.setup_grid_calls, 1);
        assert_eq!(surface.redraw_count(), 1);
        assert_eq!(surface.last_data(), Some(&[Sample::new(1000.0, 1.0)][..]));
    }
}
