use crate::sample::Sample;

/// The rendering target that turns a point sequence into a visual plot.
///
/// The contract with the widget is full replacement: `set_data` replaces
/// the whole point sequence for the series, `setup_grid` recomputes axes
/// and grid, `draw` repaints. The three calls are made sequentially on
/// every redraw; there is no partial-application variant.
///
/// A surface is exclusively owned by one panel. It is created at panel
/// construction and mutated on every redraw.
pub trait ChartSurface {
    /// Replace the surface's point sequence with `data`, oldest first.
    fn set_data(&mut self, data: Vec<Sample>);

    /// Recompute axis ranges and grid lines from the current point sequence.
    fn setup_grid(&mut self);

    /// Repaint the surface.
    fn draw(&mut self);
}
