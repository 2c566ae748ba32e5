use crate::error::{Error, Result};
use crate::panel::Panel;
use crate::surface::ChartSurface;

/// The host container owning the dashboard's panels.
///
/// Panels are kept in creation order and addressed by series name, which
/// is unique within one dashboard. The container is passed explicitly to
/// whoever creates panels; there is no process-wide root.
#[derive(Debug)]
pub struct Dashboard<S> {
    panels: Vec<Panel<S>>,
}

impl<S> Default for Dashboard<S> {
    fn default() -> Self {
        Self { panels: Vec::new() }
    }
}

impl<S> Dashboard<S> {
    /// Create an empty dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the dashboard has no panels.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Iterate over panels in creation order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel<S>> {
        self.panels.iter()
    }

    /// Look up a panel by series name.
    pub fn panel(&self, name: &str) -> Option<&Panel<S>> {
        self.panels.iter().find(|p| p.name() == name)
    }

    /// Look up a panel by series name, mutably.
    pub fn panel_mut(&mut self, name: &str) -> Option<&mut Panel<S>> {
        self.panels.iter_mut().find(|p| p.name() == name)
    }
}

impl<S: ChartSurface> Dashboard<S> {
    /// Create a new panel in this dashboard with the given chart surface.
    ///
    /// Fails with [`Error::DuplicateSeriesName`] when a panel with that
    /// name already exists; duplicate names would produce colliding panel
    /// identifiers.
    pub fn create_panel_with(
        &mut self,
        name: &str,
        title: Option<&str>,
        surface: S,
    ) -> Result<&mut Panel<S>> {
        if self.panel(name).is_some() {
            return Err(Error::DuplicateSeriesName(name.to_string()));
        }

        tracing::debug!(panel = name, "creating panel");
        self.panels.push(Panel::new(name, title, surface));
        let idx = self.panels.len() - 1;
        Ok(&mut self.panels[idx])
    }

    /// Create a new panel with a default-constructed chart surface.
    pub fn create_panel(&mut self, name: &str, title: Option<&str>) -> Result<&mut Panel<S>>
    where
        S: Default,
    {
        self.create_panel_with(name, title, S::default())
    }

    /// Route one sample to the named panel and append it. Does not redraw.
    ///
    /// Fails with [`Error::MissingContainer`] when no panel container
    /// exists for the series.
    pub fn add_sample(&mut self, name: &str, time: f64, value: f64) -> Result<()> {
        match self.panel_mut(name) {
            Some(panel) => panel.add(time, value),
            None => Err(Error::MissingContainer(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingSurface;

    #[test]
    fn test_create_panel_in_order() {
        let mut dashboard: Dashboard<RecordingSurface> = Dashboard::new();
        dashboard.create_panel("temperature", Some("Temperature")).unwrap();
        dashboard.create_panel("pressure", None).unwrap();

        let names: Vec<&str> = dashboard.panels().map(|p| p.name()).collect();
        assert_eq!(names, vec!["temperature", "pressure"]);
        assert_eq!(
            dashboard.panel("temperature").and_then(|p| p.title()),
            Some("Temperature")
        );
    }

    #[test]
    fn test_duplicate_panel_name_rejected() {
        let mut dashboard: Dashboard<RecordingSurface> = Dashboard::new();
        dashboard.create_panel("temperature", None).unwrap();

        let err = dashboard.create_panel("temperature", None).unwrap_err();
        assert!(matches!(err, Error::DuplicateSeriesName(name) if name == "temperature"));
        assert_eq!(dashboard.len(), 1);
    }

    #[test]
    fn test_add_sample_routes_to_panel() {
        let mut dashboard: Dashboard<RecordingSurface> = Dashboard::new();
        dashboard.create_panel("humidity", None).unwrap();

        dashboard.add_sample("humidity", 1000.0, 55.0).unwrap();
        assert_eq!(dashboard.panel("humidity").unwrap().series().len(), 1);
    }

    #[test]
    fn test_add_sample_missing_panel() {
        let mut dashboard: Dashboard<RecordingSurface> = Dashboard::new();

        let err = dashboard.add_sample("light", 1000.0, 120.0).unwrap_err();
        assert!(matches!(err, Error::MissingContainer(name) if name == "light"));
    }
}
