use crate::services::chart_service::ChartService;
use crate::storage::store::BudgetStore;

/// Trait abstraction for the external charting collaborator.
///
/// The core's contract ends at producing the (labels, values) pair and
/// issuing the create/destroy calls; actual drawing is the host's job.
pub trait SeriesRenderer {
    /// Draw a fresh chart from the given series. `labels` and `values`
    /// are index-aligned, earliest first, y-axis starting at 0.
    fn render(&mut self, labels: &[String], values: &[f64]);

    /// Tear down the currently displayed chart instance.
    fn destroy(&mut self);
}

/// Feeds the trailing-window series to the renderer.
///
/// No incremental update path: every refresh destroys the previous chart
/// instance (if one exists) and renders from scratch.
pub struct ChartAdapter {
    chart_service: ChartService,
    rendered: bool,
}

impl ChartAdapter {
    pub fn new() -> Self {
        Self {
            chart_service: ChartService::new(),
            rendered: false,
        }
    }

    /// Rebuild the chart from the current expense log.
    ///
    /// Renders unconditionally, even when the log is empty (a blank chart
    /// is still a chart).
    pub fn refresh(&mut self, store: &BudgetStore, renderer: &mut dyn SeriesRenderer) {
        let series = self.chart_service.trailing_series(&store.get_expenses());

        if self.rendered {
            renderer.destroy();
        }
        renderer.render(&series.labels, &series.values);
        self.rendered = true;
    }
}

impl Default for ChartAdapter {
    fn default() -> Self {
        Self::new()
    }
}
