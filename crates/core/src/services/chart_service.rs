use crate::models::chart::ChartSeries;
use crate::models::expense::Expense;

/// How many trailing expense entries the chart shows.
pub const TRAILING_WINDOW: usize = 7;

/// Derives chart-ready series from the expense log.
///
/// The core computes the series; the renderer only draws it.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the label/value series for the trailing window.
    ///
    /// Takes the last [`TRAILING_WINDOW`] entries by insertion order (or
    /// fewer if the log is shorter), earliest of the window first, most
    /// recent last. Labels are the `YYYY-MM-DD` date strings.
    #[must_use]
    pub fn trailing_series(&self, expenses: &[Expense]) -> ChartSeries {
        let start = expenses.len().saturating_sub(TRAILING_WINDOW);
        let window = &expenses[start..];

        ChartSeries {
            labels: window
                .iter()
                .map(|e| e.date.format("%Y-%m-%d").to_string())
                .collect(),
            values: window.iter().map(|e| e.amount).collect(),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
