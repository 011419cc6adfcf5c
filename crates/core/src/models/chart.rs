use serde::{Deserialize, Serialize};

/// A chart-ready label/value series.
///
/// The core derives these from the expense log; the renderer just draws.
/// `labels` and `values` are parallel and index-aligned: `labels[i]` is the
/// date string for `values[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Ordered date labels (`YYYY-MM-DD`), earliest first
    pub labels: Vec<String>,

    /// Ordered expense amounts, same length as `labels`
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// An empty series (still rendered, as a blank chart).
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of data points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
