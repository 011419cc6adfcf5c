use crate::models::expense::Expense;

/// Computes derived budget values: total spent, remaining, usage.
///
/// Pure business logic, no I/O. Every value is recomputed from the
/// expense log on demand, never cached across calls.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Sum of all expense amounts. Empty log is 0.
    #[must_use]
    pub fn total_spent(&self, expenses: &[Expense]) -> f64 {
        expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus total spent. Goes negative on overspend; the value is
    /// displayed as-is, never clamped.
    #[must_use]
    pub fn remaining(&self, budget: f64, expenses: &[Expense]) -> f64 {
        budget - self.total_spent(expenses)
    }

    /// Raw usage percentage: total spent / budget * 100.
    ///
    /// A zero budget divides by zero, yielding `inf` (something spent) or
    /// `NaN` (nothing spent). Callers that display this value must go
    /// through [`meter_fill`](Self::meter_fill) instead.
    #[must_use]
    pub fn usage_percentage(&self, budget: f64, expenses: &[Expense]) -> f64 {
        self.total_spent(expenses) / budget * 100.0
    }

    /// Usage percentage clamped into [0, 100] for the visual meter.
    ///
    /// `NaN` (0 spent against a 0 budget) maps to 0; `inf` clamps to 100.
    #[must_use]
    pub fn meter_fill(&self, budget: f64, expenses: &[Expense]) -> f64 {
        let pct = self.usage_percentage(budget, expenses);
        if pct.is_nan() {
            0.0
        } else {
            pct.clamp(0.0, 100.0)
        }
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}
