use crate::services::budget_service::BudgetService;
use crate::storage::store::BudgetStore;

/// Trait abstraction for the on-screen control surface.
///
/// The host shell (web view, TUI, test harness) implements this; the core
/// pushes values in and never reads them back. Text values arrive already
/// formatted to exactly two decimal places.
pub trait ViewSink {
    /// Set the meter's visual fill proportion, always within [0, 100].
    fn set_meter_fill(&mut self, percent: f64);

    /// Display the current total budget (pre-formatted, 2 decimals).
    fn set_total_budget(&mut self, formatted: &str);

    /// Display the remaining budget (pre-formatted, 2 decimals, may be
    /// negative).
    fn set_remaining(&mut self, formatted: &str);

    /// Surface a blocking warning for rejected input.
    fn show_warning(&mut self, message: &str);

    /// Clear the "set budget" input field after a successful command.
    fn clear_budget_input(&mut self);

    /// Clear the "add expense" input field after a successful command.
    fn clear_expense_input(&mut self);
}

/// Pushes computed values into the view.
///
/// Both refresh methods are idempotent and side-effect-only. They always
/// read fresh from the store, never from a cached prior computation.
pub struct ViewUpdater {
    budget_service: BudgetService,
}

impl ViewUpdater {
    pub fn new() -> Self {
        Self {
            budget_service: BudgetService::new(),
        }
    }

    /// Recompute the clamped usage percentage and push it to the meter.
    pub fn refresh_meter(&self, store: &BudgetStore, sink: &mut dyn ViewSink) {
        let budget = store.get_budget();
        let expenses = store.get_expenses();
        sink.set_meter_fill(self.budget_service.meter_fill(budget, &expenses));
    }

    /// Recompute budget and remaining, format to 2 decimals, and push both
    /// display fields.
    pub fn refresh_info(&self, store: &BudgetStore, sink: &mut dyn ViewSink) {
        let budget = store.get_budget();
        let expenses = store.get_expenses();
        let remaining = self.budget_service.remaining(budget, &expenses);

        sink.set_total_budget(&format!("{budget:.2}"));
        sink.set_remaining(&format!("{remaining:.2}"));
    }
}

impl Default for ViewUpdater {
    fn default() -> Self {
        Self::new()
    }
}
