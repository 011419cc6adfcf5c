pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod view;

use chrono::NaiveDate;
use tracing::{debug, warn};

use errors::CoreError;
use models::expense::Expense;
use services::budget_service::BudgetService;
use storage::store::{BudgetStore, KeyValueStore};
use view::chart::{ChartAdapter, SeriesRenderer};
use view::info::{ViewSink, ViewUpdater};

/// Main entry point for the Budget Tracker core library.
///
/// Owns the persistent store and the two host-supplied boundaries (the
/// view sink and the series renderer), and exposes the user commands:
/// set budget, add expense, startup.
///
/// Control flow for every command: validate input, mutate the store,
/// then refresh meter, info display, and chart in one pass. Derived
/// values are recomputed from the store on every refresh, never cached.
#[must_use]
pub struct BudgetTracker {
    store: BudgetStore,
    budget_service: BudgetService,
    view: ViewUpdater,
    chart: ChartAdapter,
    sink: Box<dyn ViewSink>,
    renderer: Box<dyn SeriesRenderer>,
}

impl std::fmt::Debug for BudgetTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetTracker")
            .field("budget", &self.store.get_budget())
            .field("expenses", &self.store.get_expenses().len())
            .finish()
    }
}

impl BudgetTracker {
    /// Wire up a tracker over the given storage backend and host
    /// boundaries. Call [`startup`](Self::startup) afterwards to render
    /// whatever is already persisted.
    pub fn new(
        backend: Box<dyn KeyValueStore>,
        sink: Box<dyn ViewSink>,
        renderer: Box<dyn SeriesRenderer>,
    ) -> Self {
        Self {
            store: BudgetStore::new(backend),
            budget_service: BudgetService::new(),
            view: ViewUpdater::new(),
            chart: ChartAdapter::new(),
            sink,
            renderer,
        }
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Set the budget from raw user input.
    ///
    /// Overwrites (never accumulates) the stored budget, clears the
    /// budget input field, and refreshes the whole view. On invalid
    /// input: surfaces a warning, mutates nothing, leaves the input
    /// field untouched, and returns the error.
    pub fn set_budget(&mut self, raw: &str) -> Result<f64, CoreError> {
        let value = match parse_amount(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(raw, "rejected budget input");
                self.sink.show_warning(&e.to_string());
                return Err(e);
            }
        };

        self.store.set_budget(value)?;
        self.sink.clear_budget_input();
        self.refresh_all();

        debug!(budget = value, "budget set");
        Ok(value)
    }

    /// Log an expense from raw user input, dated with today's local
    /// calendar date.
    ///
    /// Appends to the expense log, clears the expense input field, and
    /// refreshes the whole view against the currently stored budget.
    /// Failure behavior matches [`set_budget`](Self::set_budget).
    pub fn add_expense(&mut self, raw: &str) -> Result<Expense, CoreError> {
        let amount = match parse_amount(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(raw, "rejected expense input");
                self.sink.show_warning(&e.to_string());
                return Err(e);
            }
        };

        let expense = Expense::new(amount);
        self.store.append_expense(expense.clone())?;
        self.sink.clear_expense_input();
        self.refresh_all();

        debug!(amount, date = %expense.date, "expense logged");
        Ok(expense)
    }

    /// Log an expense on an explicit date (programmatic entry).
    ///
    /// Same amount rule as [`add_expense`](Self::add_expense), but skips
    /// the input-field plumbing: no warning surfaced, no field cleared.
    pub fn add_expense_on(&mut self, date: NaiveDate, amount: f64) -> Result<Expense, CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "expense amount must be a positive number, got {amount}"
            )));
        }

        let expense = Expense::on(date, amount);
        self.store.append_expense(expense.clone())?;
        self.refresh_all();

        debug!(amount, date = %expense.date, "expense logged");
        Ok(expense)
    }

    /// Initial-load path: render whatever is already persisted.
    ///
    /// Refreshes meter and info only when a nonzero budget is stored;
    /// the chart renders unconditionally, empty series included.
    pub fn startup(&mut self) {
        if self.store.get_budget() != 0.0 {
            self.view.refresh_meter(&self.store, self.sink.as_mut());
            self.view.refresh_info(&self.store, self.sink.as_mut());
        }
        self.chart.refresh(&self.store, self.renderer.as_mut());
    }

    /// Refresh meter, info display, and chart together.
    ///
    /// Runs at the end of every successful command; safe to call again at
    /// any time (idempotent without an intervening mutation).
    pub fn refresh_all(&mut self) {
        self.view.refresh_meter(&self.store, self.sink.as_mut());
        self.view.refresh_info(&self.store, self.sink.as_mut());
        self.chart.refresh(&self.store, self.renderer.as_mut());
    }

    // ── Derived Values ──────────────────────────────────────────────

    /// The currently stored budget (0 if never set).
    #[must_use]
    pub fn budget(&self) -> f64 {
        self.store.get_budget()
    }

    /// The stored expense log in insertion order.
    #[must_use]
    pub fn expenses(&self) -> Vec<Expense> {
        self.store.get_expenses()
    }

    /// Sum of all logged expense amounts.
    #[must_use]
    pub fn total_spent(&self) -> f64 {
        self.budget_service.total_spent(&self.store.get_expenses())
    }

    /// Budget minus total spent. Negative on overspend.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.budget_service
            .remaining(self.store.get_budget(), &self.store.get_expenses())
    }

    /// Raw usage percentage, unclamped (`inf`/`NaN` at zero budget).
    #[must_use]
    pub fn usage_percentage(&self) -> f64 {
        self.budget_service
            .usage_percentage(self.store.get_budget(), &self.store.get_expenses())
    }
}

/// Parse a raw numeric field.
///
/// Valid means: parses as a float, finite, and strictly positive. Empty,
/// non-numeric, `NaN`/`inf`, zero, and negative input are all rejected
/// with the single user-facing error kind.
fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CoreError::InvalidInput(format!(
            "please enter a valid positive amount, got '{raw}'"
        ))),
    }
}
