use tracing::warn;

use crate::errors::CoreError;
use crate::models::expense::Expense;

/// Slot name for the stored budget (a JSON-encoded number).
pub const BUDGET_KEY: &str = "budget";

/// Slot name for the stored expense log (a JSON-encoded array).
pub const EXPENSES_KEY: &str = "expenses";

/// Trait abstraction over the backing key-value store.
///
/// The store holds opaque strings under named slots, like browser
/// localStorage. Backends are injected so the whole persistence layer can
/// be swapped for an in-memory fake in tests.
///
/// No transactional guarantees: a concurrent writer to the same backend
/// can race and clobber slots. Single-writer access is assumed.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// The persistent store: binds a key-value backend to the two fixed slots
/// (`budget` and `expenses`) and speaks JSON on the wire.
///
/// Read failures are never surfaced. An absent or unparsable slot reads as
/// its default (0 budget, empty log).
pub struct BudgetStore {
    backend: Box<dyn KeyValueStore>,
}

impl BudgetStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// The stored budget, or 0 if never set or unparsable.
    #[must_use]
    pub fn get_budget(&self) -> f64 {
        match self.backend.get(BUDGET_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| {
                warn!(slot = BUDGET_KEY, "stored budget unparsable, reading as 0");
                0.0
            }),
            None => 0.0,
        }
    }

    /// Overwrite the stored budget unconditionally.
    pub fn set_budget(&mut self, value: f64) -> Result<(), CoreError> {
        let raw = serde_json::to_string(&value)?;
        self.backend.set(BUDGET_KEY, &raw)
    }

    /// The stored expense log in insertion order, or an empty log if
    /// absent or unparsable.
    #[must_use]
    pub fn get_expenses(&self) -> Vec<Expense> {
        match self.backend.get(EXPENSES_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| {
                warn!(
                    slot = EXPENSES_KEY,
                    "stored expense log unparsable, reading as empty"
                );
                Vec::new()
            }),
            None => Vec::new(),
        }
    }

    /// Append one expense to the log.
    ///
    /// Reads the current log, pushes the entry, and writes the whole
    /// sequence back. The log is append-only: nothing is ever merged,
    /// edited, or removed.
    pub fn append_expense(&mut self, expense: Expense) -> Result<(), CoreError> {
        let mut expenses = self.get_expenses();
        expenses.push(expense);
        let raw = serde_json::to_string(&expenses)?;
        self.backend.set(EXPENSES_KEY, &raw)
    }
}

impl std::fmt::Debug for BudgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetStore")
            .field("budget", &self.get_budget())
            .field("expenses", &self.get_expenses().len())
            .finish()
    }
}
