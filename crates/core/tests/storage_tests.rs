// ═══════════════════════════════════════════════════════════════════
// Storage Tests — MemoryStore, FileStore, BudgetStore slot contract
// ═══════════════════════════════════════════════════════════════════

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::NaiveDate;

use budget_tracker_core::errors::CoreError;
use budget_tracker_core::models::expense::Expense;
use budget_tracker_core::storage::file::FileStore;
use budget_tracker_core::storage::memory::MemoryStore;
use budget_tracker_core::storage::store::{BudgetStore, KeyValueStore, BUDGET_KEY, EXPENSES_KEY};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Shared backend — a backend the test can still inspect after handing
// it to a BudgetStore
// ═══════════════════════════════════════════════════════════════════

type Slots = Rc<RefCell<HashMap<String, String>>>;

struct SharedStore(Slots);

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn shared_budget_store() -> (BudgetStore, Slots) {
    let slots: Slots = Rc::new(RefCell::new(HashMap::new()));
    let store = BudgetStore::new(Box::new(SharedStore(Rc::clone(&slots))));
    (store, slots)
}

// ── MemoryStore ─────────────────────────────────────────────────────

mod memory_store {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn set_then_get() {
        let mut store = MemoryStore::new();
        store.set("slot", "value").unwrap();
        assert_eq!(store.get("slot"), Some("value".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_overwrites() {
        let mut store = MemoryStore::new();
        store.set("slot", "old").unwrap();
        store.set("slot", "new").unwrap();
        assert_eq!(store.get("slot"), Some("new".to_string()));
        assert_eq!(store.len(), 1);
    }
}

// ── FileStore ───────────────────────────────────────────────────────

mod file_store {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("store.json")).unwrap();
        assert_eq!(store.get("budget"), None);
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("budget", "125.5").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("budget"), Some("125.5".to_string()));
    }

    #[test]
    fn every_set_rewrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("a"), Some("1".to_string()));
        assert_eq!(reopened.get("b"), Some("2".to_string()));
    }

    #[test]
    fn unparsable_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("budget"), None);
    }

    #[test]
    fn path_accessor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
    }
}

// ── BudgetStore: budget slot ────────────────────────────────────────

mod budget_slot {
    use super::*;

    #[test]
    fn defaults_to_zero_when_absent() {
        let (store, _) = shared_budget_store();
        assert_eq!(store.get_budget(), 0.0);
    }

    #[test]
    fn defaults_to_zero_when_unparsable() {
        let (store, slots) = shared_budget_store();
        slots
            .borrow_mut()
            .insert(BUDGET_KEY.to_string(), "garbage".to_string());
        assert_eq!(store.get_budget(), 0.0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let (mut store, _) = shared_budget_store();
        store.set_budget(125.5).unwrap();
        assert_eq!(store.get_budget(), 125.5);
    }

    #[test]
    fn persisted_as_bare_json_number() {
        let (mut store, slots) = shared_budget_store();
        store.set_budget(125.5).unwrap();
        assert_eq!(slots.borrow().get(BUDGET_KEY), Some(&"125.5".to_string()));
    }

    #[test]
    fn set_overwrites_not_accumulates() {
        let (mut store, _) = shared_budget_store();
        store.set_budget(100.0).unwrap();
        store.set_budget(50.0).unwrap();
        assert_eq!(store.get_budget(), 50.0);
    }
}

// ── BudgetStore: expenses slot ──────────────────────────────────────

mod expenses_slot {
    use super::*;

    #[test]
    fn defaults_to_empty_when_absent() {
        let (store, _) = shared_budget_store();
        assert!(store.get_expenses().is_empty());
    }

    #[test]
    fn defaults_to_empty_when_unparsable() {
        let (store, slots) = shared_budget_store();
        slots
            .borrow_mut()
            .insert(EXPENSES_KEY.to_string(), "{broken".to_string());
        assert!(store.get_expenses().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let (mut store, _) = shared_budget_store();
        store.append_expense(Expense::on(date("2024-03-01"), 12.5)).unwrap();
        store.append_expense(Expense::on(date("2024-03-02"), 3.0)).unwrap();

        let log = store.get_expenses();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].amount, 12.5);
        assert_eq!(log[1].amount, 3.0);
    }

    #[test]
    fn append_rewrites_the_whole_log() {
        let (mut store, slots) = shared_budget_store();
        store.append_expense(Expense::on(date("2024-03-01"), 12.5)).unwrap();
        store.append_expense(Expense::on(date("2024-03-01"), 3.0)).unwrap();

        // The slot holds the complete serialized sequence after every append.
        let raw = slots.borrow().get(EXPENSES_KEY).cloned().unwrap();
        assert_eq!(
            raw,
            r#"[{"date":"2024-03-01","expense":12.5},{"date":"2024-03-01","expense":3.0}]"#
        );
    }

    #[test]
    fn reads_the_documented_wire_example() {
        let (store, slots) = shared_budget_store();
        slots.borrow_mut().insert(
            EXPENSES_KEY.to_string(),
            r#"[{"date":"2024-03-01","expense":12.5}]"#.to_string(),
        );

        let log = store.get_expenses();
        assert_eq!(log, vec![Expense::on(date("2024-03-01"), 12.5)]);
    }
}

// ── BudgetStore over FileStore ──────────────────────────────────────

mod budget_store_on_disk {
    use super::*;

    #[test]
    fn state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let backend = FileStore::open(&path).unwrap();
        let mut store = BudgetStore::new(Box::new(backend));
        store.set_budget(200.0).unwrap();
        store.append_expense(Expense::on(date("2024-03-01"), 75.0)).unwrap();
        drop(store);

        let reopened = BudgetStore::new(Box::new(FileStore::open(&path).unwrap()));
        assert_eq!(reopened.get_budget(), 200.0);
        assert_eq!(reopened.get_expenses().len(), 1);
        assert_eq!(reopened.get_expenses()[0].amount, 75.0);
    }
}
