use std::collections::HashMap;

use crate::errors::CoreError;

use super::store::KeyValueStore;

/// In-memory key-value backend. Nothing persists beyond the process.
///
/// The swap-in fake for tests, and a usable backend for throwaway
/// sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
