use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::CoreError;

use super::store::KeyValueStore;

/// File-backed key-value backend: one JSON object file mapping slot names
/// to stored strings.
///
/// The durable equivalent of browser localStorage for a native host. The
/// file is read once on open; every `set` rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading any existing contents.
    ///
    /// A missing file starts an empty store. An unreadable or unparsable
    /// file also starts empty: stored state that cannot be read is treated
    /// as absent, not surfaced as an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref().to_path_buf();

        let slots = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|_| {
                warn!(path = %path.display(), "store file unparsable, starting empty");
                HashMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), slots = slots.len(), "opened file store");
        Ok(Self { path, slots })
    }

    /// Where this store persists its slots.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), CoreError> {
        let contents = serde_json::to_string(&self.slots)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        self.persist()
    }
}
