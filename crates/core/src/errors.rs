use thiserror::Error;

/// Unified error type for the entire budget-tracker-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The single user-facing error kind: a numeric field was empty,
    /// non-numeric, non-finite, or not strictly positive.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON encode failure on the write path. Reads never raise this:
    /// unreadable stored values fall back to their defaults.
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("File I/O error: {0}")]
    FileIO(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
