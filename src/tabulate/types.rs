use serde::Serialize;

use crate::tabulate::error::TablifyError;

/// A flattened record - one row of the table, keyed by path string.
///
/// Values are always scalar leaves (null, boolean, number, string), never
/// arrays or objects.
pub type FlatRecord = serde_json::Map<String, serde_json::Value>;

/// Configuration for one tabulation run
#[derive(Debug, Clone)]
pub struct TabulateConfig {
    /// Maximum records retained after truncation
    pub limit: usize,
}

impl Default for TabulateConfig {
    fn default() -> Self {
        TabulateConfig { limit: 100 }
    }
}

impl TabulateConfig {
    /// Reject invalid configuration before any file is touched
    pub fn validate(&self) -> Result<(), TablifyError> {
        if self.limit == 0 {
            return Err(TablifyError::InvalidLimit(self.limit));
        }
        Ok(())
    }
}

/// Per-file terminal status handed back to the caller on success
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Records retained after truncation
    pub records: usize,

    /// Distinct columns in the CSV output
    pub columns: usize,

    /// Malformed NDJSON lines skipped by the loader
    pub skipped_lines: usize,
}
