use serde::{Deserialize, Serialize};

use crate::types::errors::OpError;

/// Byte counts reported by a compress run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub original_size: u64,
    pub compressed_size: u64,
}

impl CompressionResult {
    /// Size reduction as a percentage, `None` for a zero-byte source
    /// (the ratio is undefined and must not be computed).
    pub fn ratio(&self) -> Option<f64> {
        if self.original_size == 0 {
            return None;
        }
        Some(100.0 * (1.0 - self.compressed_size as f64 / self.original_size as f64))
    }
}

/// What happened to a single file of an ingest batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IngestStatus {
    /// A demo was copied into the folder (replacing any same-named file).
    Copied,
    /// An archive was opened and its demo entries extracted.
    Extracted { demos: usize },
    /// The file was rejected or the operation on it failed.
    Failed(OpError),
}

/// Per-file report entry; the batch report preserves input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestOutcome {
    pub source: String,
    pub status: IngestStatus,
}

#[cfg(test)]
#[path = "tests/results_tests.rs"]
mod tests;
