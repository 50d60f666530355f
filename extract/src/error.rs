//! Error types for report extraction.
//!
//! Only two things are fatal here: the document cannot be read (or the
//! output cannot be written), and the report-generating command fails.
//! Missing fields and malformed numbers inside an otherwise readable
//! document are soft misses that resolve to absent values, never errors.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while generating, reading, or emitting a report.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File I/O failure (unreadable report, unwritable output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report-generating command exited non-zero.
    #[error("powercfg exited with {status}")]
    ReportCommand { status: ExitStatus },

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
