//! Typed failures raised while decoding a single results log.

use thiserror::Error;

/// Everything that can go wrong while summarizing one run.
///
/// All variants are unrecoverable for the run being processed: single-file
/// mode aborts the process, batch mode aborts the whole batch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    /// A filename field, the in-body configuration line, or an announcement
    /// payload could not be decoded.
    #[error("malformed {context}: {detail}")]
    ConfigFormat {
        context: &'static str,
        detail: String,
    },

    /// A filename-derived configuration field disagrees with its in-body
    /// counterpart.
    #[error("config mismatch on {field}: filename has {filename}, log body has {body}")]
    ConfigMismatch {
        field: &'static str,
        filename: String,
        body: String,
    },

    /// Announcement counts disagree with the step count from the filename.
    #[error("expected {expected} {kind} announcements, found {actual}")]
    StepCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}
