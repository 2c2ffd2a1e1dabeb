//! Structured error types for the SeqVision toolkit.

use std::collections::BTreeSet;

use thiserror::Error;

/// Unified error type for all SeqVision operations.
#[derive(Debug, Error)]
pub enum SeqVisionError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sequence text contains characters outside the alphabet of its kind.
    #[error("invalid characters in {kind} sequence: {}", format_chars(.invalid))]
    InvalidAlphabet {
        /// Sequence kind the text was validated against (e.g. "DNA").
        kind: &'static str,
        /// Every distinct offending character, in sorted order.
        invalid: BTreeSet<char>,
    },

    /// An operation was requested on a sequence kind that cannot perform it.
    #[error("{operation} is not supported for {kind} sequences")]
    UnsupportedOperation {
        operation: &'static str,
        kind: &'static str,
    },

    /// FASTQ framing is broken; record alignment can no longer be trusted.
    #[error("malformed FASTQ record at line {line}: {msg}")]
    MalformedRecord {
        /// 1-based line number of the offending line.
        line: usize,
        msg: String,
    },

    /// Parse error reported by a format parser
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

fn format_chars(chars: &BTreeSet<char>) -> String {
    let quoted: Vec<String> = chars.iter().map(|c| format!("'{}'", c.escape_default())).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// Convenience alias used throughout the SeqVision crates.
pub type Result<T> = std::result::Result<T, SeqVisionError>;
