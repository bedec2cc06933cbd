//! Extraction error types.
//!
//! Defined as a dedicated enum so callers can surface extraction failure
//! as a single opaque boundary error without string matching; the
//! pipeline itself never produces one of these.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a source document into text.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a well-formed PDF, or its text could not be
    /// decoded.
    #[error("failed to extract PDF text from {path}: {source}")]
    Pdf {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// The document contained no extractable text at all.
    #[error("no text extracted from {path}")]
    Empty { path: PathBuf },
}
