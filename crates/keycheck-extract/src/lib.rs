//! keycheck-extract — Document-to-text extraction collaborators.
//!
//! The scoring pipeline in `keycheck-core` only ever sees strings; this
//! crate owns the boundary that turns a source document into one
//! concatenated text string, page order preserved. Extraction is the one
//! place in the system where failure is a hard error rather than a
//! degraded verdict.

pub mod error;
pub mod source;

pub use error::ExtractError;
pub use source::{extract_document, PdfSource, PlainTextSource, TextSource};
