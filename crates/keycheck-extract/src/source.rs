//! Text sources: trait plus the PDF and plain-text implementations.

use std::path::Path;

use lopdf::Document;

use crate::error::ExtractError;

/// A collaborator that yields a single concatenated text string for a
/// document. Implementations must preserve page order and promise no
/// further structure.
pub trait TextSource {
    /// Human-readable source name (e.g. "pdf").
    fn name(&self) -> &str;

    /// Extract the document's full text.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// PDF text extraction backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfSource;

impl TextSource for PdfSource {
    fn name(&self) -> &str {
        "pdf"
    }

    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let doc = Document::load(path).map_err(|source| ExtractError::Pdf {
            path: path.to_path_buf(),
            source,
        })?;

        // get_pages() is keyed by page number, so iteration is already
        // in page order.
        let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
        let text = doc
            .extract_text(&pages)
            .map_err(|source| ExtractError::Pdf {
                path: path.to_path_buf(),
                source,
            })?;

        if text.trim().is_empty() {
            return Err(ExtractError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(text)
    }
}

/// Plain-text passthrough, used for `.txt` fixtures and anything already
/// extracted by an external tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn name(&self) -> &str {
        "text"
    }

    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Extract a document's text, picking the source from the file extension:
/// `.pdf` goes through [`PdfSource`], everything else is read as plain
/// text. Logs the extracted length, mirroring what the interactive
/// front-end shows the user.
pub fn extract_document(path: &Path) -> Result<String, ExtractError> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let (source_name, text) = if is_pdf {
        ("pdf", PdfSource.extract_text(path)?)
    } else {
        ("text", PlainTextSource.extract_text(path)?)
    };

    tracing::info!(
        source = source_name,
        path = %path.display(),
        chars = text.len(),
        "extracted document text"
    );
    Ok(text)
}
