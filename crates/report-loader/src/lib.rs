//! Report document loading
//!
//! Turns an uploaded credit report file into a [`ReportDocument`]:
//! plain-text files are decoded directly, PDF files go through the
//! `pdf-extract` text layer. Dispatch is by file extension only; no
//! content sniffing is performed.
//!
//! A failed PDF decode is terminal for the run. The loader never
//! returns partial text: either every page decodes or the whole load
//! fails with a single error.

use report_types::ReportDocument;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a report document
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Unsupported file type: {0}. Upload a .txt or .pdf credit report")]
    UnsupportedExtension(String),

    #[error("The report contains no readable text")]
    EmptyDocument,

    #[error("The text file is not valid UTF-8")]
    InvalidUtf8,

    #[error("Could not decode the PDF ({0}). Try exporting the report as a .txt file instead")]
    PdfDecode(String),

    #[error("The PDF is password-protected. Remove the password or export the report as a .txt file")]
    PasswordProtected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main report loading interface
pub struct ReportLoader;

impl ReportLoader {
    /// Load a report from a file on disk
    ///
    /// `.txt` files are read as UTF-8; `.pdf` files are decoded via
    /// the PDF text layer. Any other extension is rejected.
    pub fn load_path(path: &Path) -> Result<ReportDocument, LoadError> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        match extension_of(&filename).as_deref() {
            Some("txt") => {
                let text = std::fs::read_to_string(path)?;
                Ok(Self::from_text(filename, text))
            }
            Some("pdf") => {
                let bytes = std::fs::read(path)?;
                Self::from_pdf_bytes(filename, &bytes)
            }
            other => Err(LoadError::UnsupportedExtension(
                other.unwrap_or("(none)").to_string(),
            )),
        }
    }

    /// Load a report from in-memory bytes, dispatching on the
    /// extension of `filename`
    pub fn load_bytes(filename: &str, bytes: &[u8]) -> Result<ReportDocument, LoadError> {
        match extension_of(filename).as_deref() {
            Some("txt") => {
                let text =
                    String::from_utf8(bytes.to_vec()).map_err(|_| LoadError::InvalidUtf8)?;
                Ok(Self::from_text(filename.to_string(), text))
            }
            Some("pdf") => Self::from_pdf_bytes(filename.to_string(), bytes),
            other => Err(LoadError::UnsupportedExtension(
                other.unwrap_or("(none)").to_string(),
            )),
        }
    }

    /// Wrap plain text as a single-page document
    ///
    /// Text files are passed through as-is, including empty ones: the
    /// analyzer flags below-threshold content as unreadable, which is
    /// more useful than a load error here. `EmptyDocument` is reserved
    /// for the PDF path, where an empty text layer means a scanned
    /// image.
    fn from_text(filename: String, text: String) -> ReportDocument {
        debug!(file = %filename, chars = text.len(), "loaded text report");
        ReportDocument {
            filename,
            page_count: 1,
            text,
        }
    }

    fn from_pdf_bytes(filename: String, bytes: &[u8]) -> Result<ReportDocument, LoadError> {
        let pages = Self::decode_pdf(bytes)?;
        let page_count = pages.len();
        let text = pages.join("\n");
        debug!(file = %filename, pages = page_count, chars = text.len(), "decoded PDF report");
        Ok(ReportDocument {
            filename,
            page_count,
            text,
        })
    }

    /// Decode PDF bytes into per-page text, page order preserved
    ///
    /// Error messages from the PDF library are classified into
    /// password-protection vs. generic decode failures so the caller
    /// can surface a single actionable message.
    fn decode_pdf(bytes: &[u8]) -> Result<Vec<String>, LoadError> {
        let raw_text = match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => text,
            Err(e) => {
                let msg = e.to_string().to_lowercase();
                if msg.contains("encrypted") || msg.contains("password") {
                    return Err(LoadError::PasswordProtected);
                }
                return Err(LoadError::PdfDecode(e.to_string()));
            }
        };

        if raw_text.trim().is_empty() {
            return Err(LoadError::EmptyDocument);
        }

        // Form feed is the page separator in extracted text
        let pages: Vec<String> = raw_text
            .split('\x0C')
            .filter(|p| !p.trim().is_empty())
            .map(str::to_string)
            .collect();

        if pages.is_empty() {
            return Err(LoadError::EmptyDocument);
        }

        Ok(pages)
    }
}

/// Lowercased extension of a filename, if any
fn extension_of(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
