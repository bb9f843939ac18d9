//! Input validation helpers.
//!
//! The extension gate is a filename heuristic, not a content check: a
//! renamed non-PDF file passes it and fails later inside the reader.

use std::path::Path;

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Check whether a path's file name ends in `.pdf`, case-insensitively.
///
/// # Example
/// ```
/// use pdfforms::detect::has_pdf_extension;
///
/// assert!(has_pdf_extension("report.pdf"));
/// assert!(has_pdf_extension("REPORT.PDF"));
/// assert!(!has_pdf_extension("report.txt"));
/// ```
pub fn has_pdf_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Check whether bytes start with a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// The extension gate as a typed error, for callers that propagate
/// `Result`. Fails with [`Error::NotAPdf`] carrying the rejected path.
pub fn require_pdf_extension<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if has_pdf_extension(path) {
        Ok(())
    } else {
        Err(Error::NotAPdf(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercase() {
        assert!(has_pdf_extension("document.pdf"));
        assert!(has_pdf_extension("/some/dir/document.pdf"));
    }

    #[test]
    fn test_extension_mixed_case() {
        assert!(has_pdf_extension("document.PDF"));
        assert!(has_pdf_extension("document.Pdf"));
        assert!(has_pdf_extension("document.pDf"));
    }

    #[test]
    fn test_extension_rejected() {
        assert!(!has_pdf_extension("document.txt"));
        assert!(!has_pdf_extension("document.pdf.bak"));
        assert!(!has_pdf_extension("document"));
        assert!(!has_pdf_extension("pdf"));
    }

    #[test]
    fn test_require_pdf_extension() {
        assert!(require_pdf_extension("document.pdf").is_ok());
        assert!(require_pdf_extension("FORM.PDF").is_ok());

        let err = require_pdf_extension("notes.txt").unwrap_err();
        assert!(matches!(err, Error::NotAPdf(path) if path.ends_with("notes.txt")));
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\n"));
        assert!(is_pdf_bytes(b"%PDF-2.0\n%\xe2\xe3\xcf\xd3"));
        assert!(!is_pdf_bytes(b"Not a PDF"));
        assert!(!is_pdf_bytes(b""));
    }
}
