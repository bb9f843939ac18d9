//! Error types for the pdfforms library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for inspection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while inspecting a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The path does not carry a `.pdf` extension.
    #[error("not a PDF file: {0}")]
    NotAPdf(PathBuf),

    /// The document is encrypted; decryption is out of scope.
    #[error("document is encrypted")]
    Encrypted,

    /// Any failure surfaced by the underlying PDF reader.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "document is encrypted");

        let err = Error::PdfParse("bad xref".to_string());
        assert_eq!(err.to_string(), "PDF parsing error: bad xref");

        let err = Error::NotAPdf(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "not a PDF file: notes.txt");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
