//! # pdfforms
//!
//! PDF form field inspection for Rust.
//!
//! Opens a PDF document, reads its interactive form fields (AcroForm)
//! through the `lopdf` reader, and reports field names, types, and
//! values along with basic document metadata (page count, title).
//!
//! All PDF byte-structure decoding is delegated to `lopdf`; this crate
//! performs no cross-reference parsing, no stream decoding, and no
//! decryption.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfforms::inspect_file;
//!
//! fn main() -> pdfforms::Result<()> {
//!     let inspection = inspect_file("form.pdf")?;
//!
//!     for field in &inspection.fields {
//!         println!("{} ({}): {:?}", field.name, field.field_type, field.value);
//!     }
//!     println!("{} pages", inspection.page_count);
//!
//!     Ok(())
//! }
//! ```

pub mod detect;
pub mod error;
pub mod model;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use detect::{has_pdf_extension, is_pdf_bytes, require_pdf_extension};
pub use error::{Error, Result};
pub use model::{FieldType, FormField, Inspection, Metadata};
pub use reader::PdfInspector;

use std::io::Read;
use std::path::Path;

/// Inspect a PDF file on disk.
///
/// # Example
///
/// ```no_run
/// use pdfforms::inspect_file;
///
/// let inspection = inspect_file("form.pdf").unwrap();
/// println!("Fields: {}", inspection.fields.len());
/// ```
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<Inspection> {
    PdfInspector::open(path)?.inspect()
}

/// Inspect a PDF held in memory.
pub fn inspect_bytes(data: &[u8]) -> Result<Inspection> {
    PdfInspector::from_bytes(data)?.inspect()
}

/// Inspect a PDF from any reader.
///
/// # Example
///
/// ```no_run
/// use pdfforms::inspect_reader;
/// use std::fs::File;
///
/// let file = File::open("form.pdf").unwrap();
/// let inspection = inspect_reader(file).unwrap();
/// ```
pub fn inspect_reader<R: Read>(reader: R) -> Result<Inspection> {
    PdfInspector::from_reader(reader)?.inspect()
}
