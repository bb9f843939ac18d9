//! Data model for PDF form inspection.
//!
//! These types are read-only snapshots built once per inspection; nothing
//! here outlives a single invocation or is shared across runs.

mod document;
mod field;

pub use document::{Inspection, Metadata};
pub use field::{FieldType, FormField};
