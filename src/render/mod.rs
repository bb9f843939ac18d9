//! Rendering of inspection reports.

mod text;

pub use text::to_text;
