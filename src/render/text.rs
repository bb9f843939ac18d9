//! Plain text rendering of an inspection report.

use std::fmt::Write;
use std::path::Path;

use crate::model::Inspection;

/// Sentinel when the /Info dictionary exists but carries no /Title.
const TITLE_UNKNOWN: &str = "Unknown";

/// Sentinel when the document has no /Info dictionary at all.
const NO_METADATA: &str = "No metadata";

/// Render an inspection report as the tool's output block.
///
/// Deterministic: the same inspection renders byte-identical text.
pub fn to_text(inspection: &Inspection, path: &Path) -> String {
    let mut out = String::new();

    if inspection.has_fields() {
        let _ = writeln!(out, "Form fields found in {}:", path.display());
        for field in &inspection.fields {
            let _ = writeln!(
                out,
                "  - {} ({}): {}",
                field.name,
                field.field_type,
                field.value.as_deref().unwrap_or("")
            );
        }
    } else {
        let _ = writeln!(out, "No form fields found in {}", path.display());
    }

    let title = match &inspection.metadata {
        Some(meta) => meta.title.as_deref().unwrap_or(TITLE_UNKNOWN),
        None => NO_METADATA,
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "PDF Info:");
    let _ = writeln!(out, "  Pages: {}", inspection.page_count);
    let _ = writeln!(out, "  Title: {}", title);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldType, FormField, Metadata};

    fn sample_path() -> &'static Path {
        Path::new("form.pdf")
    }

    #[test]
    fn test_render_with_fields() {
        let inspection = Inspection {
            fields: vec![
                FormField::new("name", FieldType::Text, Some("John".to_string())),
                FormField::new("subscribe", FieldType::Button, Some("Yes".to_string())),
                FormField::new("notes", FieldType::Text, None),
            ],
            page_count: 2,
            metadata: Some(Metadata {
                title: Some("Signup".to_string()),
                ..Default::default()
            }),
        };

        let text = to_text(&inspection, sample_path());
        assert_eq!(
            text,
            "Form fields found in form.pdf:\n\
             \x20 - name (Text): John\n\
             \x20 - subscribe (Button): Yes\n\
             \x20 - notes (Text): \n\
             \n\
             PDF Info:\n\
             \x20 Pages: 2\n\
             \x20 Title: Signup\n"
        );
    }

    #[test]
    fn test_render_without_fields() {
        let inspection = Inspection {
            fields: Vec::new(),
            page_count: 1,
            metadata: None,
        };

        let text = to_text(&inspection, sample_path());
        assert_eq!(
            text,
            "No form fields found in form.pdf\n\
             \n\
             PDF Info:\n\
             \x20 Pages: 1\n\
             \x20 Title: No metadata\n"
        );
        assert!(!text.contains("  - "));
    }

    #[test]
    fn test_render_metadata_without_title() {
        let inspection = Inspection {
            fields: Vec::new(),
            page_count: 3,
            metadata: Some(Metadata {
                author: Some("Someone".to_string()),
                ..Default::default()
            }),
        };

        let text = to_text(&inspection, sample_path());
        assert!(text.contains("  Title: Unknown\n"));
    }

    #[test]
    fn test_render_title_verbatim() {
        let inspection = Inspection {
            fields: Vec::new(),
            page_count: 1,
            metadata: Some(Metadata {
                title: Some("Report.pdf Title".to_string()),
                ..Default::default()
            }),
        };

        let text = to_text(&inspection, sample_path());
        assert!(text.contains("  Title: Report.pdf Title\n"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let inspection = Inspection {
            fields: vec![FormField::new("a", FieldType::Choice, None)],
            page_count: 1,
            metadata: None,
        };

        let first = to_text(&inspection, sample_path());
        let second = to_text(&inspection, sample_path());
        assert_eq!(first, second);
    }
}
