//! Document-level inspection types.

use super::FormField;
use serde::{Deserialize, Serialize};

/// Result of inspecting a single PDF document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inspection {
    /// Form fields in document (/Fields array) order
    pub fields: Vec<FormField>,

    /// Total number of pages
    pub page_count: u32,

    /// Document information dictionary, if present.
    ///
    /// `None` means the document carries no /Info dictionary at all,
    /// which renders differently from an /Info dictionary without a
    /// /Title entry.
    pub metadata: Option<Metadata>,
}

impl Inspection {
    /// Check whether any form fields were found.
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Get a field by its fully qualified name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Document metadata from the /Info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Creator application
    pub creator: Option<String>,

    /// PDF producer
    pub producer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldType;

    #[test]
    fn test_field_lookup() {
        let inspection = Inspection {
            fields: vec![
                FormField::new("name", FieldType::Text, Some("John".to_string())),
                FormField::new("subscribe", FieldType::Button, None),
            ],
            page_count: 1,
            metadata: None,
        };

        assert!(inspection.has_fields());
        assert_eq!(
            inspection.field("name").unwrap().value.as_deref(),
            Some("John")
        );
        assert!(inspection.field("missing").is_none());
    }

    #[test]
    fn test_empty_inspection() {
        let inspection = Inspection::default();
        assert!(!inspection.has_fields());
        assert_eq!(inspection.page_count, 0);
        assert!(inspection.metadata.is_none());
    }
}
