//! Form field types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Form field type from the /FT key of a field dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Text field (/Tx): single or multi-line text
    Text,
    /// Button field (/Btn): push button, checkbox, or radio group
    Button,
    /// Choice field (/Ch): list box or combo box
    Choice,
    /// Signature field (/Sig)
    Signature,
    /// Field type absent or unrecognized
    Unknown,
}

impl FieldType {
    /// Parse from a /FT name tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Tx" => FieldType::Text,
            "Btn" => FieldType::Button,
            "Ch" => FieldType::Choice,
            "Sig" => FieldType::Signature,
            _ => FieldType::Unknown,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            FieldType::Text => "Text",
            FieldType::Button => "Button",
            FieldType::Choice => "Choice",
            FieldType::Signature => "Signature",
            FieldType::Unknown => "Unknown",
        };
        f.write_str(tag)
    }
}

/// A single interactive form field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    /// Fully qualified field name (dotted for hierarchical fields)
    pub name: String,

    /// Field type
    pub field_type: FieldType,

    /// Current value; `None` renders as the empty string
    pub value: Option<String>,
}

impl FormField {
    /// Create a new form field.
    pub fn new(name: impl Into<String>, field_type: FieldType, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            value,
        }
    }
}
