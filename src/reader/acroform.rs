//! AcroForm field extraction.
//!
//! Walks the catalog /AcroForm /Fields array in array order, recursing
//! through /Kids with dotted qualified names. Each named field is
//! reported exactly once: widget-only kids (no /T) stay merged into the
//! field above them, named kids supersede their parent, and /FT is
//! inherited from the nearest ancestor when a leaf omits it.

use lopdf::{Document, Object, ObjectId};

use super::decode_text_string;
use crate::error::Result;
use crate::model::{FieldType, FormField};

/// Collect all form fields from the document catalog.
///
/// Returns an empty list when the document has no /AcroForm dictionary
/// or the form carries no /Fields array.
pub fn collect_fields(doc: &Document) -> Result<Vec<FormField>> {
    let catalog = doc.catalog()?;

    let acroform = match catalog.get(b"AcroForm") {
        Ok(obj) => obj,
        Err(_) => return Ok(Vec::new()),
    };

    let acroform_dict = match resolve(doc, acroform).and_then(|o| o.as_dict().ok()) {
        Some(dict) => dict,
        None => return Ok(Vec::new()),
    };

    let fields_array = match acroform_dict
        .get(b"Fields")
        .ok()
        .and_then(|o| resolve(doc, o))
        .and_then(|o| o.as_array().ok())
    {
        Some(array) => array,
        None => return Ok(Vec::new()),
    };

    let mut fields = Vec::new();
    let mut visited = Vec::new();
    for entry in fields_array {
        walk_field(doc, entry, "", None, 0, &mut visited, &mut fields);
    }
    Ok(fields)
}

/// Follow a single level of indirection.
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(r) => doc.get_object(*r).ok(),
        _ => Some(obj),
    }
}

/// /Kids nesting deeper than this is treated as a malformed document.
const MAX_FIELD_DEPTH: usize = 32;

/// Walk one entry of a /Fields or /Kids array.
fn walk_field(
    doc: &Document,
    entry: &Object,
    parent: &str,
    inherited: Option<FieldType>,
    depth: usize,
    visited: &mut Vec<ObjectId>,
    out: &mut Vec<FormField>,
) {
    if depth > MAX_FIELD_DEPTH {
        log::warn!(
            "form field tree deeper than {} levels; stopping descent",
            MAX_FIELD_DEPTH
        );
        return;
    }
    if let Object::Reference(id) = entry {
        if visited.contains(id) {
            log::warn!("cyclic /Kids reference in form field tree");
            return;
        }
        visited.push(*id);
    }

    let dict = match resolve(doc, entry).and_then(|o| o.as_dict().ok()) {
        Some(dict) => dict,
        None => {
            log::warn!("skipping form field entry that is not a dictionary");
            return;
        }
    };

    let partial = dict
        .get(b"T")
        .ok()
        .and_then(|o| resolve(doc, o))
        .and_then(|o| match o {
            Object::String(bytes, _) => Some(decode_text_string(bytes)),
            _ => None,
        })
        .unwrap_or_default();

    // A /Kids entry without its own /T is a widget annotation of the
    // field above it, not a separate field.
    if partial.is_empty() && !parent.is_empty() {
        return;
    }

    let name = if parent.is_empty() {
        partial
    } else {
        format!("{}.{}", parent, partial)
    };

    // /FT is inheritable; a field without its own tag falls back to
    // the nearest ancestor's.
    let field_type = dict
        .get(b"FT")
        .ok()
        .and_then(|o| resolve(doc, o))
        .and_then(|o| o.as_name().ok())
        .map(|tag| FieldType::from_tag(&String::from_utf8_lossy(tag)))
        .or(inherited);

    if let Some(kids) = dict
        .get(b"Kids")
        .ok()
        .and_then(|o| resolve(doc, o))
        .and_then(|o| o.as_array().ok())
    {
        let before = out.len();
        for kid in kids {
            walk_field(doc, kid, &name, field_type, depth + 1, visited, out);
        }
        // Named kids supersede this node; widget-only kids leave it
        // terminal.
        if out.len() > before {
            return;
        }
    }

    let field_type = match field_type {
        Some(field_type) => field_type,
        None if name.is_empty() => return,
        None => FieldType::Unknown,
    };

    let value = dict
        .get(b"V")
        .ok()
        .and_then(|o| resolve(doc, o))
        .and_then(field_value);

    out.push(FormField::new(name, field_type, value));
}

/// Render a /V object as display text.
fn field_value(obj: &Object) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).to_string()),
        Object::Integer(i) => Some(i.to_string()),
        Object::Real(r) => Some(r.to_string()),
        Object::Boolean(b) => Some(b.to_string()),
        Object::Array(items) => {
            // Multi-select list boxes store one entry per selection.
            let values: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Object::String(bytes, _) => Some(decode_text_string(bytes)),
                    Object::Name(name) => Some(String::from_utf8_lossy(name).to_string()),
                    _ => None,
                })
                .collect();
            Some(values.join(", "))
        }
        _ => None,
    }
}
