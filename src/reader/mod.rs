//! PDF reader delegation layer.
//!
//! All byte-structure decoding (cross-reference tables, object parsing,
//! stream filters) is handled by `lopdf`; this module only maps lopdf's
//! object model onto the inspection types.

mod acroform;

use std::io::Read;
use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};
use crate::model::{Inspection, Metadata};

/// Wrapper around a loaded `lopdf::Document`.
///
/// Holds the parsed document for the duration of one inspection. The
/// input file handle is consumed by loading; nothing is kept open after
/// construction and nothing outlives the wrapper.
pub struct PdfInspector {
    doc: Document,
}

impl PdfInspector {
    /// Load from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("loading PDF from {}", path.as_ref().display());
        let doc = Document::load(path)?;
        Ok(Self { doc })
    }

    /// Load from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = Document::load_mem(data)?;
        Ok(Self { doc })
    }

    /// Load from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Run the inspection: form fields, page count, metadata.
    pub fn inspect(&self) -> Result<Inspection> {
        if self.doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        let fields = acroform::collect_fields(&self.doc)?;
        let page_count = self.doc.get_pages().len() as u32;
        let metadata = self.extract_metadata();

        Ok(Inspection {
            fields,
            page_count,
            metadata,
        })
    }

    /// Read the document information dictionary, if any.
    fn extract_metadata(&self) -> Option<Metadata> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let info_dict = match info {
            Object::Reference(r) => self.doc.get_dictionary(*r).ok()?,
            Object::Dictionary(dict) => dict,
            _ => return None,
        };

        Some(Metadata {
            title: get_string_from_dict(info_dict, b"Title"),
            author: get_string_from_dict(info_dict, b"Author"),
            subject: get_string_from_dict(info_dict, b"Subject"),
            creator: get_string_from_dict(info_dict, b"Creator"),
            producer: get_string_from_dict(info_dict, b"Producer"),
        })
    }
}

/// Extract a text string value from a dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    })
}

/// Decode a PDF text string.
///
/// UTF-16BE when the BOM marker is present, otherwise UTF-8 with a
/// Latin-1 fallback.
pub(crate) fn decode_text_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    String::from_utf8(bytes.to_vec())
        .unwrap_or_else(|_| bytes.iter().map(|&b| b as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_string_utf8() {
        assert_eq!(decode_text_string(b"Hello"), "Hello");
    }

    #[test]
    fn test_decode_text_string_utf16be() {
        // UTF-16BE BOM + "Hi"
        let bytes = vec![0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_text_string(&bytes), "Hi");
    }

    #[test]
    fn test_decode_text_string_latin1() {
        // 0xE9 = 'é' in Latin-1
        let bytes = vec![0x48, 0x65, 0x6C, 0x6C, 0xE9];
        assert_eq!(decode_text_string(&bytes), "Hellé");
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(PdfInspector::from_bytes(b"not a pdf").is_err());
        assert!(PdfInspector::from_bytes(b"").is_err());
    }
}
