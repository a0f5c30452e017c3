//! PDF metadata carry-over.
//!
//! When pages are selected into a new document the Info dictionary
//! (Title, Author, Subject, Keywords, Creator, Producer) is carried over
//! from the source. The copy is best-effort: a field that cannot be read
//! as text produces a [`MetadataWarning`] for the caller instead of
//! failing the operation, and the operation's success never depends on
//! metadata fidelity.

use lopdf::{Dictionary, Document, Object};
use thiserror::Error;

use crate::config::Metadata;

/// Info dictionary fields that are carried over to the output.
const COPIED_FIELDS: [&str; 6] = [
    "Title", "Author", "Subject", "Keywords", "Creator", "Producer",
];

/// A non-fatal problem encountered while carrying metadata over.
///
/// Warnings are collected and handed back to the caller; they are never
/// escalated into operation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataWarning {
    /// The field exists but is not a PDF string object.
    #[error("metadata field {field} is not a text string; dropped")]
    NotText {
        /// Name of the Info dictionary field.
        field: &'static str,
    },

    /// The field is a string but not valid UTF-8.
    #[error("metadata field {field} is not valid UTF-8; dropped")]
    BadEncoding {
        /// Name of the Info dictionary field.
        field: &'static str,
    },

    /// The source trailer references an Info object that is unusable.
    #[error("source Info dictionary is unreadable; metadata not copied")]
    SourceInfoUnreadable,

    /// The output document's Info dictionary could not be prepared.
    #[error("could not prepare Info dictionary on output: {reason}")]
    TargetInfoFailed {
        /// What went wrong.
        reason: String,
    },
}

/// Copies document metadata between PDFs.
pub struct MetadataCopier;

impl MetadataCopier {
    /// Create a new metadata copier.
    pub fn new() -> Self {
        Self
    }

    /// Carry the known Info fields from `source` to `target`.
    ///
    /// The target's existing Info dictionary is cleared first, so the
    /// output carries exactly the readable fields of the source (plus any
    /// overrides applied afterwards). Returns the warnings collected for
    /// fields that could not be read; an absent Info dictionary is not a
    /// warning, there is simply nothing to copy.
    pub fn copy_from(&self, source: &Document, target: &mut Document) -> Vec<MetadataWarning> {
        let mut warnings = Vec::new();

        self.clear(target);

        let Some(info) = source_info_dict(source) else {
            if source.trailer.has(b"Info") {
                warnings.push(MetadataWarning::SourceInfoUnreadable);
            }
            return warnings;
        };

        let mut fields = Vec::new();
        for field in COPIED_FIELDS {
            match read_text_field(info, field) {
                Ok(Some(value)) => fields.push((field, value)),
                Ok(None) => {}
                Err(warning) => warnings.push(warning),
            }
        }

        if fields.is_empty() {
            return warnings;
        }

        match info_dict_mut(target) {
            Ok(dict) => {
                for (field, value) in fields {
                    dict.set(
                        field,
                        Object::String(value.into_bytes(), lopdf::StringFormat::Literal),
                    );
                }
            }
            Err(warning) => warnings.push(warning),
        }

        warnings
    }

    /// Apply user-supplied metadata overrides to a document.
    ///
    /// Only fields present in `metadata` are written; everything else is
    /// left as carried over.
    pub fn apply_overrides(
        &self,
        doc: &mut Document,
        metadata: &Metadata,
    ) -> Vec<MetadataWarning> {
        if metadata.is_empty() {
            return Vec::new();
        }

        let overrides = [
            ("Title", metadata.title.as_ref()),
            ("Author", metadata.author.as_ref()),
            ("Subject", metadata.subject.as_ref()),
            ("Keywords", metadata.keywords.as_ref()),
        ];

        match info_dict_mut(doc) {
            Ok(dict) => {
                for (field, value) in overrides {
                    if let Some(value) = value {
                        dict.set(
                            field,
                            Object::String(
                                value.as_bytes().to_vec(),
                                lopdf::StringFormat::Literal,
                            ),
                        );
                    }
                }
                Vec::new()
            }
            Err(warning) => vec![warning],
        }
    }

    /// Read one Info field from a document, if it is readable text.
    pub fn read_field(doc: &Document, field: &str) -> Option<String> {
        let info = source_info_dict(doc)?;
        match info.get(field.as_bytes()) {
            Ok(Object::String(bytes, _)) => String::from_utf8(bytes.clone()).ok(),
            _ => None,
        }
    }

    /// Remove the Info dictionary from a document.
    pub fn clear(&self, doc: &mut Document) {
        if let Ok(info_ref) = doc.trailer.get(b"Info").and_then(|i| i.as_reference()) {
            doc.objects.remove(&info_ref);
        }
        doc.trailer.remove(b"Info");
    }

    /// Check if a document has an Info dictionary.
    pub fn has_metadata(&self, doc: &Document) -> bool {
        doc.trailer.has(b"Info")
    }
}

impl Default for MetadataCopier {
    fn default() -> Self {
        Self::new()
    }
}

/// The source document's Info dictionary, if present and well-formed.
fn source_info_dict(doc: &Document) -> Option<&Dictionary> {
    let info_ref = doc.trailer.get(b"Info").and_then(|i| i.as_reference()).ok()?;
    match doc.get_object(info_ref) {
        Ok(Object::Dictionary(dict)) => Some(dict),
        _ => None,
    }
}

/// Read one field as text, distinguishing absent from unreadable.
fn read_text_field(
    dict: &Dictionary,
    field: &'static str,
) -> Result<Option<String>, MetadataWarning> {
    match dict.get(field.as_bytes()) {
        Err(_) => Ok(None), // absent
        Ok(Object::String(bytes, _)) => String::from_utf8(bytes.clone())
            .map(Some)
            .map_err(|_| MetadataWarning::BadEncoding { field }),
        Ok(_) => Err(MetadataWarning::NotText { field }),
    }
}

/// Get or create a document's Info dictionary.
fn info_dict_mut(doc: &mut Document) -> Result<&mut Dictionary, MetadataWarning> {
    let info_id = if let Ok(info_ref) = doc.trailer.get(b"Info").and_then(|i| i.as_reference()) {
        info_ref
    } else {
        let new_info_id = doc.new_object_id();
        doc.trailer.set("Info", Object::Reference(new_info_id));
        doc.objects.insert(new_info_id, Object::Dictionary(Dictionary::new()));
        new_info_id
    };

    // The reference may point at a non-dictionary object in damaged files;
    // replace it rather than write into garbage.
    if !matches!(doc.get_object(info_id), Ok(Object::Dictionary(_))) {
        doc.objects
            .insert(info_id, Object::Dictionary(Dictionary::new()));
    }

    match doc.get_object_mut(info_id) {
        Ok(Object::Dictionary(dict)) => Ok(dict),
        _ => Err(MetadataWarning::TargetInfoFailed {
            reason: "Info reference does not resolve to a dictionary".to_string(),
        }),
    }
}
