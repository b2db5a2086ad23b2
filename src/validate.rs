//! Document validation.
//!
//! Parsing is deliberately permissive: any input yields a document. This
//! module is the separate judgment of whether that document is usable,
//! reported as human-readable diagnostics the caller chooses how to
//! present.

use crate::model::Document;
use crate::parser::CvParser;

/// Outcome of validating a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the document passed all checks
    pub is_valid: bool,

    /// Ordered human-readable diagnostics; empty when valid
    pub diagnostics: Vec<String>,
}

/// Validate a parsed document.
///
/// Checks, in order: the contact name is non-empty, and at least one
/// section exists. Pure function of the document; nothing is re-parsed or
/// mutated. Consumers may layer further structural checks of their own on
/// top without affecting this contract.
pub fn validate(doc: &Document) -> Validation {
    let mut diagnostics = Vec::new();
    if !doc.contact.has_name() {
        diagnostics.push("missing name heading".to_string());
    }
    if doc.sections.is_empty() {
        diagnostics.push("at least one section required".to_string());
    }
    Validation {
        is_valid: diagnostics.is_empty(),
        diagnostics,
    }
}

/// Parse text with default options and validate the result.
pub fn validate_str(text: &str) -> Validation {
    validate(&CvParser::new().parse(text))
}
