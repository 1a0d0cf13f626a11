//! QTI identifier validation
//!
//! QTI identifiers follow the XML NCName production. They end up in question
//! references and CSS class names on the target side, so they are checked
//! when the document is loaded.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

// Simplified NCName: letters, digits, underscore, hyphen and period, no colon
static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}][A-Z_a-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{2FF}\-\.0-9\u{B7}]*$")
        .unwrap()
});

/// Check if a string is a valid QTI identifier
pub fn is_valid_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// Validate a QTI identifier and return an error if invalid
pub fn validate_identifier(name: &str, attribute: &str, element: &str) -> Result<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(Error::Document(format!(
            "Invalid identifier '{}' in '{}' on <{}>",
            name, attribute, element
        )))
    }
}
