//! Error types for qti-mapper
//!
//! This module defines the hard failures of the library. Recoverable fidelity
//! losses are not errors; they are collected as warnings in
//! [`Diagnostics`](crate::diagnostics::Diagnostics) and returned alongside
//! the mapped item.

use thiserror::Error;

use crate::diagnostics::MappingError;

/// Result type alias using qti-mapper Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qti-mapper operations
#[derive(Error, Debug)]
pub enum Error {
    /// The item cannot be mapped at all (CRITICAL diagnostic)
    #[error("{0}")]
    Critical(MappingError),

    /// The document is well-formed XML but not a usable QTI item
    #[error("document error: {0}")]
    Document(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Limit exceeded error
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True when the error is a CRITICAL mapping diagnostic
    pub fn is_critical(&self) -> bool {
        matches!(self, Error::Critical(_))
    }
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}
