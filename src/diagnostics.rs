//! Mapping diagnostics
//!
//! Every fidelity loss found while mapping an item is recorded as a
//! [`MappingError`] tagged with a [`Severity`]. WARNING entries are collected
//! in detection order and handed back with the result; a CRITICAL entry is
//! turned into [`Error::Critical`] and aborts the current parse.

use std::fmt;

use crate::error::Error;

/// Severity of a mapping diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// The document cannot be mapped at all
    Critical,
    /// Something was dropped or defaulted, the mapping continues
    #[default]
    Warning,
}

impl Severity {
    /// Get as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single mapping diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingError {
    /// Human readable message, surfaced to content authors as-is
    message: String,
    /// Severity of the issue
    severity: Severity,
    /// The QTI component the issue relates to, e.g. `responseProcessing`
    pub component: Option<String>,
}

impl MappingError {
    /// Create a new WARNING diagnostic
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
            component: None,
        }
    }

    /// Create a new CRITICAL diagnostic
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            ..Self::new(message)
        }
    }

    /// Set the related component
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Check if this diagnostic aborts the mapping
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MappingError {}

impl From<MappingError> for Error {
    fn from(err: MappingError) -> Self {
        Error::Critical(err)
    }
}

/// Append-only collector of WARNING diagnostics for one mapping run
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<MappingError>,
}

impl Diagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn push(&mut self, error: MappingError) {
        tracing::debug!(
            severity = %error.severity(),
            component = error.component.as_deref().unwrap_or(""),
            "{}",
            error.message()
        );
        self.entries.push(error);
    }

    /// Record a WARNING with the given message
    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(MappingError::new(message));
    }

    /// Record a WARNING about a specific component
    pub fn warn_on(&mut self, component: &str, message: impl Into<String>) {
        self.push(MappingError::new(message).with_component(component));
    }

    /// Append all diagnostics of another collector, keeping their order
    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    /// Number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the recorded diagnostics
    pub fn iter(&self) -> impl Iterator<Item = &MappingError> {
        self.entries.iter()
    }

    /// The recorded messages in detection order
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.message().to_string()).collect()
    }

    /// Consume the collector
    pub fn into_vec(self) -> Vec<MappingError> {
        self.entries
    }
}
