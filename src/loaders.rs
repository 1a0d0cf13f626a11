//! Document loading
//!
//! Reads QTI documents from disk, refusing files over the size limit before
//! their content is read.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::limits::Limits;

/// Loader for QTI documents stored as files
#[derive(Debug, Clone, Default)]
pub struct Loader {
    /// Resource limits
    limits: Limits,
}

impl Loader {
    /// Create a new loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Load a document as a string
    pub fn load(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let size = fs::metadata(path)?.len();
        self.limits
            .check_xml_size(usize::try_from(size).unwrap_or(usize::MAX))?;

        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded document");
        Ok(content)
    }
}
