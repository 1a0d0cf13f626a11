//! Limits for QTI document processing
//!
//! Items are authored by third parties and arrive in bulk exports, so loading
//! is bounded in size, nesting depth and number of interactions.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Resource limits applied while loading and mapping a document
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum XML document size in bytes
    pub max_xml_size: usize,

    /// Maximum element nesting depth
    pub max_xml_depth: usize,

    /// Maximum number of interactions in one item
    pub max_interactions: usize,

    /// Maximum number of accepted responses expanded from one set of
    /// correct values
    pub max_combinations: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_xml_size: 16 * 1024 * 1024, // 16 MB
            max_xml_depth: 256,
            max_interactions: 500,
            max_combinations: 1024,
        }
    }
}

impl Limits {
    /// Create a new Limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict limits (more restrictive)
    pub fn strict() -> Self {
        Self {
            max_xml_size: 1024 * 1024, // 1 MB
            max_xml_depth: 64,
            max_interactions: 50,
            max_combinations: 64,
        }
    }

    /// Create permissive limits (less restrictive, use with caution)
    pub fn permissive() -> Self {
        Self {
            max_xml_size: 512 * 1024 * 1024, // 512 MB
            max_xml_depth: 4096,
            max_interactions: 100_000,
            max_combinations: 1 << 20,
        }
    }

    /// Check if XML size is within limits
    pub fn check_xml_size(&self, size: usize) -> Result<()> {
        if size > self.max_xml_size {
            Err(Error::LimitExceeded(format!(
                "XML size {} bytes exceeds maximum {} bytes",
                size, self.max_xml_size
            )))
        } else {
            Ok(())
        }
    }

    /// Check if XML depth is within limits
    pub fn check_xml_depth(&self, depth: usize) -> Result<()> {
        if depth > self.max_xml_depth {
            Err(Error::LimitExceeded(format!(
                "XML depth {} exceeds maximum {}",
                depth, self.max_xml_depth
            )))
        } else {
            Ok(())
        }
    }

    /// Check if the number of interactions is within limits
    pub fn check_interactions(&self, count: usize) -> Result<()> {
        if count > self.max_interactions {
            Err(Error::LimitExceeded(format!(
                "{} interactions exceeds maximum {}",
                count, self.max_interactions
            )))
        } else {
            Ok(())
        }
    }
}
