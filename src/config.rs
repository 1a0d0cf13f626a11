//! Mapper configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::limits::Limits;

/// Configuration for [`ItemMapper`](crate::mapping::ItemMapper)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Resource limits for loading documents
    pub limits: Limits,
    /// Whether interactions sharing one scoring unit may be merged into a
    /// single question. When disabled every item is mapped one question per
    /// interaction.
    pub merge_interactions: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            merge_interactions: true,
        }
    }
}

impl MapperConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Set the limits
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Enable or disable the merged construction strategy
    pub fn with_merge_interactions(mut self, merge: bool) -> Self {
        self.merge_interactions = merge;
        self
    }
}
