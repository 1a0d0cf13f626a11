//! Items of the target model

use serde::{Deserialize, Serialize};

/// An item: the page that lays out one or more questions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique item reference
    pub reference: String,

    /// Item description, taken from the source title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// References of the item's questions, in order
    pub questions: Vec<String>,

    /// Item layout as markup, with question placeholders
    pub content: String,
}

impl Item {
    /// Create an item
    pub fn new(reference: impl Into<String>, questions: Vec<String>, content: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            description: None,
            questions,
            content: content.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
