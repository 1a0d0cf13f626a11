use serde::{Deserialize, Serialize};

use crate::entities::validation::ManualValidation;

/// Rich text essay question
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Longtext {
    /// Question text as markup
    #[serde(default)]
    pub stimulus: String,

    /// Text shown in the empty editor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Maximum number of words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Editor toolbar buttons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatting_options: Option<Vec<String>>,

    /// Allow submitting over `max_length`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_over_limit: Option<bool>,

    /// Browser spell checking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcheck: Option<bool>,

    /// Contains mathematical markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_math: Option<bool>,

    /// Manual scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ManualValidation>,
}

impl Longtext {
    /// Create a question with the given stimulus
    pub fn new(stimulus: impl Into<String>) -> Self {
        Self {
            stimulus: stimulus.into(),
            ..Self::default()
        }
    }

    /// Set the placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the maximum length
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}
