use serde::{Deserialize, Serialize};

use crate::entities::validation::ManualValidation;

/// Plain text essay question, without formatting or math support
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plaintext {
    /// Question text as markup
    #[serde(default)]
    pub stimulus: String,

    /// Text shown in the empty field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Maximum number of words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Browser spell checking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcheck: Option<bool>,

    /// Manual scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ManualValidation>,
}
