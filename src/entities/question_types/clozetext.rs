use serde::{Deserialize, Serialize};

use crate::entities::validation::Validation;

/// Text fields embedded in a template
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clozetext {
    /// Question text as markup
    #[serde(default)]
    pub stimulus: String,

    /// Markup with one `{{response}}` token per slot
    pub template: String,

    /// Maximum number of characters per field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Contains mathematical markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_math: Option<bool>,

    /// Automatic scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
}
