use serde::{Deserialize, Serialize};

use crate::entities::validation::Validation;

/// Drop down lists embedded in a template
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clozedropdown {
    /// Question text as markup
    #[serde(default)]
    pub stimulus: String,

    /// Markup with one `{{response}}` token per slot
    pub template: String,

    /// Choices of each slot, in slot order
    pub possible_responses: Vec<Vec<String>>,

    /// Shuffle the options for each attempt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_options: Option<bool>,

    /// Contains mathematical markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_math: Option<bool>,

    /// Automatic scoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
}
