use serde::{Deserialize, Serialize};

use crate::entities::validation::Validation;

/// Drag and drop into response slots of a template
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clozeassociation {
    /// Question text as markup
    #[serde(default)]
    pub stimulus: String,

    /// Markup with one `{{response}}` token per slot
    pub template: String,

    /// Draggable responses as markup
    pub possible_responses: Vec<String>,

    /// A response may be used in more than one slot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_responses: Option<bool>,

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
