use serde::{Deserialize, Serialize};

use crate::entities::validation::Validation;

/// One option of a multiple choice question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct McqOption {
    /// Option content as markup
    pub label: String,
    /// Value recorded when the option is selected
    pub value: String,
}

/// Multiple choice question
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mcq {
    /// Question text as markup
    #[serde(default)]
    pub stimulus: String,

    /// Options in display order
    pub options: Vec<McqOption>,

    /// More than one option may be selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_responses: Option<bool>,

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
