//! Questions of the target model

use serde::{Deserialize, Serialize};

use super::question_types::{
    Clozeassociation, Clozedropdown, Clozetext, Longtext, Mcq, Plaintext, SupportsMath,
};

/// Widget type of every question produced by the mapper
pub const RESPONSE_WIDGET: &str = "response";

/// Question data, tagged by question type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QuestionType {
    /// `longtext`
    Longtext(Longtext),
    /// `plaintext`
    Plaintext(Plaintext),
    /// `mcq`
    Mcq(Mcq),
    /// `clozeassociation`
    Clozeassociation(Clozeassociation),
    /// `clozedropdown`
    Clozedropdown(Clozedropdown),
    /// `clozetext`
    Clozetext(Clozetext),
}

impl QuestionType {
    /// The question type name
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionType::Longtext(_) => "longtext",
            QuestionType::Plaintext(_) => "plaintext",
            QuestionType::Mcq(_) => "mcq",
            QuestionType::Clozeassociation(_) => "clozeassociation",
            QuestionType::Clozedropdown(_) => "clozedropdown",
            QuestionType::Clozetext(_) => "clozetext",
        }
    }

    /// Access to the `is_math` attribute, for types that have one
    pub fn math_support_mut(&mut self) -> Option<&mut dyn SupportsMath> {
        match self {
            QuestionType::Longtext(q) => Some(q),
            QuestionType::Mcq(q) => Some(q),
            QuestionType::Clozeassociation(q) => Some(q),
            QuestionType::Clozedropdown(q) => Some(q),
            QuestionType::Clozetext(q) => Some(q),
            QuestionType::Plaintext(_) => None,
        }
    }

    /// Whether the question carries any scoring record
    pub fn has_validation(&self) -> bool {
        match self {
            QuestionType::Longtext(q) => q.validation.is_some(),
            QuestionType::Plaintext(q) => q.validation.is_some(),
            QuestionType::Mcq(q) => q.validation.is_some(),
            QuestionType::Clozeassociation(q) => q.validation.is_some(),
            QuestionType::Clozedropdown(q) => q.validation.is_some(),
            QuestionType::Clozetext(q) => q.validation.is_some(),
        }
    }
}

/// A question with its reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    /// Unique question reference
    pub reference: String,

    /// Question type name, mirrors the tag of `data`
    #[serde(rename = "type")]
    pub question_type: String,

    /// Widget type
    pub widget_type: String,

    /// Question data
    pub data: QuestionType,
}

impl Question {
    /// Create a question
    pub fn new(reference: impl Into<String>, data: QuestionType) -> Self {
        Self {
            reference: reference.into(),
            question_type: data.type_name().to_string(),
            widget_type: RESPONSE_WIDGET.to_string(),
            data,
        }
    }
}
