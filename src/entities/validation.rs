//! Scoring records attached to questions

use serde::{Deserialize, Serialize};

/// Scoring type of every automatically scored question
pub const EXACT_MATCH: &str = "exactMatch";

/// One accepted response and its score
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidResponse {
    /// Score awarded for the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,

    /// Expected values, one per response slot
    pub value: Vec<String>,
}

impl ValidResponse {
    /// Create a response scored 1
    pub fn new(value: Vec<String>) -> Self {
        Self {
            score: Some(1),
            value,
        }
    }
}

/// Automatic scoring for a question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Validation {
    /// Scoring type
    pub scoring_type: String,

    /// Primary accepted response
    pub valid_response: ValidResponse,

    /// Other accepted responses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_responses: Option<Vec<ValidResponse>>,
}

impl Validation {
    /// Exact match scoring with a primary response and alternates
    pub fn exact_match(valid_response: ValidResponse, alternates: Vec<ValidResponse>) -> Self {
        Self {
            scoring_type: EXACT_MATCH.to_string(),
            valid_response,
            alt_responses: if alternates.is_empty() {
                None
            } else {
                Some(alternates)
            },
        }
    }

    /// Build exact match scoring from ordered combinations; the first
    /// combination is the primary response. Returns `None` for no combinations.
    pub fn from_combinations(combinations: Vec<Vec<String>>) -> Option<Self> {
        let mut responses = combinations.into_iter().map(ValidResponse::new);
        let valid = responses.next()?;
        Some(Self::exact_match(valid, responses.collect()))
    }

    /// Minimal scoring record without any expected value
    pub fn placeholder() -> Self {
        Self {
            scoring_type: EXACT_MATCH.to_string(),
            valid_response: ValidResponse {
                score: None,
                value: Vec::new(),
            },
            alt_responses: None,
        }
    }

    /// Number of accepted responses, primary included
    pub fn response_count(&self) -> usize {
        1 + self.alt_responses.as_ref().map_or(0, Vec::len)
    }
}

/// Manual scoring for open responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManualValidation {
    /// Maximum score a marker may award
    pub max_score: u32,
}

impl Default for ManualValidation {
    fn default() -> Self {
        Self { max_score: 1 }
    }
}
