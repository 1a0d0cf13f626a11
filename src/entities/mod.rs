//! Target item/question model
//!
//! JSON-serialisable records produced by the mapping engine.

pub mod item;
pub mod question;
pub mod question_types;
pub mod validation;

pub use item::Item;
pub use question::{Question, QuestionType, RESPONSE_WIDGET};
pub use question_types::SupportsMath;
pub use validation::{ManualValidation, ValidResponse, Validation, EXACT_MATCH};
