//! Item construction strategies
//!
//! [`RegularItemBuilder`] maps every interaction to its own question and is
//! always applicable. [`MergedItemBuilder`] folds all interactions of an item
//! into one question when they form a single scored unit, and reports
//! [`MergeOutcome::NotApplicable`] otherwise.

mod merged;
mod regular;

pub use merged::MergedItemBuilder;
pub use regular::RegularItemBuilder;

use indexmap::IndexMap;

use crate::diagnostics::Diagnostics;
use crate::entities::{Item, Question};
use crate::qti::{Content, Interaction, ResponseDeclaration};

use super::templates::ResponseProcessingTemplate;

/// Everything a strategy reads from the source item
#[derive(Debug, Clone, Copy)]
pub struct BuildInput<'a> {
    /// Item identifier, the prefix of every question reference
    pub item_identifier: &'a str,
    /// Filtered item body
    pub body: &'a [Content],
    /// Supported interactions of the body, in document order
    pub interactions: &'a [&'a Interaction],
    /// Response declarations keyed by identifier
    pub declarations: &'a IndexMap<String, ResponseDeclaration>,
    /// Template resolved for the item
    pub template: Option<&'a ResponseProcessingTemplate>,
    /// Upper bound on the accepted responses of one validation
    pub max_combinations: usize,
}

/// Result of a strategy
#[derive(Debug, Clone)]
pub struct ItemBuild {
    /// The item
    pub item: Item,
    /// Its questions, in the order the item references them
    pub questions: Vec<Question>,
    /// WARNING diagnostics recorded by the strategy
    pub diagnostics: Diagnostics,
}

/// Result of the merged strategy
#[derive(Debug, Clone)]
pub enum MergeOutcome {
    /// The interactions were merged into one question
    Applicable(ItemBuild),
    /// The interactions do not form one scored unit
    NotApplicable,
}

/// Markup that places a question inside the item content
pub fn response_placeholder(reference: &str) -> String {
    format!(
        r#"<span class="learnosity-response question-{}"></span>"#,
        reference
    )
}

/// Reference of the question mapped from one interaction
pub fn question_reference(item_identifier: &str, response_identifier: &str) -> String {
    format!("{}_{}", item_identifier, response_identifier)
}
