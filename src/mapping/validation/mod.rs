//! Validation builders
//!
//! One builder per interaction family turns a response declaration into a
//! scoring record. Every family answers the same question, "which values are
//! acceptable in each response slot", and [`ValidationBuilder::build`] turns
//! the answer into a [`Validation`] according to the resolved template.

mod choice;
mod gap_match;
mod inline_choice;
mod text_entry;

pub use choice::ChoiceValidationBuilder;
pub use gap_match::GapMatchValidationBuilder;
pub use inline_choice::InlineChoiceValidationBuilder;
pub use text_entry::TextEntryValidationBuilder;

use crate::diagnostics::Diagnostics;
use crate::entities::Validation;
use crate::limits::Limits;
use crate::qti::ResponseDeclaration;

use super::combinations::bounded_cartesian_product;
use super::templates::ResponseProcessingTemplate;

/// Scoring inputs of one question
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    /// Declaration matching the interaction's response identifier
    pub declaration: Option<&'a ResponseDeclaration>,
    /// Template resolved for the item
    pub template: Option<&'a ResponseProcessingTemplate>,
    /// Upper bound on the accepted responses of one validation
    pub max_combinations: usize,
}

impl Default for ScoringContext<'_> {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl<'a> ScoringContext<'a> {
    /// Create a context with the default combination limit
    pub fn new(
        declaration: Option<&'a ResponseDeclaration>,
        template: Option<&'a ResponseProcessingTemplate>,
    ) -> Self {
        Self {
            declaration,
            template,
            max_combinations: Limits::default().max_combinations,
        }
    }

    /// Set the combination limit
    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }
}

/// How a supported template scores responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScoringMethod {
    /// Exact match against the declared correct values
    MatchCorrect,
    /// Placeholder record for point mappings
    MapResponse,
}

impl ScoringMethod {
    /// Scoring method of a template, recording a WARNING if it has none
    pub(crate) fn resolve(
        template: &ResponseProcessingTemplate,
        diagnostics: &mut Diagnostics,
    ) -> Option<Self> {
        match template {
            ResponseProcessingTemplate::MatchCorrect => Some(Self::MatchCorrect),
            ResponseProcessingTemplate::MapResponse => Some(Self::MapResponse),
            ResponseProcessingTemplate::MapResponsePoint
            | ResponseProcessingTemplate::Unsupported(_) => {
                diagnostics.warn_on(
                    "responseProcessing",
                    format!(
                        "Does not support template {} on <responseProcessing>",
                        template.name()
                    ),
                );
                None
            }
        }
    }
}

/// Builds the scoring record of one interaction family
pub trait ValidationBuilder {
    /// Acceptable values of each response slot, in slot order, read from the
    /// declared correct response
    fn correct_slots(
        &self,
        declaration: &ResponseDeclaration,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Vec<String>>;

    /// Build the scoring record for a declaration under a template.
    ///
    /// Returns `None`, leaving the question unscored, when the declaration or
    /// the template is missing, or when the template is not supported.
    fn build(&self, scoring: ScoringContext<'_>, diagnostics: &mut Diagnostics) -> Option<Validation> {
        let (declaration, template) = scoring.declaration.zip(scoring.template)?;

        match ScoringMethod::resolve(template, diagnostics)? {
            ScoringMethod::MatchCorrect => {
                self.build_match_correct(declaration, scoring.max_combinations, diagnostics)
            }
            ScoringMethod::MapResponse => self.build_map_response(declaration, diagnostics),
        }
    }

    /// `match_correct`: every combination of the per-slot correct values is
    /// accepted, the first one being the primary response
    fn build_match_correct(
        &self,
        declaration: &ResponseDeclaration,
        max_combinations: usize,
        diagnostics: &mut Diagnostics,
    ) -> Option<Validation> {
        if !has_correct_response(declaration, diagnostics) {
            return None;
        }
        let slots = self.correct_slots(declaration, diagnostics);
        if slots.is_empty() {
            return None;
        }
        Validation::from_combinations(bounded_cartesian_product(
            &slots,
            max_combinations,
            diagnostics,
        ))
    }

    /// `map_response`: only a placeholder record, point mappings are not
    /// translated
    fn build_map_response(
        &self,
        _declaration: &ResponseDeclaration,
        _diagnostics: &mut Diagnostics,
    ) -> Option<Validation> {
        Some(Validation::placeholder())
    }
}

/// Check that a declaration has correct values, recording a WARNING if not
pub(crate) fn has_correct_response(
    declaration: &ResponseDeclaration,
    diagnostics: &mut Diagnostics,
) -> bool {
    if declaration.has_correct_response() {
        return true;
    }
    diagnostics.warn_on(
        "responseDeclaration",
        format!(
            "No <correctResponse> on <responseDeclaration> '{}'. Ignoring validation",
            declaration.identifier
        ),
    );
    false
}

pub(crate) fn warn_unknown_value(
    diagnostics: &mut Diagnostics,
    declaration: &ResponseDeclaration,
    value: &str,
) {
    diagnostics.warn_on(
        "correctResponse",
        format!(
            "Ignoring unknown value '{}' in <correctResponse> of '{}'",
            value, declaration.identifier
        ),
    );
}
