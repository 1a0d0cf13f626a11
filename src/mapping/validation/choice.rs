use crate::diagnostics::Diagnostics;
use crate::qti::{ResponseDeclaration, SimpleChoice};

use super::{warn_unknown_value, ValidationBuilder};

/// Validation of `<choiceInteraction>`: the selected choice identifiers.
///
/// Each correct identifier is its own slot, so the correct response maps to
/// exactly one combination.
#[derive(Debug, Clone)]
pub struct ChoiceValidationBuilder<'a> {
    choice_identifiers: Vec<&'a str>,
}

impl<'a> ChoiceValidationBuilder<'a> {
    /// Create a builder for the given choices
    pub fn new(choices: &'a [SimpleChoice]) -> Self {
        Self {
            choice_identifiers: choices.iter().map(|c| c.identifier.as_str()).collect(),
        }
    }
}

impl ValidationBuilder for ChoiceValidationBuilder<'_> {
    fn correct_slots(
        &self,
        declaration: &ResponseDeclaration,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Vec<String>> {
        let mut slots = Vec::new();
        for value in &declaration.correct_response {
            let identifier = value.as_text();
            if self.choice_identifiers.contains(&identifier.as_str()) {
                slots.push(vec![identifier]);
            } else {
                warn_unknown_value(diagnostics, declaration, &identifier);
            }
        }
        slots
    }
}
