use indexmap::IndexMap;

use crate::diagnostics::Diagnostics;
use crate::qti::{ResponseDeclaration, ResponseValue};

use super::{warn_unknown_value, ValidationBuilder};

/// Validation of `<gapMatchInteraction>`.
///
/// Correct values are `choice gap` directed pairs. The slot of a pair is the
/// position of its gap in document order, not its position in the
/// declaration, and the slot value is the text of the choice.
#[derive(Debug, Clone)]
pub struct GapMatchValidationBuilder<'a> {
    gap_identifiers: Vec<&'a str>,
    possible_responses: IndexMap<String, String>,
}

impl<'a> GapMatchValidationBuilder<'a> {
    /// Create a builder from the gaps in document order and the response
    /// text of each choice identifier
    pub fn new(gap_identifiers: Vec<&'a str>, possible_responses: IndexMap<String, String>) -> Self {
        Self {
            gap_identifiers,
            possible_responses,
        }
    }
}

impl ValidationBuilder for GapMatchValidationBuilder<'_> {
    fn correct_slots(
        &self,
        declaration: &ResponseDeclaration,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Vec<String>> {
        let mut slots = vec![Vec::new(); self.gap_identifiers.len()];

        for value in &declaration.correct_response {
            let (choice, gap) = match value {
                ResponseValue::DirectedPair { first, second } => (first, second),
                ResponseValue::Pair(first, second) => (first, second),
                other => {
                    warn_unknown_value(diagnostics, declaration, &other.as_text());
                    continue;
                }
            };

            let response = self.possible_responses.get(choice);
            let index = self.gap_identifiers.iter().position(|g| *g == gap.as_str());
            match (response, index) {
                (Some(response), Some(index)) => slots[index].push(response.clone()),
                _ => warn_unknown_value(diagnostics, declaration, &value.as_text()),
            }
        }

        for (slot, gap) in slots.iter_mut().zip(&self.gap_identifiers) {
            if slot.is_empty() {
                diagnostics.warn_on(
                    "correctResponse",
                    format!(
                        "No correct response for <gap> '{}' of '{}'. Mapped to an empty value",
                        gap, declaration.identifier
                    ),
                );
                slot.push(String::new());
            }
        }
        slots
    }
}
