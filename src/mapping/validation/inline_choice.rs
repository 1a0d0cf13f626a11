use indexmap::IndexMap;

use crate::diagnostics::Diagnostics;
use crate::qti::content::text_content;
use crate::qti::{InlineChoice, ResponseDeclaration};

use super::{warn_unknown_value, ValidationBuilder};

/// Validation of `<inlineChoiceInteraction>`: one slot holding the text of
/// the selected choice. Several correct values are alternatives.
#[derive(Debug, Clone)]
pub struct InlineChoiceValidationBuilder {
    choice_texts: IndexMap<String, String>,
}

impl InlineChoiceValidationBuilder {
    /// Create a builder for the given choices
    pub fn new(choices: &[InlineChoice]) -> Self {
        Self {
            choice_texts: choices
                .iter()
                .map(|c| (c.identifier.clone(), text_content(&c.content).trim().to_string()))
                .collect(),
        }
    }
}

impl ValidationBuilder for InlineChoiceValidationBuilder {
    fn correct_slots(
        &self,
        declaration: &ResponseDeclaration,
        diagnostics: &mut Diagnostics,
    ) -> Vec<Vec<String>> {
        let mut values = Vec::new();
        for value in &declaration.correct_response {
            let identifier = value.as_text();
            match self.choice_texts.get(&identifier) {
                Some(text) => values.push(text.clone()),
                None => warn_unknown_value(diagnostics, declaration, &identifier),
            }
        }
        vec![values]
    }
}
