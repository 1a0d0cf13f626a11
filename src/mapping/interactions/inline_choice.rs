use crate::diagnostics::Diagnostics;
use crate::entities::question_types::Clozedropdown;
use crate::entities::QuestionType;
use crate::error::Result;
use crate::mapping::validation::{InlineChoiceValidationBuilder, ValidationBuilder};
use crate::qti::content::text_content;
use crate::qti::{InlineChoiceInteraction, InteractionKind};

use super::{InteractionMapper, ScoringContext, RESPONSE_TOKEN};

/// `<inlineChoiceInteraction>` to a single slot `clozedropdown`
#[derive(Debug, Clone, Copy)]
pub struct InlineChoiceMapper<'a> {
    interaction: &'a InlineChoiceInteraction,
}

impl<'a> InlineChoiceMapper<'a> {
    /// Create a mapper for the interaction
    pub fn new(interaction: &'a InlineChoiceInteraction) -> Self {
        Self { interaction }
    }

    /// Texts of the choices, in document order
    pub fn possible_responses(&self) -> Vec<String> {
        self.interaction
            .choices
            .iter()
            .map(|choice| text_content(&choice.content).trim().to_string())
            .collect()
    }

    /// Validation builder for the interaction's choices
    pub fn validation_builder(&self) -> InlineChoiceValidationBuilder {
        InlineChoiceValidationBuilder::new(&self.interaction.choices)
    }
}

impl InteractionMapper for InlineChoiceMapper<'_> {
    fn kind(&self) -> InteractionKind {
        InteractionKind::InlineChoice
    }

    fn map(&self, scoring: ScoringContext<'_>, diagnostics: &mut Diagnostics) -> Result<QuestionType> {
        let validation = self.validation_builder().build(scoring, diagnostics);

        Ok(QuestionType::Clozedropdown(Clozedropdown {
            stimulus: String::new(),
            template: RESPONSE_TOKEN.to_string(),
            possible_responses: vec![self.possible_responses()],
            shuffle_options: self.interaction.shuffle.then_some(true),
            is_math: None,
            validation,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qti::{Content, InlineChoice};

    #[test]
    fn test_map_single_slot() {
        let interaction = InlineChoiceInteraction {
            response_identifier: "RESPONSE".to_string(),
            shuffle: false,
            required: false,
            choices: vec![
                InlineChoice {
                    identifier: "G".to_string(),
                    content: vec![Content::text("Gloucester")],
                },
                InlineChoice {
                    identifier: "L".to_string(),
                    content: vec![Content::text("Lancaster")],
                },
            ],
        };
        let mut diagnostics = Diagnostics::new();

        match InlineChoiceMapper::new(&interaction)
            .map(ScoringContext::default(), &mut diagnostics)
            .unwrap()
        {
            QuestionType::Clozedropdown(q) => {
                assert_eq!(q.template, "{{response}}");
                assert_eq!(
                    q.possible_responses,
                    vec![vec!["Gloucester".to_string(), "Lancaster".to_string()]]
                );
                assert_eq!(q.shuffle_options, None);
            }
            other => panic!("expected clozedropdown, got {other:?}"),
        }
    }
}
