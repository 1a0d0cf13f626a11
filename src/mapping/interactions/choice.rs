use crate::diagnostics::Diagnostics;
use crate::entities::question_types::{Mcq, McqOption};
use crate::entities::QuestionType;
use crate::error::Result;
use crate::mapping::validation::{ChoiceValidationBuilder, ValidationBuilder};
use crate::qti::markup::marshal_content;
use crate::qti::{Cardinality, ChoiceInteraction, InteractionKind};

use super::{InteractionMapper, ScoringContext};

/// `<choiceInteraction>` to `mcq`
#[derive(Debug, Clone, Copy)]
pub struct ChoiceMapper<'a> {
    interaction: &'a ChoiceInteraction,
}

impl<'a> ChoiceMapper<'a> {
    /// Create a mapper for the interaction
    pub fn new(interaction: &'a ChoiceInteraction) -> Self {
        Self { interaction }
    }
}

impl InteractionMapper for ChoiceMapper<'_> {
    fn kind(&self) -> InteractionKind {
        InteractionKind::Choice
    }

    fn map(&self, scoring: ScoringContext<'_>, diagnostics: &mut Diagnostics) -> Result<QuestionType> {
        let interaction = self.interaction;

        let options = interaction
            .choices
            .iter()
            .map(|choice| {
                Ok(McqOption {
                    label: marshal_content(&choice.content)?,
                    value: choice.identifier.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let multiple = interaction.max_choices != 1
            || scoring
                .declaration
                .is_some_and(|d| d.cardinality == Cardinality::Multiple);

        let validation = ChoiceValidationBuilder::new(&interaction.choices).build(scoring, diagnostics);

        Ok(QuestionType::Mcq(Mcq {
            stimulus: marshal_content(&interaction.prompt)?,
            options,
            multiple_responses: multiple.then_some(true),
            shuffle_options: interaction.shuffle.then_some(true),
            is_math: None,
            validation,
        }))
    }
}
