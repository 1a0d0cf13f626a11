use crate::diagnostics::Diagnostics;
use crate::entities::question_types::{Longtext, Plaintext};
use crate::entities::{ManualValidation, QuestionType};
use crate::error::Result;
use crate::qti::markup::marshal_content;
use crate::qti::{ExtendedTextInteraction, InteractionKind, TextFormat};

use super::{InteractionMapper, ScoringContext};

/// `<extendedTextInteraction>` to `longtext`, or to `plaintext` for
/// `format="plain"`.
///
/// Essay responses are scored manually, so a response declaration only
/// switches on a `max_score` of 1.
#[derive(Debug, Clone, Copy)]
pub struct ExtendedTextMapper<'a> {
    interaction: &'a ExtendedTextInteraction,
}

impl<'a> ExtendedTextMapper<'a> {
    /// Create a mapper for the interaction
    pub fn new(interaction: &'a ExtendedTextInteraction) -> Self {
        Self { interaction }
    }

    fn validation(
        &self,
        scoring: ScoringContext<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Option<ManualValidation> {
        let declaration = scoring.declaration?;
        if declaration.has_correct_response() {
            diagnostics.warn_on(
                "correctResponse",
                format!(
                    "Ignoring <correctResponse> of '{}'. <extendedTextInteraction> responses are scored manually",
                    declaration.identifier
                ),
            );
        }
        Some(ManualValidation::default())
    }
}

impl InteractionMapper for ExtendedTextMapper<'_> {
    fn kind(&self) -> InteractionKind {
        InteractionKind::ExtendedText
    }

    fn map(&self, scoring: ScoringContext<'_>, diagnostics: &mut Diagnostics) -> Result<QuestionType> {
        let interaction = self.interaction;

        if interaction.max_strings.is_some_and(|max| max > 1) {
            diagnostics.warn_on(
                "extendedTextInteraction",
                "Does not support 'maxStrings' greater than 1 on <extendedTextInteraction>. Mapped to a single response",
            );
        }

        let stimulus = marshal_content(&interaction.prompt)?;
        let validation = self.validation(scoring, diagnostics);

        Ok(match interaction.text_format() {
            TextFormat::Plain => QuestionType::Plaintext(Plaintext {
                stimulus,
                placeholder: interaction.placeholder_text.clone(),
                max_length: interaction.expected_length,
                spellcheck: None,
                validation,
            }),
            TextFormat::PreFormatted | TextFormat::Xhtml => QuestionType::Longtext(Longtext {
                stimulus,
                placeholder: interaction.placeholder_text.clone(),
                max_length: interaction.expected_length,
                validation,
                ..Longtext::default()
            }),
        })
    }
}
