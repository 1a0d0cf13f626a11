use crate::diagnostics::Diagnostics;
use crate::entities::question_types::Clozetext;
use crate::entities::QuestionType;
use crate::error::Result;
use crate::mapping::validation::{TextEntryValidationBuilder, ValidationBuilder};
use crate::qti::{InteractionKind, TextEntryInteraction};

use super::{InteractionMapper, ScoringContext, RESPONSE_TOKEN};

/// `<textEntryInteraction>` to a single slot `clozetext`
#[derive(Debug, Clone, Copy)]
pub struct TextEntryMapper<'a> {
    interaction: &'a TextEntryInteraction,
}

impl<'a> TextEntryMapper<'a> {
    /// Create a mapper for the interaction
    pub fn new(interaction: &'a TextEntryInteraction) -> Self {
        Self { interaction }
    }

    /// Record a WARNING for attributes `clozetext` has no equivalent for
    pub fn check_attributes(&self, diagnostics: &mut Diagnostics) {
        if self.interaction.pattern_mask.is_some() {
            diagnostics.warn_on(
                "textEntryInteraction",
                "Does not support 'patternMask' on <textEntryInteraction>. Ignoring 'patternMask'",
            );
        }
    }
}

impl InteractionMapper for TextEntryMapper<'_> {
    fn kind(&self) -> InteractionKind {
        InteractionKind::TextEntry
    }

    fn map(&self, scoring: ScoringContext<'_>, diagnostics: &mut Diagnostics) -> Result<QuestionType> {
        self.check_attributes(diagnostics);
        let validation = TextEntryValidationBuilder.build(scoring, diagnostics);

        Ok(QuestionType::Clozetext(Clozetext {
            stimulus: String::new(),
            template: RESPONSE_TOKEN.to_string(),
            max_length: self.interaction.expected_length,
            is_math: None,
            validation,
        }))
    }
}
