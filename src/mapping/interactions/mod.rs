//! Interaction mappers
//!
//! One mapper per supported interaction kind reads the typed interaction and
//! produces the matching question record. [`map_interaction`] dispatches over
//! [`Interaction`] with an exhaustive match.

mod choice;
mod extended_text;
mod gap_match;
mod inline_choice;
mod text_entry;

pub use choice::ChoiceMapper;
pub use extended_text::ExtendedTextMapper;
pub use gap_match::GapMatchMapper;
pub use inline_choice::InlineChoiceMapper;
pub use text_entry::TextEntryMapper;

use crate::diagnostics::Diagnostics;
use crate::entities::QuestionType;
use crate::error::Result;
use crate::qti::{Interaction, InteractionKind};

pub use super::validation::ScoringContext;

/// Template token marking a response slot
pub const RESPONSE_TOKEN: &str = "{{response}}";

/// Maps one kind of interaction to a question
pub trait InteractionMapper {
    /// The interaction kind this mapper reads
    fn kind(&self) -> InteractionKind;

    /// Check if the mapper can read the given interaction
    fn accepts(&self, interaction: &Interaction) -> bool {
        interaction.kind() == self.kind()
    }

    /// Build the question, recording a WARNING for every attribute that
    /// cannot be carried over
    fn map(&self, scoring: ScoringContext<'_>, diagnostics: &mut Diagnostics)
        -> Result<QuestionType>;
}

/// Map an interaction with the mapper of its kind
pub fn map_interaction(
    interaction: &Interaction,
    scoring: ScoringContext<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<QuestionType> {
    match interaction {
        Interaction::Choice(i) => ChoiceMapper::new(i).map(scoring, diagnostics),
        Interaction::InlineChoice(i) => InlineChoiceMapper::new(i).map(scoring, diagnostics),
        Interaction::TextEntry(i) => TextEntryMapper::new(i).map(scoring, diagnostics),
        Interaction::ExtendedText(i) => ExtendedTextMapper::new(i).map(scoring, diagnostics),
        Interaction::GapMatch(i) => GapMatchMapper::new(i).map(scoring, diagnostics),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qti::{ExtendedTextInteraction, TextEntryInteraction};

    #[test]
    fn test_mapper_accepts_its_kind() {
        let text_entry = TextEntryInteraction {
            response_identifier: "R1".to_string(),
            expected_length: None,
            pattern_mask: None,
            placeholder_text: None,
        };
        let mapper = TextEntryMapper::new(&text_entry);
        assert!(mapper.accepts(&Interaction::TextEntry(text_entry.clone())));
        assert!(!mapper.accepts(&Interaction::ExtendedText(ExtendedTextInteraction::new("R1"))));
    }

    #[test]
    fn test_dispatch_by_kind() {
        let interaction = Interaction::ExtendedText(ExtendedTextInteraction::new("Q1"));
        let mut diagnostics = Diagnostics::new();
        let question =
            map_interaction(&interaction, ScoringContext::default(), &mut diagnostics).unwrap();
        assert_eq!(question.type_name(), "longtext");
        assert!(diagnostics.is_empty());
    }
}
