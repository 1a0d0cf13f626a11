//! `longtext` questions as `<extendedTextInteraction>`
//!
//! The stimulus becomes the prompt and the interaction accepts exactly one
//! XHTML response. No declaration or processing is produced.

use crate::entities::question_types::Longtext;
use crate::error::Result;
use crate::limits::Limits;
use crate::qti::{parse_fragment, ExtendedTextInteraction, ResponseDeclaration, ResponseProcessing, TextFormat};

/// Output of [`LongtextMapper::convert`]
pub type ConvertedInteraction = (
    ExtendedTextInteraction,
    Option<ResponseDeclaration>,
    Option<ResponseProcessing>,
);

/// `longtext` back to `<extendedTextInteraction>`.
///
/// Essays are scored manually, so no response declaration or response
/// processing is ever produced.
#[derive(Debug, Clone, Default)]
pub struct LongtextMapper {
    limits: Limits,
}

impl LongtextMapper {
    /// Create a mapper with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limits applied when parsing the stimulus
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Convert a question into an interaction
    pub fn convert(
        &self,
        question: &Longtext,
        response_identifier: &str,
        label: &str,
    ) -> Result<ConvertedInteraction> {
        let mut interaction = ExtendedTextInteraction::new(response_identifier);
        interaction.label = Some(label.to_string());
        interaction.prompt = parse_fragment(&question.stimulus, &self.limits)?;
        interaction.placeholder_text = question.placeholder.clone();
        interaction.expected_length = question.max_length;
        interaction.format = Some(TextFormat::Xhtml);
        interaction.min_strings = 1;
        interaction.max_strings = Some(1);

        tracing::debug!(response_identifier, "converted longtext question");
        Ok((interaction, None, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qti::markup::marshal_content;

    #[test]
    fn test_convert_without_validation() {
        let question = Longtext::new("<strong>stimulushere</strong>").with_placeholder("placeholdertest");

        let (interaction, declaration, processing) = LongtextMapper::new()
            .convert(&question, "questionReferenceOne", "questionReferenceOne")
            .unwrap();

        assert!(declaration.is_none());
        assert!(processing.is_none());
        assert_eq!(interaction.response_identifier, "questionReferenceOne");
        assert_eq!(interaction.label.as_deref(), Some("questionReferenceOne"));
        assert_eq!(
            marshal_content(&interaction.prompt).unwrap(),
            "<strong>stimulushere</strong>"
        );
        assert_eq!(interaction.placeholder_text.as_deref(), Some("placeholdertest"));
        assert_eq!(interaction.format, Some(TextFormat::Xhtml));
        assert_eq!(interaction.min_strings, 1);
        assert_eq!(interaction.max_strings, Some(1));
    }

    #[test]
    fn test_max_length_becomes_expected_length() {
        let question = Longtext::new("Write").with_max_length(250);
        let (interaction, _, _) = LongtextMapper::new().convert(&question, "R", "R").unwrap();
        assert_eq!(interaction.expected_length, Some(250));
        assert_eq!(marshal_content(&interaction.prompt).unwrap(), "Write");
    }

    #[test]
    fn test_malformed_stimulus() {
        let question = Longtext::new("<p>unclosed");
        assert!(LongtextMapper::new().convert(&question, "R", "R").is_err());
    }
}
