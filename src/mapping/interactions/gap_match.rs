use indexmap::IndexMap;

use crate::diagnostics::Diagnostics;
use crate::entities::question_types::Clozeassociation;
use crate::entities::QuestionType;
use crate::error::Result;
use crate::mapping::validation::{GapMatchValidationBuilder, ValidationBuilder};
use crate::qti::markup::{marshal_content, marshal_content_with};
use crate::qti::{Content, GapMatchInteraction, InteractionKind};

use super::{InteractionMapper, ScoringContext, RESPONSE_TOKEN};

/// `<gapMatchInteraction>` to `clozeassociation`.
///
/// Gap texts become the draggable responses and the block content becomes
/// the template, with one response token per gap.
#[derive(Debug, Clone, Copy)]
pub struct GapMatchMapper<'a> {
    interaction: &'a GapMatchInteraction,
}

impl<'a> GapMatchMapper<'a> {
    /// Create a mapper for the interaction
    pub fn new(interaction: &'a GapMatchInteraction) -> Self {
        Self { interaction }
    }

    fn possible_responses(&self) -> Result<IndexMap<String, String>> {
        self.interaction
            .gap_texts
            .iter()
            .map(|gap_text| Ok((gap_text.identifier.clone(), marshal_content(&gap_text.content)?)))
            .collect()
    }
}

impl InteractionMapper for GapMatchMapper<'_> {
    fn kind(&self) -> InteractionKind {
        InteractionKind::GapMatch
    }

    fn map(&self, scoring: ScoringContext<'_>, diagnostics: &mut Diagnostics) -> Result<QuestionType> {
        let interaction = self.interaction;

        if !interaction.gap_images.is_empty() {
            diagnostics.warn_on(
                "gapImg",
                "Does not support <gapImg> on <gapMatchInteraction>. Ignoring <gapImg>",
            );
        }

        let template = marshal_content_with(&interaction.content, &|node| match node {
            Content::Gap(_) => Some(RESPONSE_TOKEN.to_string()),
            _ => None,
        })?;

        let possible_responses = self.possible_responses()?;
        let duplicate_responses = interaction
            .gap_texts
            .iter()
            .any(|gap_text| gap_text.match_max != 1);

        let validation = GapMatchValidationBuilder::new(
            interaction.gap_identifiers(),
            possible_responses.clone(),
        )
        .build(scoring, diagnostics);

        Ok(QuestionType::Clozeassociation(Clozeassociation {
            stimulus: marshal_content(&interaction.prompt)?,
            template,
            possible_responses: possible_responses.into_values().collect(),
            duplicate_responses: duplicate_responses.then_some(true),
            shuffle_options: interaction.shuffle.then_some(true),
            is_math: None,
            validation,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::templates::ResponseProcessingTemplate;
    use crate::namespaces::QName;
    use crate::qti::{
        BaseType, Cardinality, Element, Gap, GapText, ResponseDeclaration, ResponseValue,
    };

    fn gap(id: &str) -> Content {
        Content::Gap(Gap {
            identifier: id.to_string(),
            required: false,
        })
    }

    fn interaction() -> GapMatchInteraction {
        GapMatchInteraction {
            response_identifier: "RESPONSE".to_string(),
            shuffle: false,
            prompt: Vec::new(),
            gap_texts: ["winter", "summer"]
                .iter()
                .map(|word| GapText {
                    identifier: word.to_uppercase(),
                    match_max: 1,
                    content: vec![Content::text(*word)],
                })
                .collect(),
            gap_images: vec!["IMG".to_string()],
            content: vec![Content::Element(
                Element::new(QName::local("p"))
                    .with_child(Content::text("Cold "))
                    .with_child(gap("G1"))
                    .with_child(Content::text(", hot "))
                    .with_child(gap("G2")),
            )],
        }
    }

    #[test]
    fn test_map_gap_match() {
        let interaction = interaction();
        let declaration =
            ResponseDeclaration::new("RESPONSE", Cardinality::Multiple, BaseType::DirectedPair)
                .with_correct_value(ResponseValue::DirectedPair {
                    first: "WINTER".to_string(),
                    second: "G1".to_string(),
                })
                .with_correct_value(ResponseValue::DirectedPair {
                    first: "SUMMER".to_string(),
                    second: "G2".to_string(),
                });
        let template = ResponseProcessingTemplate::MatchCorrect;
        let mut diagnostics = Diagnostics::new();

        let question = GapMatchMapper::new(&interaction)
            .map(ScoringContext::new(Some(&declaration), Some(&template)), &mut diagnostics)
            .unwrap();

        match question {
            QuestionType::Clozeassociation(q) => {
                assert_eq!(q.template, "<p>Cold {{response}}, hot {{response}}</p>");
                assert_eq!(q.possible_responses, vec!["winter", "summer"]);
                assert_eq!(q.duplicate_responses, None);
                assert_eq!(
                    q.validation.unwrap().valid_response.value,
                    vec!["winter", "summer"]
                );
            }
            other => panic!("expected clozeassociation, got {other:?}"),
        }
        assert_eq!(
            diagnostics.messages(),
            vec!["Does not support <gapImg> on <gapMatchInteraction>. Ignoring <gapImg>"]
        );
    }
}
