use crate::diagnostics::Diagnostics;
use crate::entities::{Item, Question};
use crate::error::Result;
use crate::mapping::interactions::{map_interaction, ScoringContext};
use crate::qti::markup::marshal_content_with;
use crate::qti::Content;

use super::{question_reference, response_placeholder, BuildInput, ItemBuild};

/// One question per interaction.
///
/// The item content is the body with each interaction replaced by the
/// placeholder of its question.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularItemBuilder;

impl RegularItemBuilder {
    /// Create the builder
    pub fn new() -> Self {
        Self
    }

    /// Map every interaction and lay out the item
    pub fn build(&self, input: &BuildInput<'_>) -> Result<ItemBuild> {
        let mut diagnostics = Diagnostics::new();
        let mut questions = Vec::with_capacity(input.interactions.len());

        for interaction in input.interactions {
            let response_identifier = interaction.response_identifier();
            let scoring = ScoringContext::new(
                input.declarations.get(response_identifier),
                input.template,
            )
            .with_max_combinations(input.max_combinations);
            let data = map_interaction(interaction, scoring, &mut diagnostics)?;
            questions.push(Question::new(
                question_reference(input.item_identifier, response_identifier),
                data,
            ));
        }

        let content = marshal_content_with(input.body, &|node| match node {
            Content::Interaction(interaction) => Some(response_placeholder(&question_reference(
                input.item_identifier,
                interaction.response_identifier(),
            ))),
            _ => None,
        })?;

        let references = questions.iter().map(|q| q.reference.clone()).collect();
        Ok(ItemBuild {
            item: Item::new(input.item_identifier, references, content),
            questions,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    use crate::namespaces::QName;
    use crate::qti::{Element, ExtendedTextInteraction, Interaction};

    #[test]
    fn test_one_question_per_interaction() {
        let essay = |id: &str| Content::Interaction(Interaction::ExtendedText(ExtendedTextInteraction::new(id)));
        let body = vec![
            Content::Element(Element::new(QName::local("p")).with_child(Content::text("Intro"))),
            essay("Q1"),
            essay("Q2"),
        ];
        let interactions: Vec<&Interaction> = body.iter().filter_map(Content::as_interaction).collect();
        let declarations = IndexMap::new();
        let input = BuildInput {
            item_identifier: "item",
            body: &body,
            interactions: &interactions,
            declarations: &declarations,
            template: None,
            max_combinations: 16,
        };

        let build = RegularItemBuilder::new().build(&input).unwrap();
        assert_eq!(build.item.questions, vec!["item_Q1", "item_Q2"]);
        assert_eq!(
            build.item.content,
            concat!(
                "<p>Intro</p>",
                r#"<span class="learnosity-response question-item_Q1"></span>"#,
                r#"<span class="learnosity-response question-item_Q2"></span>"#
            )
        );
        assert_eq!(build.questions[1].reference, "item_Q2");
        assert!(build.diagnostics.is_empty());
    }
}
