use crate::diagnostics::Diagnostics;
use crate::entities::question_types::{Clozedropdown, Clozetext};
use crate::entities::{Item, Question, QuestionType, Validation};
use crate::error::Result;
use crate::mapping::combinations::bounded_cartesian_product;
use crate::mapping::interactions::{InlineChoiceMapper, TextEntryMapper, RESPONSE_TOKEN};
use crate::mapping::validation::{
    has_correct_response, InlineChoiceValidationBuilder, ScoringMethod,
    TextEntryValidationBuilder, ValidationBuilder,
};
use crate::qti::markup::marshal_content_with;
use crate::qti::{Content, InlineChoiceInteraction, Interaction, TextEntryInteraction};

use super::{response_placeholder, BuildInput, ItemBuild, MergeOutcome};

/// Interactions that can share one cloze question, grouped by kind
enum Mergeable<'a> {
    InlineChoice(Vec<&'a InlineChoiceInteraction>),
    TextEntry(Vec<&'a TextEntryInteraction>),
}

impl<'a> Mergeable<'a> {
    /// Group the interactions if they all have the same mergeable kind
    fn classify(interactions: &[&'a Interaction]) -> Option<Self> {
        match interactions.first()? {
            Interaction::InlineChoice(_) => interactions
                .iter()
                .copied()
                .map(|interaction| match interaction {
                    Interaction::InlineChoice(i) => Some(i),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Mergeable::InlineChoice),
            Interaction::TextEntry(_) => interactions
                .iter()
                .copied()
                .map(|interaction| match interaction {
                    Interaction::TextEntry(i) => Some(i),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(Mergeable::TextEntry),
            Interaction::Choice(_) | Interaction::ExtendedText(_) | Interaction::GapMatch(_) => {
                None
            }
        }
    }
}

/// All interactions of the item in one cloze question.
///
/// Applicable when every interaction is an `inlineChoiceInteraction`, or
/// every interaction is a `textEntryInteraction`. The whole body becomes the
/// question template with a response token in place of each interaction,
/// and every interaction is one response slot of the shared validation.
#[derive(Debug, Clone, Copy)]
pub struct MergedItemBuilder {
    enabled: bool,
}

impl Default for MergedItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MergedItemBuilder {
    /// Create an enabled builder
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Enable or disable merging
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Merge the interactions if they form one scored unit
    pub fn build(&self, input: &BuildInput<'_>) -> Result<MergeOutcome> {
        if !self.enabled {
            return Ok(MergeOutcome::NotApplicable);
        }
        let Some(mergeable) = Mergeable::classify(input.interactions) else {
            return Ok(MergeOutcome::NotApplicable);
        };

        let mut diagnostics = Diagnostics::new();
        let template = marshal_content_with(input.body, &|node| match node {
            Content::Interaction(_) => Some(RESPONSE_TOKEN.to_string()),
            _ => None,
        })?;

        let data = match mergeable {
            Mergeable::InlineChoice(interactions) => {
                let slots: Vec<_> = interactions
                    .iter()
                    .map(|i| {
                        let builder: Box<dyn ValidationBuilder> =
                            Box::new(InlineChoiceValidationBuilder::new(&i.choices));
                        (i.response_identifier.as_str(), builder)
                    })
                    .collect();

                QuestionType::Clozedropdown(Clozedropdown {
                    stimulus: String::new(),
                    template,
                    possible_responses: interactions
                        .iter()
                        .map(|i| InlineChoiceMapper::new(i).possible_responses())
                        .collect(),
                    shuffle_options: interactions.iter().any(|i| i.shuffle).then_some(true),
                    is_math: None,
                    validation: merged_validation(&slots, input, &mut diagnostics),
                })
            }
            Mergeable::TextEntry(interactions) => {
                for interaction in &interactions {
                    TextEntryMapper::new(interaction).check_attributes(&mut diagnostics);
                }
                let slots: Vec<_> = interactions
                    .iter()
                    .map(|i| {
                        let builder: Box<dyn ValidationBuilder> =
                            Box::new(TextEntryValidationBuilder);
                        (i.response_identifier.as_str(), builder)
                    })
                    .collect();

                QuestionType::Clozetext(Clozetext {
                    stimulus: String::new(),
                    template,
                    max_length: interactions.iter().filter_map(|i| i.expected_length).max(),
                    is_math: None,
                    validation: merged_validation(&slots, input, &mut diagnostics),
                })
            }
        };

        let reference = format!("{}_merged", input.item_identifier);
        tracing::debug!(
            item = input.item_identifier,
            question_type = data.type_name(),
            interactions = input.interactions.len(),
            "merged interactions into one question"
        );

        Ok(MergeOutcome::Applicable(ItemBuild {
            item: Item::new(
                input.item_identifier,
                vec![reference.clone()],
                response_placeholder(&reference),
            ),
            questions: vec![Question::new(reference, data)],
            diagnostics,
        }))
    }
}

/// Shared validation over one slot per interaction.
///
/// Interactions without a declaration or without correct values contribute
/// an empty value so slots stay aligned with the template tokens. When no
/// interaction has a declaration the question stays unscored.
fn merged_validation(
    slots: &[(&str, Box<dyn ValidationBuilder>)],
    input: &BuildInput<'_>,
    diagnostics: &mut Diagnostics,
) -> Option<Validation> {
    let template = input.template?;
    if !slots
        .iter()
        .any(|(response_identifier, _)| input.declarations.contains_key(*response_identifier))
    {
        return None;
    }

    match ScoringMethod::resolve(template, diagnostics)? {
        ScoringMethod::MatchCorrect => {
            let mut values = Vec::with_capacity(slots.len());
            for (response_identifier, builder) in slots {
                let slot = match input.declarations.get(*response_identifier) {
                    Some(declaration) => {
                        if has_correct_response(declaration, diagnostics) {
                            builder.correct_slots(declaration, diagnostics).concat()
                        } else {
                            Vec::new()
                        }
                    }
                    None => {
                        diagnostics.warn_on(
                            "responseDeclaration",
                            format!(
                                "No <responseDeclaration> for '{}'. Mapped to an empty value",
                                response_identifier
                            ),
                        );
                        Vec::new()
                    }
                };
                values.push(if slot.is_empty() { vec![String::new()] } else { slot });
            }
            Validation::from_combinations(bounded_cartesian_product(
                &values,
                input.max_combinations,
                diagnostics,
            ))
        }
        ScoringMethod::MapResponse => Some(Validation::placeholder()),
    }
}
