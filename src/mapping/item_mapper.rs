//! Item mapping orchestration
//!
//! [`ItemMapper`] runs one QTI item through the whole pipeline: precondition
//! checks, template resolution, body filtering, interaction extraction and
//! construction of the target item with its questions.

use std::path::Path;

use indexmap::IndexSet;
use serde::Serialize;

use crate::config::MapperConfig;
use crate::diagnostics::{Diagnostics, MappingError};
use crate::documents::QtiDocument;
use crate::entities::{Item, Question};
use crate::error::Result;
use crate::qti::{collect_interactions, AssessmentItem, Content, Element, InteractionKind};

use super::builders::{BuildInput, ItemBuild, MergeOutcome, MergedItemBuilder, RegularItemBuilder};
use super::templates::resolve_template;

/// Result of mapping one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMapping {
    /// The mapped item
    pub item: Item,
    /// Questions referenced by the item, in order
    pub questions: Vec<Question>,
    /// WARNING messages in detection order
    pub warnings: Vec<String>,
}

impl ItemMapping {
    /// Split into item, questions and warnings
    pub fn into_parts(self) -> (Item, Vec<Question>, Vec<String>) {
        (self.item, self.questions, self.warnings)
    }
}

/// Maps QTI assessment items to items and questions
///
/// Every call works on its own state, so one mapper can be shared between
/// threads and reused for any number of documents.
///
/// ```rust,ignore
/// use qti_mapper::mapping::ItemMapper;
///
/// let mapping = ItemMapper::new().parse(&xml)?;
/// for warning in &mapping.warnings {
///     eprintln!("{}", warning);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ItemMapper {
    config: MapperConfig,
}

impl ItemMapper {
    /// Create a mapper with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Load and map an item from its XML
    pub fn parse(&self, xml: &str) -> Result<ItemMapping> {
        let document = QtiDocument::from_string_with_limits(xml, &self.config.limits)?;
        self.map_item(document.item())
    }

    /// Load and map an item from a file
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ItemMapping> {
        let document = QtiDocument::from_file(path, &self.config.limits)?;
        self.map_item(document.item())
    }

    /// Map an already loaded item
    pub fn map_item(&self, assessment_item: &AssessmentItem) -> Result<ItemMapping> {
        let span = tracing::debug_span!("map_item", item = %assessment_item.identifier);
        let _enter = span.enter();

        let mut diagnostics = Diagnostics::new();
        check_assessment_item(assessment_item, &mut diagnostics)?;

        let template = resolve_template(assessment_item.response_processing.as_ref(), &mut diagnostics);

        let mut filter = BodyFilter::default();
        let body = filter.filter(&assessment_item.item_body.content)?;
        filter.report(&mut diagnostics);

        let interactions = collect_interactions(&body);
        if interactions.is_empty() {
            return Err(MappingError::critical("No supported interactions could be found")
                .with_component("itemBody")
                .into());
        }
        self.config.limits.check_interactions(interactions.len())?;

        let input = BuildInput {
            item_identifier: &assessment_item.identifier,
            body: &body,
            interactions: &interactions,
            declarations: &assessment_item.response_declarations,
            template: template.as_ref(),
            max_combinations: self.config.limits.max_combinations,
        };

        let merged = MergedItemBuilder::new()
            .with_enabled(self.config.merge_interactions)
            .build(&input)?;
        let ItemBuild {
            mut item,
            mut questions,
            diagnostics: build_diagnostics,
        } = match merged {
            MergeOutcome::Applicable(build) => build,
            MergeOutcome::NotApplicable => {
                tracing::debug!("interactions not mergeable, mapping one question per interaction");
                RegularItemBuilder::new().build(&input)?
            }
        };
        diagnostics.extend(build_diagnostics);

        if let Some(title) = assessment_item.title.as_deref().filter(|t| !t.is_empty()) {
            item = item.with_description(title);
        }

        if filter.has_math {
            for question in &mut questions {
                if let Some(data) = question.data.math_support_mut() {
                    data.set_is_math(true);
                }
            }
        }

        tracing::debug!(
            questions = questions.len(),
            warnings = diagnostics.len(),
            "mapped item"
        );

        Ok(ItemMapping {
            item,
            questions,
            warnings: diagnostics.messages(),
        })
    }
}

/// Record the root level components that cannot be mapped.
///
/// Template declarations and template processing abort the mapping.
fn check_assessment_item(item: &AssessmentItem, diagnostics: &mut Diagnostics) -> Result<()> {
    if !item.outcome_declarations.is_empty() {
        diagnostics.warn_on(
            "outcomeDeclaration",
            "Ignoring <outcomeDeclaration> on <assessmentItem>. Generally we mapped <defaultValue> to 0",
        );
    }
    if !item.template_declarations.is_empty() {
        return Err(MappingError::critical(
            "Does not support <templateDeclaration> on <assessmentItem>. Ignoring <templateDeclaration>",
        )
        .with_component("templateDeclaration")
        .into());
    }
    if item.template_processing.is_some() {
        return Err(MappingError::critical(
            "Does not support <templateProcessing> on <assessmentItem>. Ignoring <templateProcessing>",
        )
        .with_component("templateProcessing")
        .into());
    }
    if !item.modal_feedbacks.is_empty() {
        diagnostics.warn_on("modalFeedback", "Ignoring <modalFeedback> on <assessmentItem>");
    }
    if !item.stylesheets.is_empty() {
        diagnostics.warn_on("stylesheet", "Ignoring <stylesheet> on <assessmentItem>");
    }
    Ok(())
}

/// Builds the filtered copy of an item body
#[derive(Debug, Default)]
struct BodyFilter {
    /// Names of removed elements, in the order first seen
    ignored: IndexSet<String>,
    /// Whether any MathML island was found
    has_math: bool,
}

impl BodyFilter {
    fn filter(&mut self, content: &[Content]) -> Result<Vec<Content>> {
        let mut filtered = Vec::with_capacity(content.len());

        for node in content {
            match node {
                Content::RubricBlock(_) => {
                    self.ignored.insert("rubricBlock".to_string());
                }
                Content::Element(element)
                    if InteractionKind::is_unsupported_interaction(element.local_name()) =>
                {
                    self.ignored.insert(element.local_name().to_string());
                }
                Content::Element(element) => {
                    filtered.push(Content::Element(Element {
                        qname: element.qname.clone(),
                        attributes: element.attributes.clone(),
                        children: self.filter(&element.children)?,
                    }));
                }
                Content::Math(math) => {
                    let mut math = math.clone();
                    math.normalize()?;
                    self.has_math = true;
                    filtered.push(Content::Math(math));
                }
                Content::Interaction(interaction) => {
                    let mut interaction = interaction.clone();
                    for block in interaction.content_blocks_mut() {
                        let content = self.filter(block.as_slice())?;
                        *block = content;
                    }
                    filtered.push(Content::Interaction(interaction));
                }
                Content::Text(_) | Content::Gap(_) => filtered.push(node.clone()),
            }
        }

        Ok(filtered)
    }

    /// One WARNING per removed element name
    fn report(&self, diagnostics: &mut Diagnostics) {
        for name in &self.ignored {
            diagnostics.warn_on(
                name,
                format!("Does not support <{}>. Ignoring <{}>", name, name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::namespaces::{QName, MATHML_NAMESPACE};
    use crate::qti::{ExtendedTextInteraction, Interaction, MathContent, ModalFeedback};

    fn essay(id: &str) -> Content {
        Content::Interaction(Interaction::ExtendedText(ExtendedTextInteraction::new(id)))
    }

    fn rubric() -> Content {
        Content::RubricBlock(Element::new(QName::local("rubricBlock")).with_child(Content::text("Scorer notes")))
    }

    #[test]
    fn test_rubric_blocks_warn_once() {
        let mut item = AssessmentItem::new("item");
        item.item_body.content = vec![
            rubric(),
            Content::Element(Element::new(QName::local("div")).with_child(rubric())),
            essay("R1"),
        ];

        let mapping = ItemMapper::new().map_item(&item).unwrap();
        assert_eq!(
            mapping.warnings,
            vec!["Does not support <rubricBlock>. Ignoring <rubricBlock>"]
        );
        assert_eq!(
            mapping.item.content,
            r#"<div></div><span class="learnosity-response question-item_R1"></span>"#
        );
    }

    #[test]
    fn test_unsupported_interactions_removed() {
        let mut item = AssessmentItem::new("item");
        item.item_body.content = vec![
            Content::Element(Element::new(QName::local("orderInteraction")).with_attribute("responseIdentifier", "A")),
            Content::Element(Element::new(QName::local("orderInteraction")).with_attribute("responseIdentifier", "B")),
            essay("R1"),
        ];

        let mapping = ItemMapper::new().map_item(&item).unwrap();
        assert_eq!(
            mapping.warnings,
            vec!["Does not support <orderInteraction>. Ignoring <orderInteraction>"]
        );
        assert_eq!(mapping.questions.len(), 1);
    }

    #[test]
    fn test_no_interactions_is_critical() {
        let mut item = AssessmentItem::new("item");
        item.item_body.content = vec![Content::text("Nothing to answer")];

        let err = ItemMapper::new().map_item(&item).unwrap_err();
        assert!(err.is_critical());
        assert_eq!(err.to_string(), "No supported interactions could be found");
    }

    #[test]
    fn test_precondition_warnings_in_order() {
        let mut item = AssessmentItem::new("item");
        item.modal_feedbacks.push(ModalFeedback {
            identifier: "FB".to_string(),
            outcome_identifier: "FEEDBACK".to_string(),
            content: Vec::new(),
        });
        item.item_body.content = vec![essay("R1")];

        let mapping = ItemMapper::new().map_item(&item).unwrap();
        assert_eq!(mapping.warnings, vec!["Ignoring <modalFeedback> on <assessmentItem>"]);
    }

    #[test]
    fn test_interaction_limit() {
        let mut item = AssessmentItem::new("item");
        item.item_body.content = vec![essay("R1"), essay("R2"), essay("R3")];
        let mut config = MapperConfig::new();
        config.limits.max_interactions = 2;

        let err = ItemMapper::new().with_config(config).map_item(&item).unwrap_err();
        assert!(matches!(err, Error::LimitExceeded(_)));
    }

    #[test]
    fn test_math_flags_questions() {
        let math = Element::new(QName::namespaced(MATHML_NAMESPACE, "math"))
            .with_child(Content::Element(Element::new(QName::namespaced(MATHML_NAMESPACE, "mn")).with_child(Content::text("2"))));
        let mut item = AssessmentItem::new("item");
        item.item_body.content = vec![
            Content::Math(MathContent::new(math, "<m:math><m:mn>2</m:mn></m:math>")),
            essay("R1"),
        ];

        let mapping = ItemMapper::new().map_item(&item).unwrap();
        assert!(mapping.item.content.starts_with("<math><mn>2</mn></math>"));
        let mut data = mapping.questions[0].data.clone();
        assert!(data.math_support_mut().is_some_and(|q| q.is_math()));
    }
}
