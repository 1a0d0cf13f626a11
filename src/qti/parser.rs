//! Building the typed item tree from QTI XML
//!
//! The XML is parsed with `roxmltree`; this module walks the resulting DOM
//! once and produces an owned [`AssessmentItem`]. Structural problems that a
//! schema validator would reject (wrong root, missing identifiers, malformed
//! values) are reported as [`Error::Document`].

use roxmltree::Node;

use crate::error::{Error, Result};
use crate::limits::Limits;
use crate::names::validate_identifier;
use crate::namespaces::QName;

use super::content::{Content, Element, Gap, MathContent};
use super::declarations::{
    parse_decimal, BaseType, Cardinality, MapEntry, Mapping, OutcomeDeclaration,
    ResponseDeclaration, ResponseProcessing, ResponseValue, TemplateDeclaration,
    TemplateProcessing,
};
use super::interactions::{
    ChoiceInteraction, ExtendedTextInteraction, GapMatchInteraction, GapText, InlineChoice,
    InlineChoiceInteraction, Interaction, InteractionKind, SimpleChoice, TextEntryInteraction,
    TextFormat,
};
use super::item::{AssessmentItem, ItemBody, ModalFeedback, Stylesheet};

/// Parse a complete `<assessmentItem>` document
pub fn parse_assessment_item(xml: &str, limits: &Limits) -> Result<AssessmentItem> {
    limits.check_xml_size(xml.len())?;
    let doc = roxmltree::Document::parse(xml)?;
    let root = doc.root_element();
    if root.tag_name().name() != "assessmentItem" {
        return Err(Error::Document(format!(
            "Expected <assessmentItem> as document root, found <{}>",
            root.tag_name().name()
        )));
    }

    Parser { source: xml, limits }.assessment_item(root)
}

/// Parse a markup fragment (e.g. an HTML stimulus) into content nodes
pub fn parse_fragment(markup: &str, limits: &Limits) -> Result<Vec<Content>> {
    limits.check_xml_size(markup.len())?;
    let wrapped = format!("<fragment>{}</fragment>", markup);
    let doc = roxmltree::Document::parse(&wrapped)?;

    Parser {
        source: &wrapped,
        limits,
    }
    .content(doc.root_element(), 1)
}

struct Parser<'s> {
    source: &'s str,
    limits: &'s Limits,
}

impl<'s> Parser<'s> {
    fn assessment_item(&self, node: Node) -> Result<AssessmentItem> {
        let mut item = AssessmentItem::new(identifier_attribute(node, "identifier")?);
        item.title = node
            .attribute("title")
            .filter(|title| !title.trim().is_empty())
            .map(str::to_string);
        item.label = node.attribute("label").map(str::to_string);
        item.adaptive = bool_attribute(node, "adaptive", false)?;
        item.time_dependent = bool_attribute(node, "timeDependent", false)?;

        for child in elements(node) {
            match child.tag_name().name() {
                "responseDeclaration" => {
                    let declaration = response_declaration(child)?;
                    item.response_declarations
                        .insert(declaration.identifier.clone(), declaration);
                }
                "outcomeDeclaration" => item.outcome_declarations.push(outcome_declaration(child)?),
                "templateDeclaration" => {
                    item.template_declarations.push(template_declaration(child)?)
                }
                "templateProcessing" => {
                    item.template_processing = Some(TemplateProcessing {
                        rules: element_names(child),
                    })
                }
                "stylesheet" => item.stylesheets.push(Stylesheet {
                    href: required_attribute(child, "href")?.to_string(),
                    media_type: child.attribute("type").map(str::to_string),
                }),
                "itemBody" => item.item_body = ItemBody::new(self.content(child, 1)?),
                "responseProcessing" => item.response_processing = Some(response_processing(child)),
                "modalFeedback" => item.modal_feedbacks.push(ModalFeedback {
                    identifier: required_attribute(child, "identifier")?.to_string(),
                    outcome_identifier: required_attribute(child, "outcomeIdentifier")?
                        .to_string(),
                    content: self.content(child, 1)?,
                }),
                other => tracing::debug!(element = other, "skipping unknown <assessmentItem> child"),
            }
        }

        Ok(item)
    }

    fn content(&self, parent: Node, depth: usize) -> Result<Vec<Content>> {
        self.limits.check_xml_depth(depth)?;

        let mut content = Vec::new();
        for child in parent.children() {
            if child.is_element() {
                content.push(self.content_node(child, depth + 1)?);
            } else if let Some(text) = text_node(child) {
                content.push(Content::Text(text.to_string()));
            }
        }
        Ok(content)
    }

    fn content_node(&self, node: Node, depth: usize) -> Result<Content> {
        let name = node.tag_name().name();

        if let Some(kind) = InteractionKind::from_tag_name(name) {
            return Ok(Content::Interaction(self.interaction(kind, node, depth)?));
        }

        match name {
            "math" => {
                let element = self.element(node, depth)?;
                let source = &self.source[node.range()];
                Ok(Content::Math(MathContent::new(element, source)))
            }
            "rubricBlock" => Ok(Content::RubricBlock(self.element(node, depth)?)),
            "gap" => Ok(Content::Gap(Gap {
                identifier: identifier_attribute(node, "identifier")?,
                required: bool_attribute(node, "required", false)?,
            })),
            _ => Ok(Content::Element(self.element(node, depth)?)),
        }
    }

    fn element(&self, node: Node, depth: usize) -> Result<Element> {
        let tag = node.tag_name();
        let mut element = Element::new(QName::from_parts(tag.namespace(), tag.name()));
        for attribute in node.attributes() {
            element.attributes.insert(
                QName::from_parts(attribute.namespace(), attribute.name()),
                attribute.value().to_string(),
            );
        }
        element.children = self.content(node, depth)?;
        Ok(element)
    }

    fn interaction(&self, kind: InteractionKind, node: Node, depth: usize) -> Result<Interaction> {
        let response_identifier = identifier_attribute(node, "responseIdentifier")?;

        Ok(match kind {
            InteractionKind::Choice => {
                Interaction::Choice(self.choice_interaction(node, response_identifier, depth)?)
            }
            InteractionKind::InlineChoice => Interaction::InlineChoice(
                self.inline_choice_interaction(node, response_identifier, depth)?,
            ),
            InteractionKind::TextEntry => Interaction::TextEntry(TextEntryInteraction {
                response_identifier,
                expected_length: u32_attribute(node, "expectedLength")?,
                pattern_mask: node.attribute("patternMask").map(str::to_string),
                placeholder_text: node.attribute("placeholderText").map(str::to_string),
            }),
            InteractionKind::ExtendedText => Interaction::ExtendedText(
                self.extended_text_interaction(node, response_identifier, depth)?,
            ),
            InteractionKind::GapMatch => Interaction::GapMatch(
                self.gap_match_interaction(node, response_identifier, depth)?,
            ),
        })
    }

    fn choice_interaction(
        &self,
        node: Node,
        response_identifier: String,
        depth: usize,
    ) -> Result<ChoiceInteraction> {
        let mut interaction = ChoiceInteraction {
            response_identifier,
            shuffle: bool_attribute(node, "shuffle", false)?,
            max_choices: u32_attribute(node, "maxChoices")?.unwrap_or(1),
            min_choices: u32_attribute(node, "minChoices")?.unwrap_or(0),
            prompt: Vec::new(),
            choices: Vec::new(),
        };

        for child in elements(node) {
            match child.tag_name().name() {
                "prompt" => interaction.prompt = self.content(child, depth + 1)?,
                "simpleChoice" => interaction.choices.push(SimpleChoice {
                    identifier: identifier_attribute(child, "identifier")?,
                    fixed: bool_attribute(child, "fixed", false)?,
                    content: self.content(child, depth + 1)?,
                }),
                _ => {}
            }
        }
        Ok(interaction)
    }

    fn inline_choice_interaction(
        &self,
        node: Node,
        response_identifier: String,
        depth: usize,
    ) -> Result<InlineChoiceInteraction> {
        let mut interaction = InlineChoiceInteraction {
            response_identifier,
            shuffle: bool_attribute(node, "shuffle", false)?,
            required: bool_attribute(node, "required", false)?,
            choices: Vec::new(),
        };

        for child in elements(node).filter(|c| c.tag_name().name() == "inlineChoice") {
            interaction.choices.push(InlineChoice {
                identifier: identifier_attribute(child, "identifier")?,
                content: self.content(child, depth + 1)?,
            });
        }
        Ok(interaction)
    }

    fn extended_text_interaction(
        &self,
        node: Node,
        response_identifier: String,
        depth: usize,
    ) -> Result<ExtendedTextInteraction> {
        let format = match node.attribute("format") {
            Some(value) => Some(TextFormat::from_attribute(value).ok_or_else(|| {
                Error::Document(format!("Invalid format '{}' on <extendedTextInteraction>", value))
            })?),
            None => None,
        };

        let mut interaction = ExtendedTextInteraction {
            label: node.attribute("label").map(str::to_string),
            format,
            expected_length: u32_attribute(node, "expectedLength")?,
            expected_lines: u32_attribute(node, "expectedLines")?,
            placeholder_text: node.attribute("placeholderText").map(str::to_string),
            pattern_mask: node.attribute("patternMask").map(str::to_string),
            min_strings: u32_attribute(node, "minStrings")?.unwrap_or(0),
            max_strings: u32_attribute(node, "maxStrings")?,
            ..ExtendedTextInteraction::new(response_identifier)
        };

        if let Some(prompt) = elements(node).find(|c| c.tag_name().name() == "prompt") {
            interaction.prompt = self.content(prompt, depth + 1)?;
        }
        Ok(interaction)
    }

    fn gap_match_interaction(
        &self,
        node: Node,
        response_identifier: String,
        depth: usize,
    ) -> Result<GapMatchInteraction> {
        let mut interaction = GapMatchInteraction {
            response_identifier,
            shuffle: bool_attribute(node, "shuffle", false)?,
            prompt: Vec::new(),
            gap_texts: Vec::new(),
            gap_images: Vec::new(),
            content: Vec::new(),
        };

        for child in node.children() {
            if !child.is_element() {
                if let Some(text) = text_node(child) {
                    interaction.content.push(Content::Text(text.to_string()));
                }
                continue;
            }
            match child.tag_name().name() {
                "prompt" => interaction.prompt = self.content(child, depth + 1)?,
                "gapText" => interaction.gap_texts.push(GapText {
                    identifier: identifier_attribute(child, "identifier")?,
                    match_max: u32_attribute(child, "matchMax")?.unwrap_or(0),
                    content: self.content(child, depth + 1)?,
                }),
                "gapImg" => interaction
                    .gap_images
                    .push(identifier_attribute(child, "identifier")?),
                _ => interaction.content.push(self.content_node(child, depth + 1)?),
            }
        }
        Ok(interaction)
    }
}

fn response_declaration(node: Node) -> Result<ResponseDeclaration> {
    let mut declaration = ResponseDeclaration {
        identifier: identifier_attribute(node, "identifier")?,
        cardinality: cardinality_attribute(node)?,
        base_type: node.attribute("baseType").map(BaseType::from_attribute),
        correct_response: Vec::new(),
        mapping: None,
    };

    for child in elements(node) {
        match child.tag_name().name() {
            "correctResponse" => {
                for value in elements(child).filter(|v| v.tag_name().name() == "value") {
                    declaration.correct_response.push(ResponseValue::parse(
                        declaration.base_type.as_ref(),
                        value.text().unwrap_or(""),
                    )?);
                }
            }
            "mapping" => declaration.mapping = Some(mapping(child)?),
            _ => {}
        }
    }
    Ok(declaration)
}

fn mapping(node: Node) -> Result<Mapping> {
    let decimal = |name: &str| node.attribute(name).map(parse_decimal).transpose();

    let mut mapping = Mapping {
        default_value: decimal("defaultValue")?.unwrap_or_default(),
        lower_bound: decimal("lowerBound")?,
        upper_bound: decimal("upperBound")?,
        entries: Vec::new(),
    };

    for entry in elements(node).filter(|e| e.tag_name().name() == "mapEntry") {
        mapping.entries.push(MapEntry {
            map_key: required_attribute(entry, "mapKey")?.to_string(),
            mapped_value: parse_decimal(required_attribute(entry, "mappedValue")?)?,
            case_sensitive: bool_attribute(entry, "caseSensitive", true)?,
        });
    }
    Ok(mapping)
}

fn outcome_declaration(node: Node) -> Result<OutcomeDeclaration> {
    let default_values = elements(node)
        .filter(|c| c.tag_name().name() == "defaultValue")
        .flat_map(elements)
        .filter_map(|value| value.text())
        .map(|text| text.trim().to_string())
        .collect();

    Ok(OutcomeDeclaration {
        identifier: identifier_attribute(node, "identifier")?,
        cardinality: cardinality_attribute(node)?,
        base_type: node.attribute("baseType").map(BaseType::from_attribute),
        default_values,
    })
}

fn template_declaration(node: Node) -> Result<TemplateDeclaration> {
    Ok(TemplateDeclaration {
        identifier: identifier_attribute(node, "identifier")?,
        cardinality: cardinality_attribute(node)?,
        base_type: node.attribute("baseType").map(BaseType::from_attribute),
    })
}

fn response_processing(node: Node) -> ResponseProcessing {
    ResponseProcessing {
        template: non_empty_attribute(node, "template"),
        template_location: non_empty_attribute(node, "templateLocation"),
        response_rules: element_names(node),
    }
}

// ============================================================================
// Attribute helpers
// ============================================================================

fn elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

fn element_names(node: Node) -> Vec<String> {
    elements(node)
        .map(|child| child.tag_name().name().to_string())
        .collect()
}

// Parents whose whitespace-only children are layout, never content
const CONTAINER_ELEMENTS: &[&str] = &[
    "itemBody",
    "choiceInteraction",
    "inlineChoiceInteraction",
    "gapMatchInteraction",
    "extendedTextInteraction",
    "ul",
    "ol",
    "dl",
    "table",
    "thead",
    "tbody",
    "tfoot",
    "tr",
    "colgroup",
];

const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "blockquote",
    "caption",
    "dd",
    "div",
    "dl",
    "dt",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "table",
    "ul",
    "prompt",
    "simpleChoice",
    "gapText",
    "gapImg",
    "rubricBlock",
    "choiceInteraction",
    "extendedTextInteraction",
    "gapMatchInteraction",
    "orderInteraction",
    "matchInteraction",
    "associateInteraction",
    "hotspotInteraction",
    "sliderInteraction",
    "uploadInteraction",
    "drawingInteraction",
    "mediaInteraction",
    "feedbackBlock",
];

/// Text of a text node, or `None` when the node is insignificant layout.
///
/// Whitespace-only text survives only between two inline siblings of a
/// mixed content parent, so `<b>a</b> <i>b</i>` keeps its space.
fn text_node<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    if !node.is_text() {
        return None;
    }
    let text = node.text()?;
    if !text.trim().is_empty() {
        return Some(text);
    }

    let in_container = node
        .parent()
        .is_some_and(|parent| CONTAINER_ELEMENTS.contains(&parent.tag_name().name()));
    let inline = |sibling: Option<Node>| {
        sibling.is_some_and(|s| !s.is_element() || !BLOCK_ELEMENTS.contains(&s.tag_name().name()))
    };

    if !in_container && inline(node.prev_sibling()) && inline(node.next_sibling()) {
        Some(text)
    } else {
        None
    }
}

fn required_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name).ok_or_else(|| {
        Error::Document(format!(
            "Missing required attribute '{}' on <{}>",
            name,
            node.tag_name().name()
        ))
    })
}

fn non_empty_attribute(node: Node, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn identifier_attribute(node: Node, name: &str) -> Result<String> {
    let value = required_attribute(node, name)?;
    validate_identifier(value, name, node.tag_name().name())?;
    Ok(value.to_string())
}

fn cardinality_attribute(node: Node) -> Result<Cardinality> {
    Ok(node
        .attribute("cardinality")
        .map(Cardinality::from_attribute)
        .transpose()?
        .unwrap_or_default())
}

fn bool_attribute(node: Node, name: &str, default: bool) -> Result<bool> {
    match node.attribute(name) {
        None => Ok(default),
        Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(Error::Document(format!(
            "Invalid boolean '{}' for '{}' on <{}>",
            other,
            name,
            node.tag_name().name()
        ))),
    }
}

fn u32_attribute(node: Node, name: &str) -> Result<Option<u32>> {
    node.attribute(name)
        .map(|value| {
            value.trim().parse::<u32>().map_err(|_| {
                Error::Document(format!(
                    "Invalid number '{}' for '{}' on <{}>",
                    value,
                    name,
                    node.tag_name().name()
                ))
            })
        })
        .transpose()
}
