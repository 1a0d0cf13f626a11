//! Supported QTI interactions
//!
//! The set of interactions the mapper understands is closed:
//! [`InteractionKind`] enumerates it and [`Interaction`] carries the typed
//! attributes of each kind. Adding a kind means every `match` over these
//! enums has to be updated.

use std::fmt;

use super::content::{Content, Gap};

/// QTI interaction elements that exist in the format but are not mapped
pub const UNSUPPORTED_INTERACTIONS: &[&str] = &[
    "associateInteraction",
    "customInteraction",
    "drawingInteraction",
    "endAttemptInteraction",
    "graphicAssociateInteraction",
    "graphicGapMatchInteraction",
    "graphicOrderInteraction",
    "hotspotInteraction",
    "hottextInteraction",
    "matchInteraction",
    "mediaInteraction",
    "orderInteraction",
    "positionObjectInteraction",
    "selectPointInteraction",
    "sliderInteraction",
    "uploadInteraction",
];

/// Kind of a supported interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// `<choiceInteraction>`
    Choice,
    /// `<inlineChoiceInteraction>`
    InlineChoice,
    /// `<textEntryInteraction>`
    TextEntry,
    /// `<extendedTextInteraction>`
    ExtendedText,
    /// `<gapMatchInteraction>`
    GapMatch,
}

impl InteractionKind {
    /// All supported kinds
    pub const ALL: [InteractionKind; 5] = [
        InteractionKind::Choice,
        InteractionKind::InlineChoice,
        InteractionKind::TextEntry,
        InteractionKind::ExtendedText,
        InteractionKind::GapMatch,
    ];

    /// The QTI element name
    pub fn tag_name(&self) -> &'static str {
        match self {
            InteractionKind::Choice => "choiceInteraction",
            InteractionKind::InlineChoice => "inlineChoiceInteraction",
            InteractionKind::TextEntry => "textEntryInteraction",
            InteractionKind::ExtendedText => "extendedTextInteraction",
            InteractionKind::GapMatch => "gapMatchInteraction",
        }
    }

    /// Classify a QTI element name
    pub fn from_tag_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag_name() == name)
    }

    /// Check if the element name is a known but unsupported interaction
    pub fn is_unsupported_interaction(name: &str) -> bool {
        UNSUPPORTED_INTERACTIONS.contains(&name)
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// `<simpleChoice>`
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleChoice {
    /// Choice identifier
    pub identifier: String,
    /// Whether the choice keeps its position when shuffling
    pub fixed: bool,
    /// Choice content
    pub content: Vec<Content>,
}

/// `<choiceInteraction>`
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceInteraction {
    /// Response identifier
    pub response_identifier: String,
    /// Shuffle the choices
    pub shuffle: bool,
    /// Maximum number of selectable choices, 0 means unlimited
    pub max_choices: u32,
    /// Minimum number of choices to select
    pub min_choices: u32,
    /// Prompt content
    pub prompt: Vec<Content>,
    /// Choices in document order
    pub choices: Vec<SimpleChoice>,
}

/// `<inlineChoice>`
#[derive(Debug, Clone, PartialEq)]
pub struct InlineChoice {
    /// Choice identifier
    pub identifier: String,
    /// Choice content
    pub content: Vec<Content>,
}

/// `<inlineChoiceInteraction>`
#[derive(Debug, Clone, PartialEq)]
pub struct InlineChoiceInteraction {
    /// Response identifier
    pub response_identifier: String,
    /// Shuffle the choices
    pub shuffle: bool,
    /// Whether an answer is required
    pub required: bool,
    /// Choices in document order
    pub choices: Vec<InlineChoice>,
}

/// `<textEntryInteraction>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntryInteraction {
    /// Response identifier
    pub response_identifier: String,
    /// Expected number of characters
    pub expected_length: Option<u32>,
    /// Regular expression the answer must match
    pub pattern_mask: Option<String>,
    /// Placeholder shown in the empty field
    pub placeholder_text: Option<String>,
}

/// Value of the `format` attribute of `<extendedTextInteraction>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Plain text
    Plain,
    /// Preformatted text
    PreFormatted,
    /// XHTML rich text
    Xhtml,
}

impl TextFormat {
    /// Parse from the attribute value
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "plain" => Some(TextFormat::Plain),
            "preFormatted" => Some(TextFormat::PreFormatted),
            "xhtml" => Some(TextFormat::Xhtml),
            _ => None,
        }
    }

    /// Get as attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextFormat::Plain => "plain",
            TextFormat::PreFormatted => "preFormatted",
            TextFormat::Xhtml => "xhtml",
        }
    }
}

/// `<extendedTextInteraction>`
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedTextInteraction {
    /// Response identifier
    pub response_identifier: String,
    /// Label attribute
    pub label: Option<String>,
    /// Prompt content
    pub prompt: Vec<Content>,
    /// Text format, `None` when the attribute is absent
    pub format: Option<TextFormat>,
    /// Expected number of characters
    pub expected_length: Option<u32>,
    /// Expected number of lines
    pub expected_lines: Option<u32>,
    /// Placeholder shown in the empty field
    pub placeholder_text: Option<String>,
    /// Regular expression the answer must match
    pub pattern_mask: Option<String>,
    /// Minimum number of separate strings
    pub min_strings: u32,
    /// Maximum number of separate strings
    pub max_strings: Option<u32>,
}

impl ExtendedTextInteraction {
    /// Create an interaction with no optional attributes set
    pub fn new(response_identifier: impl Into<String>) -> Self {
        Self {
            response_identifier: response_identifier.into(),
            label: None,
            prompt: Vec::new(),
            format: None,
            expected_length: None,
            expected_lines: None,
            placeholder_text: None,
            pattern_mask: None,
            min_strings: 0,
            max_strings: None,
        }
    }

    /// The effective text format; a missing attribute is read as rich text
    pub fn text_format(&self) -> TextFormat {
        self.format.unwrap_or(TextFormat::Xhtml)
    }
}

/// `<gapText>`
#[derive(Debug, Clone, PartialEq)]
pub struct GapText {
    /// Choice identifier
    pub identifier: String,
    /// How many gaps this choice may fill, 0 means unlimited
    pub match_max: u32,
    /// Choice content
    pub content: Vec<Content>,
}

/// `<gapMatchInteraction>`
#[derive(Debug, Clone, PartialEq)]
pub struct GapMatchInteraction {
    /// Response identifier
    pub response_identifier: String,
    /// Shuffle the choices
    pub shuffle: bool,
    /// Prompt content
    pub prompt: Vec<Content>,
    /// Text choices in document order
    pub gap_texts: Vec<GapText>,
    /// Identifiers of `<gapImg>` choices, which cannot be mapped
    pub gap_images: Vec<String>,
    /// Block content holding the gaps
    pub content: Vec<Content>,
}

impl GapMatchInteraction {
    /// Gaps in document order
    pub fn gaps(&self) -> Vec<&Gap> {
        let mut gaps = Vec::new();
        collect_gaps(&self.content, &mut gaps);
        gaps
    }

    /// Gap identifiers in document order
    pub fn gap_identifiers(&self) -> Vec<&str> {
        self.gaps().into_iter().map(|gap| gap.identifier.as_str()).collect()
    }
}

fn collect_gaps<'a>(content: &'a [Content], gaps: &mut Vec<&'a Gap>) {
    for node in content {
        match node {
            Content::Gap(gap) => gaps.push(gap),
            Content::Element(element) => collect_gaps(&element.children, gaps),
            Content::Text(_)
            | Content::Math(_)
            | Content::RubricBlock(_)
            | Content::Interaction(_) => {}
        }
    }
}

/// A supported interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// `<choiceInteraction>`
    Choice(ChoiceInteraction),
    /// `<inlineChoiceInteraction>`
    InlineChoice(InlineChoiceInteraction),
    /// `<textEntryInteraction>`
    TextEntry(TextEntryInteraction),
    /// `<extendedTextInteraction>`
    ExtendedText(ExtendedTextInteraction),
    /// `<gapMatchInteraction>`
    GapMatch(GapMatchInteraction),
}

impl Interaction {
    /// Kind of this interaction
    pub fn kind(&self) -> InteractionKind {
        match self {
            Interaction::Choice(_) => InteractionKind::Choice,
            Interaction::InlineChoice(_) => InteractionKind::InlineChoice,
            Interaction::TextEntry(_) => InteractionKind::TextEntry,
            Interaction::ExtendedText(_) => InteractionKind::ExtendedText,
            Interaction::GapMatch(_) => InteractionKind::GapMatch,
        }
    }

    /// Response identifier linking the interaction to its declaration
    pub fn response_identifier(&self) -> &str {
        match self {
            Interaction::Choice(i) => &i.response_identifier,
            Interaction::InlineChoice(i) => &i.response_identifier,
            Interaction::TextEntry(i) => &i.response_identifier,
            Interaction::ExtendedText(i) => &i.response_identifier,
            Interaction::GapMatch(i) => &i.response_identifier,
        }
    }

    /// Mutable access to every content block owned by the interaction
    pub fn content_blocks_mut(&mut self) -> Vec<&mut Vec<Content>> {
        match self {
            Interaction::Choice(i) => {
                let mut blocks = vec![&mut i.prompt];
                blocks.extend(i.choices.iter_mut().map(|c| &mut c.content));
                blocks
            }
            Interaction::InlineChoice(i) => i.choices.iter_mut().map(|c| &mut c.content).collect(),
            Interaction::TextEntry(_) => Vec::new(),
            Interaction::ExtendedText(i) => vec![&mut i.prompt],
            Interaction::GapMatch(i) => {
                let mut blocks = vec![&mut i.prompt];
                blocks.extend(i.gap_texts.iter_mut().map(|g| &mut g.content));
                blocks.push(&mut i.content);
                blocks
            }
        }
    }
}
