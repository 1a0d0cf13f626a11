//! Writing content trees back out as markup
//!
//! Generic elements are written as-is, MathML islands as their stored markup
//! and interactions as QTI elements. Callers that need to substitute nodes
//! (response placeholders, template tokens) pass a replacement callback that
//! is consulted before each node is written.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::namespaces::XML_NAMESPACE;

use super::content::{Content, Element};
use super::interactions::{
    ChoiceInteraction, ExtendedTextInteraction, GapMatchInteraction, InlineChoiceInteraction,
    Interaction, TextEntryInteraction,
};

/// HTML elements that are written self-closing when they have no children
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

type Replace<'f> = &'f dyn Fn(&Content) -> Option<String>;

/// Write content nodes as markup
pub fn marshal_content(content: &[Content]) -> Result<String> {
    marshal_content_with(content, &|_| None)
}

/// Write content nodes as markup, replacing any node for which `replace`
/// returns raw markup
pub fn marshal_content_with(
    content: &[Content],
    replace: &dyn Fn(&Content) -> Option<String>,
) -> Result<String> {
    let mut writer = MarkupWriter::new(replace);
    writer.content(content, None)?;
    writer.finish()
}

/// Write a single element and its subtree
pub fn marshal_element(element: &Element) -> Result<String> {
    let keep = |_: &Content| -> Option<String> { None };
    let mut writer = MarkupWriter::new(&keep);
    writer.element(element, None)?;
    writer.finish()
}

/// Write an interaction as its QTI element
pub fn marshal_interaction(interaction: &Interaction) -> Result<String> {
    let keep = |_: &Content| -> Option<String> { None };
    let mut writer = MarkupWriter::new(&keep);
    writer.interaction(interaction)?;
    writer.finish()
}

struct MarkupWriter<'f> {
    writer: Writer<Vec<u8>>,
    replace: Replace<'f>,
}

impl<'f> MarkupWriter<'f> {
    fn new(replace: Replace<'f>) -> Self {
        Self {
            writer: Writer::new(Vec::new()),
            replace,
        }
    }

    fn finish(self) -> Result<String> {
        String::from_utf8(self.writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
    }

    fn content(&mut self, content: &[Content], parent_ns: Option<&str>) -> Result<()> {
        for node in content {
            if let Some(raw) = (self.replace)(node) {
                self.raw(&raw)?;
                continue;
            }
            match node {
                Content::Text(text) => self.text(text)?,
                Content::Element(element) | Content::RubricBlock(element) => {
                    self.element(element, parent_ns)?
                }
                Content::Math(math) => self.raw(&math.markup)?,
                Content::Interaction(interaction) => self.interaction(interaction)?,
                Content::Gap(gap) => {
                    let mut attributes = vec![("identifier", gap.identifier.clone())];
                    if gap.required {
                        attributes.push(("required", "true".to_string()));
                    }
                    self.empty("gap", &attributes)?;
                }
            }
        }
        Ok(())
    }

    fn element(&mut self, element: &Element, parent_ns: Option<&str>) -> Result<()> {
        let name = element.local_name();
        let namespace = element.qname.namespace.as_deref();

        let mut start = BytesStart::new(name);
        if namespace != parent_ns {
            start.push_attribute(("xmlns", namespace.unwrap_or("")));
        }

        let mut prefixes = 0;
        for (qname, value) in &element.attributes {
            let local = qname.local_name.as_str();
            match qname.namespace.as_deref() {
                None => start.push_attribute((local, value.as_str())),
                Some(XML_NAMESPACE) => {
                    start.push_attribute((format!("xml:{}", local).as_str(), value.as_str()))
                }
                Some(uri) => {
                    prefixes += 1;
                    let prefix = format!("ns{}", prefixes);
                    start.push_attribute((format!("xmlns:{}", prefix).as_str(), uri));
                    start.push_attribute((format!("{}:{}", prefix, local).as_str(), value.as_str()));
                }
            }
        }

        if element.children.is_empty() && VOID_ELEMENTS.contains(&name) {
            self.write(Event::Empty(start))
        } else {
            self.write(Event::Start(start))?;
            self.content(&element.children, namespace)?;
            self.write(Event::End(BytesEnd::new(name)))
        }
    }

    fn interaction(&mut self, interaction: &Interaction) -> Result<()> {
        match interaction {
            Interaction::Choice(i) => self.choice(i),
            Interaction::InlineChoice(i) => self.inline_choice(i),
            Interaction::TextEntry(i) => self.text_entry(i),
            Interaction::ExtendedText(i) => self.extended_text(i),
            Interaction::GapMatch(i) => self.gap_match(i),
        }
    }

    fn choice(&mut self, interaction: &ChoiceInteraction) -> Result<()> {
        let mut attributes = vec![
            ("responseIdentifier", interaction.response_identifier.clone()),
            ("shuffle", interaction.shuffle.to_string()),
            ("maxChoices", interaction.max_choices.to_string()),
        ];
        if interaction.min_choices > 0 {
            attributes.push(("minChoices", interaction.min_choices.to_string()));
        }

        self.open("choiceInteraction", &attributes)?;
        self.prompt(&interaction.prompt)?;
        for choice in &interaction.choices {
            let mut attributes = vec![("identifier", choice.identifier.clone())];
            if choice.fixed {
                attributes.push(("fixed", "true".to_string()));
            }
            self.open("simpleChoice", &attributes)?;
            self.content(&choice.content, None)?;
            self.close("simpleChoice")?;
        }
        self.close("choiceInteraction")
    }

    fn inline_choice(&mut self, interaction: &InlineChoiceInteraction) -> Result<()> {
        let mut attributes = vec![
            ("responseIdentifier", interaction.response_identifier.clone()),
            ("shuffle", interaction.shuffle.to_string()),
        ];
        if interaction.required {
            attributes.push(("required", "true".to_string()));
        }

        self.open("inlineChoiceInteraction", &attributes)?;
        for choice in &interaction.choices {
            self.open("inlineChoice", &[("identifier", choice.identifier.clone())])?;
            self.content(&choice.content, None)?;
            self.close("inlineChoice")?;
        }
        self.close("inlineChoiceInteraction")
    }

    fn text_entry(&mut self, interaction: &TextEntryInteraction) -> Result<()> {
        let mut attributes = vec![("responseIdentifier", interaction.response_identifier.clone())];
        if let Some(length) = interaction.expected_length {
            attributes.push(("expectedLength", length.to_string()));
        }
        if let Some(mask) = &interaction.pattern_mask {
            attributes.push(("patternMask", mask.clone()));
        }
        if let Some(placeholder) = &interaction.placeholder_text {
            attributes.push(("placeholderText", placeholder.clone()));
        }
        self.empty("textEntryInteraction", &attributes)
    }

    fn extended_text(&mut self, interaction: &ExtendedTextInteraction) -> Result<()> {
        let mut attributes = vec![("responseIdentifier", interaction.response_identifier.clone())];
        let optional = [
            ("label", interaction.label.clone()),
            ("format", interaction.format.map(|f| f.as_str().to_string())),
            ("expectedLength", interaction.expected_length.map(|v| v.to_string())),
            ("expectedLines", interaction.expected_lines.map(|v| v.to_string())),
            ("placeholderText", interaction.placeholder_text.clone()),
            ("patternMask", interaction.pattern_mask.clone()),
        ];
        attributes.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value))),
        );
        if interaction.min_strings > 0 {
            attributes.push(("minStrings", interaction.min_strings.to_string()));
        }
        if let Some(max) = interaction.max_strings {
            attributes.push(("maxStrings", max.to_string()));
        }

        if interaction.prompt.is_empty() {
            return self.empty("extendedTextInteraction", &attributes);
        }
        self.open("extendedTextInteraction", &attributes)?;
        self.prompt(&interaction.prompt)?;
        self.close("extendedTextInteraction")
    }

    fn gap_match(&mut self, interaction: &GapMatchInteraction) -> Result<()> {
        self.open(
            "gapMatchInteraction",
            &[
                ("responseIdentifier", interaction.response_identifier.clone()),
                ("shuffle", interaction.shuffle.to_string()),
            ],
        )?;
        self.prompt(&interaction.prompt)?;
        for gap_text in &interaction.gap_texts {
            self.open(
                "gapText",
                &[
                    ("identifier", gap_text.identifier.clone()),
                    ("matchMax", gap_text.match_max.to_string()),
                ],
            )?;
            self.content(&gap_text.content, None)?;
            self.close("gapText")?;
        }
        for image in &interaction.gap_images {
            self.empty("gapImg", &[("identifier", image.clone())])?;
        }
        self.content(&interaction.content, None)?;
        self.close("gapMatchInteraction")
    }

    fn prompt(&mut self, prompt: &[Content]) -> Result<()> {
        if prompt.is_empty() {
            return Ok(());
        }
        self.open("prompt", &[])?;
        self.content(prompt, None)?;
        self.close("prompt")
    }

    fn open(&mut self, name: &str, attributes: &[(&str, String)]) -> Result<()> {
        self.write(Event::Start(start_tag(name, attributes)))
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.write(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, String)]) -> Result<()> {
        self.write(Event::Empty(start_tag(name, attributes)))
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.write(Event::Text(BytesText::from_escaped(partial_escape(text))))
    }

    fn raw(&mut self, markup: &str) -> Result<()> {
        self.write(Event::Text(BytesText::from_escaped(markup)))
    }

    fn write(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event)?;
        Ok(())
    }
}

fn start_tag<'a>(name: &'a str, attributes: &[(&str, String)]) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    for (key, value) in attributes {
        start.push_attribute((*key, value.as_str()));
    }
    start
}
