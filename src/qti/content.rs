//! Item body content tree
//!
//! The body of an item is kept as an ordered tree of [`Content`] nodes.
//! Interactions, gaps, rubric blocks and MathML islands get their own node
//! kinds so the mapping engine can find them with an exhaustive match;
//! everything else is a generic [`Element`] that is written back out as
//! markup unchanged.

use indexmap::IndexMap;

use crate::error::Result;
use crate::namespaces::{QName, MATHML_NAMESPACE};

use super::interactions::Interaction;
use super::markup;

/// Generic markup element (XHTML, MathML children, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element qualified name
    pub qname: QName,
    /// Element attributes in document order
    pub attributes: IndexMap<QName, String>,
    /// Child nodes
    pub children: Vec<Content>,
}

impl Element {
    /// Create a new element
    pub fn new(qname: QName) -> Self {
        Self {
            qname,
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Get the local name of the element
    pub fn local_name(&self) -> &str {
        &self.qname.local_name
    }

    /// Get an attribute value by local name
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(qname, _)| qname.local_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(QName::local(name), value.into());
        self
    }

    /// Add a child node
    pub fn with_child(mut self, child: Content) -> Self {
        self.children.push(child);
        self
    }

    fn strip_namespaces(&mut self) {
        self.qname.strip_namespace();
        self.attributes.retain(|qname, _| qname.namespace.is_none());
        for child in &mut self.children {
            if let Content::Element(element) = child {
                element.strip_namespaces();
            }
        }
    }
}

/// An embedded MathML island
#[derive(Debug, Clone, PartialEq)]
pub struct MathContent {
    /// The parsed `<math>` element
    pub element: Element,
    /// The markup written out for this node
    pub markup: String,
}

impl MathContent {
    /// Wrap a parsed `<math>` element, keeping its source markup
    pub fn new(element: Element, markup: impl Into<String>) -> Self {
        Self {
            element,
            markup: markup.into(),
        }
    }

    /// Check if the island still carries the MathML namespace
    pub fn is_namespaced(&self) -> bool {
        self.element.qname.is_in(MATHML_NAMESPACE)
    }

    /// Strip namespaces and namespaced attributes so the island is written
    /// as plain `<math>` markup, then regenerate the markup string
    pub fn normalize(&mut self) -> Result<()> {
        self.element.strip_namespaces();
        self.markup = markup::marshal_element(&self.element)?;
        Ok(())
    }
}

/// A `<gap>` inside a gap match interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    /// Gap identifier, referenced by directed pairs in the response declaration
    pub identifier: String,
    /// Whether the candidate must fill the gap
    pub required: bool,
}

/// One node of the item body
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Character data
    Text(String),
    /// Any markup element without special meaning
    Element(Element),
    /// MathML island
    Math(MathContent),
    /// `<rubricBlock>`, not carried over to the target model
    RubricBlock(Element),
    /// A supported interaction
    Interaction(Interaction),
    /// A gap inside a gap match interaction
    Gap(Gap),
}

impl Content {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    /// Get the interaction if this node is one
    pub fn as_interaction(&self) -> Option<&Interaction> {
        match self {
            Content::Interaction(interaction) => Some(interaction),
            _ => None,
        }
    }
}

/// Collect all interactions under the given nodes, in document order
pub fn collect_interactions(content: &[Content]) -> Vec<&Interaction> {
    let mut found = Vec::new();
    collect_into(content, &mut found);
    found
}

fn collect_into<'a>(content: &'a [Content], found: &mut Vec<&'a Interaction>) {
    for node in content {
        match node {
            Content::Interaction(interaction) => found.push(interaction),
            Content::Element(element) | Content::RubricBlock(element) => {
                collect_into(&element.children, found)
            }
            Content::Text(_) | Content::Math(_) | Content::Gap(_) => {}
        }
    }
}

/// Concatenated character data under the given nodes
pub fn text_content(content: &[Content]) -> String {
    let mut text = String::new();
    for node in content {
        match node {
            Content::Text(t) => text.push_str(t),
            Content::Element(element) | Content::RubricBlock(element) => {
                text.push_str(&text_content(&element.children))
            }
            Content::Math(_) | Content::Interaction(_) | Content::Gap(_) => {}
        }
    }
    text
}
