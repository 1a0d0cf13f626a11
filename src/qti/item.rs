//! The `<assessmentItem>` root component

use indexmap::IndexMap;

use super::content::{collect_interactions, Content};
use super::declarations::{
    OutcomeDeclaration, ResponseDeclaration, ResponseProcessing, TemplateDeclaration,
    TemplateProcessing,
};
use super::interactions::{Interaction, InteractionKind};

/// `<stylesheet>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Stylesheet location
    pub href: String,
    /// MIME type
    pub media_type: Option<String>,
}

/// `<modalFeedback>`
#[derive(Debug, Clone, PartialEq)]
pub struct ModalFeedback {
    /// Feedback identifier
    pub identifier: String,
    /// Outcome variable that triggers the feedback
    pub outcome_identifier: String,
    /// Feedback content
    pub content: Vec<Content>,
}

/// `<itemBody>`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemBody {
    /// Body content in document order
    pub content: Vec<Content>,
}

impl ItemBody {
    /// Create a body from content nodes
    pub fn new(content: Vec<Content>) -> Self {
        Self { content }
    }

    /// All interactions in document order
    pub fn interactions(&self) -> Vec<&Interaction> {
        collect_interactions(&self.content)
    }

    /// Interactions of the given kinds, searched recursively, in document order
    pub fn interactions_of_kind(&self, kinds: &[InteractionKind]) -> Vec<&Interaction> {
        self.interactions()
            .into_iter()
            .filter(|interaction| kinds.contains(&interaction.kind()))
            .collect()
    }
}

/// A parsed `<assessmentItem>`
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentItem {
    /// Item identifier
    pub identifier: String,
    /// Item title
    pub title: Option<String>,
    /// Item label
    pub label: Option<String>,
    /// `adaptive` attribute
    pub adaptive: bool,
    /// `timeDependent` attribute
    pub time_dependent: bool,
    /// Response declarations keyed by identifier, in document order
    pub response_declarations: IndexMap<String, ResponseDeclaration>,
    /// Outcome declarations
    pub outcome_declarations: Vec<OutcomeDeclaration>,
    /// Template declarations
    pub template_declarations: Vec<TemplateDeclaration>,
    /// Template processing
    pub template_processing: Option<TemplateProcessing>,
    /// Stylesheets
    pub stylesheets: Vec<Stylesheet>,
    /// Item body
    pub item_body: ItemBody,
    /// Response processing
    pub response_processing: Option<ResponseProcessing>,
    /// Modal feedback
    pub modal_feedbacks: Vec<ModalFeedback>,
}

impl AssessmentItem {
    /// Create an empty item
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: None,
            label: None,
            adaptive: false,
            time_dependent: false,
            response_declarations: IndexMap::new(),
            outcome_declarations: Vec::new(),
            template_declarations: Vec::new(),
            template_processing: None,
            stylesheets: Vec::new(),
            item_body: ItemBody::default(),
            response_processing: None,
            modal_feedbacks: Vec::new(),
        }
    }

    /// Look up the response declaration for a response identifier
    pub fn response_declaration(&self, identifier: &str) -> Option<&ResponseDeclaration> {
        self.response_declarations.get(identifier)
    }

    /// Add a response declaration
    pub fn with_response_declaration(mut self, declaration: ResponseDeclaration) -> Self {
        self.response_declarations
            .insert(declaration.identifier.clone(), declaration);
        self
    }
}
