//! QTI 2.x item model
//!
//! A typed, owned representation of an `<assessmentItem>` covering the parts
//! the mapping engine reads, together with the parser that builds it and the
//! writer that turns content back into markup.

pub mod content;
pub mod declarations;
pub mod interactions;
pub mod item;
pub mod markup;
pub mod parser;

pub use content::{collect_interactions, text_content, Content, Element, Gap, MathContent};
pub use declarations::{
    BaseType, Cardinality, MapEntry, Mapping, OutcomeDeclaration, ResponseDeclaration,
    ResponseProcessing, ResponseValue, TemplateDeclaration, TemplateProcessing,
};
pub use interactions::{
    ChoiceInteraction, ExtendedTextInteraction, GapMatchInteraction, GapText, InlineChoice,
    InlineChoiceInteraction, Interaction, InteractionKind, SimpleChoice, TextEntryInteraction,
    TextFormat,
};
pub use item::{AssessmentItem, ItemBody, ModalFeedback, Stylesheet};
pub use parser::{parse_assessment_item, parse_fragment};
