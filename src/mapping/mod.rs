//! QTI to item/question mapping engine
//!
//! The entry point is [`ItemMapper`]. The remaining modules are its stages:
//!
//! - [`templates`]: resolving the response processing template of an item
//! - [`interactions`]: one mapper per supported interaction kind
//! - [`validation`]: building scoring records from response declarations
//! - [`combinations`]: expanding multi-part correct answers
//! - [`builders`]: the regular and merged item construction strategies

pub mod builders;
pub mod combinations;
pub mod interactions;
pub mod item_mapper;
pub mod templates;
pub mod validation;

pub use builders::{MergeOutcome, MergedItemBuilder, RegularItemBuilder};
pub use interactions::{map_interaction, InteractionMapper, ScoringContext};
pub use item_mapper::{ItemMapper, ItemMapping};
pub use templates::{resolve_template, ResponseProcessingTemplate};
pub use validation::ValidationBuilder;
