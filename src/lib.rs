//! # qti-mapper
//!
//! Maps IMS QTI 2.x assessment items onto a JSON item/question model.
//!
//! Mapping is best effort: whatever cannot be carried over is dropped and
//! reported as a WARNING next to the result. Only items that cannot be
//! mapped at all (template declarations, template processing, no supported
//! interaction) fail with a CRITICAL error.
//!
//! ## Features
//!
//! - `choiceInteraction`, `inlineChoiceInteraction`, `textEntryInteraction`,
//!   `extendedTextInteraction` and `gapMatchInteraction`
//! - Scoring from the standard `match_correct` and `map_response` templates
//! - Alternate answers expanded from multi-part correct responses
//! - Interactions sharing one scoring unit merged into a single question
//! - MathML normalization
//! - `longtext` questions back to QTI
//! - Protection against oversized and deeply nested documents
//!
//! ## Example
//!
//! ```rust,ignore
//! use qti_mapper::mapping::ItemMapper;
//!
//! let mapping = ItemMapper::new().parse(&xml)?;
//! let (item, questions, warnings) = mapping.into_parts();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod diagnostics;
pub mod error;
pub mod limits;
pub mod config;

// Utilities
pub mod namespaces;
pub mod names;

// Document loading
pub mod loaders;
pub mod documents;

// Source and target models
pub mod qti;
pub mod entities;

// Mapping engine
pub mod mapping;
pub mod export;

// Re-exports for convenience
pub use config::MapperConfig;
pub use diagnostics::{Diagnostics, MappingError, Severity};
pub use documents::{QtiDocument, QtiVersion};
pub use error::{Error, Result};
pub use limits::Limits;
pub use mapping::{ItemMapper, ItemMapping};

/// Version of the qti-mapper library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
