//! Target model back to QTI
//!
//! Only `longtext` questions can be converted so far.

pub mod longtext;

pub use longtext::{ConvertedInteraction, LongtextMapper};

use crate::error::Result;
use crate::qti::markup::marshal_interaction;
use crate::qti::{ExtendedTextInteraction, Interaction};

/// Write an `<extendedTextInteraction>` as QTI markup
pub fn to_qti_xml(interaction: &ExtendedTextInteraction) -> Result<String> {
    marshal_interaction(&Interaction::ExtendedText(interaction.clone()))
}
