//! Question type records
//!
//! Plain attribute containers, one per supported question type. Optional
//! attributes are left out of the serialised JSON when unset.

mod clozeassociation;
mod clozedropdown;
mod clozetext;
mod longtext;
mod mcq;
mod plaintext;

pub use clozeassociation::Clozeassociation;
pub use clozedropdown::Clozedropdown;
pub use clozetext::Clozetext;
pub use longtext::Longtext;
pub use mcq::{Mcq, McqOption};
pub use plaintext::Plaintext;

/// Question types that carry the `is_math` attribute
pub trait SupportsMath {
    /// Whether the question contains mathematical markup
    fn is_math(&self) -> bool;

    /// Flag the question as containing mathematical markup
    fn set_is_math(&mut self, is_math: bool);
}

macro_rules! impl_supports_math {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl SupportsMath for $ty {
                fn is_math(&self) -> bool {
                    self.is_math.unwrap_or(false)
                }

                fn set_is_math(&mut self, is_math: bool) {
                    self.is_math = Some(is_math);
                }
            }
        )+
    };
}

impl_supports_math!(Longtext, Mcq, Clozeassociation, Clozedropdown, Clozetext);
