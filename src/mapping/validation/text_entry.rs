use crate::diagnostics::Diagnostics;
use crate::qti::ResponseDeclaration;

use super::ValidationBuilder;

/// Validation of `<textEntryInteraction>`: one slot holding the typed text.
/// Several correct values are alternatives.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEntryValidationBuilder;

impl ValidationBuilder for TextEntryValidationBuilder {
    fn correct_slots(
        &self,
        declaration: &ResponseDeclaration,
        _diagnostics: &mut Diagnostics,
    ) -> Vec<Vec<String>> {
        vec![declaration
            .correct_response
            .iter()
            .map(|value| value.as_text())
            .collect()]
    }
}
