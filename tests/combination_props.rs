//! Property tests for correct answer expansion

use proptest::prelude::*;

use qti_mapper::entities::QuestionType;
use qti_mapper::mapping::combinations::{cartesian_product, combination_count};
use qti_mapper::ItemMapper;

/// A text entry item with one interaction per slot
fn text_entry_item(slots: &[Vec<String>]) -> String {
    let mut declarations = String::new();
    let mut body = String::new();
    for (i, values) in slots.iter().enumerate() {
        declarations.push_str(&format!(
            r#"<responseDeclaration identifier="R{i}" cardinality="single" baseType="string"><correctResponse>"#
        ));
        for value in values {
            declarations.push_str(&format!("<value>{value}</value>"));
        }
        declarations.push_str("</correctResponse></responseDeclaration>");
        body.push_str(&format!(r#"<p>Slot {i}: <textEntryInteraction responseIdentifier="R{i}"/></p>"#));
    }

    format!(
        r#"<assessmentItem xmlns="http://www.imsglobal.org/xsd/imsqti_v2p1" identifier="generated">{declarations}<itemBody>{body}</itemBody><responseProcessing template="http://www.imsglobal.org/question/qti_v2p1/rptemplates/match_correct"/></assessmentItem>"#
    )
}

fn slots() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z]{1,6}", 1..4), 1..4)
}

proptest! {
    #[test]
    fn test_product_size(slots in prop::collection::vec(prop::collection::vec(0u8..10, 0..4), 0..4)) {
        let expected: usize = slots.iter().map(Vec::len).product();
        let combinations = cartesian_product(&slots);
        prop_assert_eq!(combinations.len(), expected);
        prop_assert_eq!(combination_count(&slots), Some(expected));
        for combination in &combinations {
            prop_assert_eq!(combination.len(), slots.len());
        }
    }

    #[test]
    fn test_first_combination_is_first_values(slots in slots()) {
        let combinations = cartesian_product(&slots);
        let first: Vec<String> = slots.iter().map(|values| values[0].clone()).collect();
        prop_assert_eq!(&combinations[0], &first);
    }

    #[test]
    fn test_merged_validation_covers_every_combination(slots in slots()) {
        let xml = text_entry_item(&slots);
        let mapper = ItemMapper::new();
        let mapping = mapper.parse(&xml).unwrap();

        let QuestionType::Clozetext(question) = &mapping.questions[0].data else {
            panic!("expected clozetext");
        };
        let validation = question.validation.as_ref().unwrap();
        let expected: usize = slots.iter().map(Vec::len).product();
        prop_assert_eq!(validation.response_count(), expected);

        let again = mapper.parse(&xml).unwrap();
        prop_assert_eq!(mapping, again);
    }
}
