//! Integration tests converting questions back to QTI

use pretty_assertions::assert_eq;

use qti_mapper::entities::question_types::Longtext;
use qti_mapper::entities::{Question, QuestionType};
use qti_mapper::export::{to_qti_xml, LongtextMapper};
use qti_mapper::qti::TextFormat;
use qti_mapper::ItemMapper;

#[test]
fn test_longtext_to_extended_text() {
    let question = Longtext::new("<strong>stimulushere</strong>").with_placeholder("placeholdertest");

    let (interaction, declaration, processing) = LongtextMapper::new()
        .convert(&question, "questionReferenceOne", "questionReferenceOne")
        .unwrap();

    assert!(declaration.is_none());
    assert!(processing.is_none());
    assert_eq!(interaction.format, Some(TextFormat::Xhtml));
    assert_eq!(
        to_qti_xml(&interaction).unwrap(),
        concat!(
            r#"<extendedTextInteraction responseIdentifier="questionReferenceOne" label="questionReferenceOne" "#,
            r#"format="xhtml" placeholderText="placeholdertest" minStrings="1" maxStrings="1">"#,
            "<prompt><strong>stimulushere</strong></prompt>",
            "</extendedTextInteraction>"
        )
    );
}

#[test]
fn test_exported_interaction_maps_back() {
    let question = Longtext::new("<p>Describe your weekend.</p>")
        .with_placeholder("Start here")
        .with_max_length(300);
    let (interaction, _, _) = LongtextMapper::new().convert(&question, "RESPONSE", "weekend").unwrap();

    let xml = format!(
        r#"<assessmentItem xmlns="http://www.imsglobal.org/xsd/imsqti_v2p2" identifier="weekend"><itemBody>{}</itemBody></assessmentItem>"#,
        to_qti_xml(&interaction).unwrap()
    );
    let mapping = ItemMapper::new().parse(&xml).unwrap();

    assert_eq!(
        mapping.questions,
        vec![Question::new("weekend_RESPONSE", QuestionType::Longtext(question))]
    );
}

#[test]
fn test_export_keeps_space_between_inline_elements() {
    let question = Longtext::new("<b>a</b> <i>b</i>");
    let (interaction, _, _) = LongtextMapper::new().convert(&question, "RESPONSE", "spaced").unwrap();

    assert!(to_qti_xml(&interaction)
        .unwrap()
        .contains("<prompt><b>a</b> <i>b</i></prompt>"));
}
