//! Integration tests mapping QTI items end to end

use pretty_assertions::assert_eq;

use qti_mapper::entities::question_types::Longtext;
use qti_mapper::entities::{QuestionType, ValidResponse, Validation};
use qti_mapper::{Error, ItemMapper, Limits, MapperConfig};

const MATCH_CORRECT: &str = "http://www.imsglobal.org/question/qti_v2p1/rptemplates/match_correct";

/// Wrap declarations and body content in an `<assessmentItem>`
fn item(identifier: &str, head: &str, body: &str, tail: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<assessmentItem xmlns="http://www.imsglobal.org/xsd/imsqti_v2p1" identifier="{identifier}" title="Sample item" adaptive="false" timeDependent="false">
  {head}
  <itemBody>
    {body}
  </itemBody>
  {tail}
</assessmentItem>"#
    )
}

fn values(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn inline_choice_body() -> &'static str {
    r#"<p>Paris is in <inlineChoiceInteraction responseIdentifier="R1">
        <inlineChoice identifier="FR">France</inlineChoice>
        <inlineChoice identifier="IT">Italy</inlineChoice>
      </inlineChoiceInteraction> and Rome in <inlineChoiceInteraction responseIdentifier="R2">
        <inlineChoice identifier="FR">France</inlineChoice>
        <inlineChoice identifier="IT">Italy</inlineChoice>
      </inlineChoiceInteraction>.</p>"#
}

fn inline_choice_declarations() -> &'static str {
    r#"<responseDeclaration identifier="R1" cardinality="single" baseType="identifier">
    <correctResponse><value>FR</value></correctResponse>
  </responseDeclaration>
  <responseDeclaration identifier="R2" cardinality="single" baseType="identifier">
    <correctResponse><value>IT</value></correctResponse>
  </responseDeclaration>"#
}

#[test]
fn test_longtext_without_declaration() {
    let xml = std::fs::read_to_string("tests/fixtures/essay.xml").unwrap();
    let mapping = ItemMapper::new().parse(&xml).unwrap();

    assert_eq!(mapping.item.reference, "essay");
    assert_eq!(mapping.item.description.as_deref(), Some("Essay"));
    assert_eq!(mapping.item.questions, vec!["essay_RESPONSE"]);
    assert_eq!(
        mapping.item.content,
        r#"<span class="learnosity-response question-essay_RESPONSE"></span>"#
    );
    assert!(mapping.warnings.is_empty());

    assert_eq!(mapping.questions.len(), 1);
    let question = &mapping.questions[0];
    assert_eq!(question.question_type, "longtext");
    assert_eq!(question.widget_type, "response");
    assert_eq!(
        question.data,
        QuestionType::Longtext(
            Longtext::new("<strong>stimulushere</strong>").with_placeholder("placeholdertest")
        )
    );
}

#[test]
fn test_template_declaration_is_critical() {
    let xml = item(
        "templated",
        r#"<templateDeclaration identifier="T" cardinality="single" baseType="integer"/>"#,
        r#"<extendedTextInteraction responseIdentifier="RESPONSE"/>"#,
        "",
    );

    let err = ItemMapper::new().parse(&xml).unwrap_err();
    assert!(err.is_critical());
    assert_eq!(
        err.to_string(),
        "Does not support <templateDeclaration> on <assessmentItem>. Ignoring <templateDeclaration>"
    );
}

#[test]
fn test_template_processing_is_critical() {
    let xml = item(
        "templated",
        "",
        r#"<extendedTextInteraction responseIdentifier="RESPONSE"/>"#,
        r#"<templateProcessing><setTemplateValue identifier="T"><baseValue baseType="integer">1</baseValue></setTemplateValue></templateProcessing>"#,
    );

    let err = ItemMapper::new().parse(&xml).unwrap_err();
    match err {
        Error::Critical(error) => assert_eq!(error.component.as_deref(), Some("templateProcessing")),
        other => panic!("expected a critical error, got {other:?}"),
    }
}

#[test]
fn test_no_supported_interactions_is_critical() {
    let xml = item(
        "unsupported",
        "",
        r#"<p>Order these:</p><orderInteraction responseIdentifier="RESPONSE"><simpleChoice identifier="A">A</simpleChoice></orderInteraction>"#,
        "",
    );

    let err = ItemMapper::new().parse(&xml).unwrap_err();
    assert!(err.is_critical());
    assert_eq!(err.to_string(), "No supported interactions could be found");
}

#[test]
fn test_warnings_in_detection_order() {
    let xml = item(
        "capital",
        r#"<responseDeclaration identifier="RESPONSE" cardinality="single" baseType="identifier">
    <correctResponse><value>ChoiceA</value></correctResponse>
  </responseDeclaration>
  <outcomeDeclaration identifier="SCORE" cardinality="single" baseType="float"/>
  <stylesheet href="style.css" type="text/css"/>"#,
        r#"<rubricBlock view="scorer"><p>One</p></rubricBlock>
    <choiceInteraction responseIdentifier="RESPONSE" shuffle="true" maxChoices="1">
      <prompt>What is the capital of France?</prompt>
      <simpleChoice identifier="ChoiceA">Paris</simpleChoice>
      <simpleChoice identifier="ChoiceB">Lyon</simpleChoice>
    </choiceInteraction>
    <rubricBlock view="scorer"><p>Two</p></rubricBlock>"#,
        &format!(r#"<responseProcessing template="{MATCH_CORRECT}"/>"#),
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert_eq!(
        mapping.warnings,
        vec![
            "Ignoring <outcomeDeclaration> on <assessmentItem>. Generally we mapped <defaultValue> to 0",
            "Ignoring <stylesheet> on <assessmentItem>",
            "Does not support <rubricBlock>. Ignoring <rubricBlock>",
        ]
    );

    match &mapping.questions[0].data {
        QuestionType::Mcq(mcq) => {
            assert_eq!(mcq.stimulus, "What is the capital of France?");
            assert_eq!(mcq.options.len(), 2);
            assert_eq!(mcq.options[0].label, "Paris");
            assert_eq!(mcq.options[0].value, "ChoiceA");
            assert_eq!(mcq.multiple_responses, None);
            assert_eq!(mcq.shuffle_options, Some(true));
            assert_eq!(
                mcq.validation,
                Some(Validation::exact_match(ValidResponse::new(values(&["ChoiceA"])), Vec::new()))
            );
        }
        other => panic!("expected mcq, got {other:?}"),
    }
}

#[test]
fn test_response_processing_warnings() {
    let xml = item(
        "custom",
        "",
        r#"<extendedTextInteraction responseIdentifier="RESPONSE"/>"#,
        r#"<responseProcessing template="http://example.com/custom.xml" templateLocation="custom.xml">
    <responseCondition/>
  </responseProcessing>"#,
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert_eq!(
        mapping.warnings,
        vec![
            "Does not support custom response processing on <responseProcessing>. Ignoring <responseProcessing>",
            "Does not support 'templateLocation' on <responseProcessing>. Ignoring <responseProcessing>",
            "Does not support custom response processing templates. Ignoring <responseProcessing>",
        ]
    );
}

#[test]
fn test_gap_match_alternates() {
    let xml = std::fs::read_to_string("tests/fixtures/gap_match.xml").unwrap();
    let mapping = ItemMapper::new().parse(&xml).unwrap();

    assert_eq!(mapping.item.questions, vec!["seasons_RESPONSE"]);
    assert_eq!(
        mapping.warnings,
        vec!["Ignoring <outcomeDeclaration> on <assessmentItem>. Generally we mapped <defaultValue> to 0"]
    );

    match &mapping.questions[0].data {
        QuestionType::Clozeassociation(question) => {
            assert_eq!(question.stimulus, "Complete the sentence.");
            assert_eq!(
                question.template,
                "<p>Snow falls in {{response}} and the sun shines in {{response}}.</p>"
            );
            assert_eq!(question.possible_responses, values(&["winter", "summer", "autumn"]));
            assert_eq!(question.duplicate_responses, None);

            let validation = question.validation.as_ref().unwrap();
            assert_eq!(validation.scoring_type, "exactMatch");
            assert_eq!(validation.valid_response, ValidResponse::new(values(&["winter", "summer"])));
            assert_eq!(
                validation.alt_responses,
                Some(vec![ValidResponse::new(values(&["autumn", "summer"]))])
            );
        }
        other => panic!("expected clozeassociation, got {other:?}"),
    }
}

#[test]
fn test_gap_match_single_combination() {
    let xml = std::fs::read_to_string("tests/fixtures/gap_match.xml")
        .unwrap()
        .replace("<value>AUTUMN G1</value>", "");
    let mapping = ItemMapper::new().parse(&xml).unwrap();

    match &mapping.questions[0].data {
        QuestionType::Clozeassociation(question) => {
            let validation = question.validation.as_ref().unwrap();
            assert_eq!(validation.valid_response, ValidResponse::new(values(&["winter", "summer"])));
            assert_eq!(validation.alt_responses, None);
        }
        other => panic!("expected clozeassociation, got {other:?}"),
    }
}

#[test]
fn test_gap_match_map_response_placeholder() {
    let xml = std::fs::read_to_string("tests/fixtures/gap_match.xml")
        .unwrap()
        .replace("match_correct", "map_response");
    let mapping = ItemMapper::new().parse(&xml).unwrap();

    match &mapping.questions[0].data {
        QuestionType::Clozeassociation(question) => {
            let validation = question.validation.as_ref().unwrap();
            assert_eq!(validation.valid_response.score, None);
            assert!(validation.valid_response.value.is_empty());
            assert_eq!(validation.alt_responses, None);
        }
        other => panic!("expected clozeassociation, got {other:?}"),
    }
}

#[test]
fn test_map_response_point_not_supported() {
    let xml = std::fs::read_to_string("tests/fixtures/gap_match.xml")
        .unwrap()
        .replace("match_correct", "map_response_point");
    let mapping = ItemMapper::new().parse(&xml).unwrap();

    assert_eq!(
        mapping.warnings.last().map(String::as_str),
        Some("Does not support template map_response_point on <responseProcessing>")
    );
    assert!(!mapping.questions[0].data.has_validation());
}

#[test]
fn test_inline_choices_merged() {
    let xml = item(
        "cities",
        inline_choice_declarations(),
        inline_choice_body(),
        &format!(r#"<responseProcessing template="{MATCH_CORRECT}"/>"#),
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert_eq!(mapping.item.questions, vec!["cities_merged"]);
    assert_eq!(
        mapping.item.content,
        r#"<span class="learnosity-response question-cities_merged"></span>"#
    );
    assert!(mapping.warnings.is_empty());

    match &mapping.questions[0].data {
        QuestionType::Clozedropdown(question) => {
            assert_eq!(
                question.template,
                "<p>Paris is in {{response}} and Rome in {{response}}.</p>"
            );
            assert_eq!(
                question.possible_responses,
                vec![values(&["France", "Italy"]), values(&["France", "Italy"])]
            );
            assert_eq!(
                question.validation,
                Some(Validation::exact_match(
                    ValidResponse::new(values(&["France", "Italy"])),
                    Vec::new()
                ))
            );
        }
        other => panic!("expected clozedropdown, got {other:?}"),
    }
}

#[test]
fn test_inline_choices_regular_when_merging_disabled() {
    let xml = item(
        "cities",
        inline_choice_declarations(),
        inline_choice_body(),
        &format!(r#"<responseProcessing template="{MATCH_CORRECT}"/>"#),
    );

    let mapper = ItemMapper::new().with_config(MapperConfig::new().with_merge_interactions(false));
    let mapping = mapper.parse(&xml).unwrap();

    assert_eq!(mapping.item.questions, vec!["cities_R1", "cities_R2"]);
    assert_eq!(
        mapping.item.content,
        concat!(
            "<p>Paris is in ",
            r#"<span class="learnosity-response question-cities_R1"></span>"#,
            " and Rome in ",
            r#"<span class="learnosity-response question-cities_R2"></span>"#,
            ".</p>"
        )
    );
    match &mapping.questions[1].data {
        QuestionType::Clozedropdown(question) => {
            assert_eq!(question.template, "{{response}}");
            assert_eq!(
                question.validation.as_ref().map(|v| v.valid_response.value.clone()),
                Some(values(&["Italy"]))
            );
        }
        other => panic!("expected clozedropdown, got {other:?}"),
    }
}

#[test]
fn test_math_flags_supporting_questions() {
    let xml = item(
        "math",
        "",
        r#"<p>Compute <math xmlns="http://www.w3.org/1998/Math/MathML"><mn>2</mn><mo>+</mo><mn>2</mn></math></p>
    <extendedTextInteraction responseIdentifier="R1"/>
    <extendedTextInteraction responseIdentifier="R2" format="plain"/>"#,
        "",
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert!(mapping
        .item
        .content
        .starts_with("<p>Compute <math><mn>2</mn><mo>+</mo><mn>2</mn></math></p>"));

    match &mapping.questions[0].data {
        QuestionType::Longtext(question) => assert_eq!(question.is_math, Some(true)),
        other => panic!("expected longtext, got {other:?}"),
    }
    assert!(matches!(mapping.questions[1].data, QuestionType::Plaintext(_)));

    let json = serde_json::to_value(&mapping).unwrap();
    assert_eq!(json["questions"][0]["data"]["is_math"], true);
    assert!(json["questions"][1]["data"].get("is_math").is_none());
}

#[test]
fn test_text_entries_merged_with_alternates() {
    let xml = item(
        "capitals",
        r#"<responseDeclaration identifier="R1" cardinality="single" baseType="string">
    <correctResponse><value>Paris</value><value>paris</value></correctResponse>
  </responseDeclaration>
  <responseDeclaration identifier="R2" cardinality="single" baseType="string">
    <correctResponse><value>Rome</value></correctResponse>
  </responseDeclaration>"#,
        r#"<p>France: <textEntryInteraction responseIdentifier="R1" expectedLength="10"/></p>
    <p>Italy: <textEntryInteraction responseIdentifier="R2" patternMask="[A-Z].*"/></p>"#,
        &format!(r#"<responseProcessing template="{MATCH_CORRECT}"/>"#),
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert_eq!(
        mapping.warnings,
        vec!["Does not support 'patternMask' on <textEntryInteraction>. Ignoring 'patternMask'"]
    );
    match &mapping.questions[0].data {
        QuestionType::Clozetext(question) => {
            assert_eq!(
                question.template,
                "<p>France: {{response}}</p><p>Italy: {{response}}</p>"
            );
            assert_eq!(question.max_length, Some(10));
            let validation = question.validation.as_ref().unwrap();
            assert_eq!(validation.valid_response.value, values(&["Paris", "Rome"]));
            assert_eq!(
                validation.alt_responses,
                Some(vec![ValidResponse::new(values(&["paris", "Rome"]))])
            );
        }
        other => panic!("expected clozetext, got {other:?}"),
    }
}

#[test]
fn test_extended_text_with_declaration() {
    let xml = item(
        "essay",
        r#"<responseDeclaration identifier="RESPONSE" cardinality="single" baseType="string">
    <correctResponse><value>Anything</value></correctResponse>
  </responseDeclaration>"#,
        r#"<extendedTextInteraction responseIdentifier="RESPONSE" maxStrings="3" expectedLength="200"/>"#,
        "",
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert_eq!(
        mapping.warnings,
        vec![
            "Does not support 'maxStrings' greater than 1 on <extendedTextInteraction>. Mapped to a single response",
            "Ignoring <correctResponse> of 'RESPONSE'. <extendedTextInteraction> responses are scored manually",
        ]
    );
    match &mapping.questions[0].data {
        QuestionType::Longtext(question) => {
            assert_eq!(question.max_length, Some(200));
            assert_eq!(question.validation.as_ref().map(|v| v.max_score), Some(1));
        }
        other => panic!("expected longtext, got {other:?}"),
    }
}

#[test]
fn test_mapping_is_deterministic() {
    let xml = std::fs::read_to_string("tests/fixtures/gap_match.xml").unwrap();
    let mapper = ItemMapper::new();

    let first = mapper.parse(&xml).unwrap();
    let second = mapper.parse(&xml).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_parse_file() {
    let mapping = ItemMapper::new()
        .parse_file("tests/fixtures/essay.xml")
        .unwrap();
    let (item, questions, warnings) = mapping.into_parts();
    assert_eq!(item.reference, "essay");
    assert_eq!(questions.len(), 1);
    assert!(warnings.is_empty());
}

#[test]
fn test_invalid_identifier_rejected() {
    let xml = item("not an id", "", r#"<extendedTextInteraction responseIdentifier="R"/>"#, "");
    let err = ItemMapper::new().parse(&xml).unwrap_err();
    assert!(matches!(err, Error::Document(_)));
    assert!(!err.is_critical());
}

#[test]
fn test_inline_whitespace_preserved() {
    let xml = item(
        "spacing",
        "",
        r#"<p><strong>Hello</strong> <em>world</em></p>
    <extendedTextInteraction responseIdentifier="RESPONSE">
      <prompt><b>a</b> <i>b</i></prompt>
    </extendedTextInteraction>"#,
        "",
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert!(mapping
        .item
        .content
        .starts_with("<p><strong>Hello</strong> <em>world</em></p>"));
    match &mapping.questions[0].data {
        QuestionType::Longtext(question) => assert_eq!(question.stimulus, "<b>a</b> <i>b</i>"),
        other => panic!("expected longtext, got {other:?}"),
    }
}

#[test]
fn test_merged_text_entries_without_declarations() {
    let xml = item(
        "undeclared",
        "",
        r#"<p><textEntryInteraction responseIdentifier="R1"/> <textEntryInteraction responseIdentifier="R2"/></p>"#,
        &format!(r#"<responseProcessing template="{MATCH_CORRECT}"/>"#),
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert!(mapping.warnings.is_empty());
    match &mapping.questions[0].data {
        QuestionType::Clozetext(question) => {
            assert_eq!(question.template, "<p>{{response}} {{response}}</p>");
            assert_eq!(question.validation, None);
        }
        other => panic!("expected clozetext, got {other:?}"),
    }
}

#[test]
fn test_alternates_bounded_by_combination_limit() {
    let mut declarations = String::new();
    let mut body = String::new();
    for i in 0..11 {
        declarations.push_str(&format!(
            r#"<responseDeclaration identifier="R{i}" cardinality="single" baseType="string"><correctResponse><value>a{i}</value><value>b{i}</value></correctResponse></responseDeclaration>"#
        ));
        body.push_str(&format!(r#"<p><textEntryInteraction responseIdentifier="R{i}"/></p>"#));
    }
    let xml = item(
        "wide",
        &declarations,
        &body,
        &format!(r#"<responseProcessing template="{MATCH_CORRECT}"/>"#),
    );

    let mapping = ItemMapper::new().parse(&xml).unwrap();
    assert_eq!(
        mapping.warnings,
        vec!["Correct values expand to more than 1024 responses. Ignoring alternate responses"]
    );
    let QuestionType::Clozetext(question) = &mapping.questions[0].data else {
        panic!("expected clozetext");
    };
    let validation = question.validation.as_ref().unwrap();
    assert_eq!(validation.response_count(), 1);
    assert_eq!(validation.valid_response.value[10], "a10");

    let limits = Limits {
        max_combinations: 1 << 12,
        ..Limits::default()
    };
    let mapping = ItemMapper::new()
        .with_config(MapperConfig::new().with_limits(limits))
        .parse(&xml)
        .unwrap();
    assert!(mapping.warnings.is_empty());
    let QuestionType::Clozetext(question) = &mapping.questions[0].data else {
        panic!("expected clozetext");
    };
    assert_eq!(question.validation.as_ref().unwrap().response_count(), 1 << 11);
}
