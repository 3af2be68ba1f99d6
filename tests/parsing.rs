use agroadvisor::{
    categorize_sentences, classify_sentence, parse_response, AdviceCategory, CategorizedAdvice,
    SentenceCategory,
};

#[test]
fn test_strict_parse_matches_input_exactly() {
    let raw = r#"{
        "cropCare": ["Prune suckers", "Stake vines"],
        "irrigation": ["Drip irrigate at dawn"],
        "pestManagement": ["Check leaves for blight"],
        "urgent": ["Cover seedlings"],
        "longTerm": ["Plan rotation with legumes"]
    }"#;
    let expected = CategorizedAdvice {
        crop_care: vec!["Prune suckers".into(), "Stake vines".into()],
        irrigation: vec!["Drip irrigate at dawn".into()],
        pest_management: vec!["Check leaves for blight".into()],
        urgent: vec!["Cover seedlings".into()],
        long_term: vec!["Plan rotation with legumes".into()],
    };
    assert_eq!(parse_response(raw), expected);
}

#[test]
fn test_strict_missing_keys_are_empty() {
    let advice = parse_response(r#"{"irrigation":["Water less"],"extra":["ignored"]}"#);
    assert_eq!(advice.irrigation, vec!["Water less"]);
    for category in AdviceCategory::ALL {
        if category != AdviceCategory::Irrigation {
            assert!(advice.get(category).is_empty(), "{category:?} not empty");
        }
    }
}

#[test]
fn test_strict_all_non_array_values() {
    let raw = r#"{"cropCare":1,"irrigation":"x","pestManagement":true,"urgent":null,"longTerm":{}}"#;
    assert_eq!(parse_response(raw), CategorizedAdvice::default());
}

#[test]
fn test_fallback_bullet_stripping() {
    let advice = parse_response("Irrigation:\n- Water every 2 days\n- Avoid midday watering");
    assert_eq!(
        advice.irrigation,
        vec!["Water every 2 days", "Avoid midday watering"]
    );
}

#[test]
fn test_fallback_pest_line_without_crop_care_header() {
    let advice = parse_response("Pest damage on crop leaves\n- Remove affected leaves");
    assert_eq!(advice.pest_management, vec!["Remove affected leaves"]);
    assert!(advice.crop_care.is_empty());
}

#[test]
fn test_fallback_windows_line_endings() {
    let advice = parse_response("Long term:\r\n- Build raised beds\r\n");
    assert_eq!(advice.long_term, vec!["Build raised beds"]);
}

#[test]
fn test_no_markers_is_empty() {
    let advice = parse_response("The weather is nice today.\nEnjoy your farm.");
    assert!(advice.is_empty());
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_response(""), CategorizedAdvice::default());
    assert_eq!(parse_response("   \n  "), CategorizedAdvice::default());
}

#[test]
fn test_sentence_classifier_is_separate() {
    assert_eq!(
        classify_sentence("Watch for pest infestation on the tomato crop"),
        SentenceCategory::PestManagement
    );
    let buckets = categorize_sentences(
        "Watch for pest infestation on the tomato crop. Water deeply. Plant cover crops. Sell early.",
    );
    assert_eq!(
        buckets.pest_management,
        vec!["Watch for pest infestation on the tomato crop"]
    );
    assert_eq!(buckets.irrigation, vec!["Water deeply"]);
    assert_eq!(buckets.crop_care, vec!["Plant cover crops"]);
    assert_eq!(buckets.general, vec!["Sell early"]);
}
