use agroadvisor::{parse_response, AdviceCategory, CategorizedAdvice};
use proptest::prelude::*;

fn assert_clean(advice: &CategorizedAdvice) -> Result<(), TestCaseError> {
    let json = serde_json::to_value(advice).unwrap();
    let obj = json.as_object().unwrap();
    prop_assert_eq!(obj.len(), 5);
    for category in AdviceCategory::ALL {
        prop_assert!(obj.contains_key(category.key()));
        for item in advice.get(category) {
            prop_assert!(!item.is_empty());
            prop_assert_eq!(item.trim(), item.as_str());
        }
    }
    Ok(())
}

// Property: parsing never panics and always yields every category
proptest! {
    #[test]
    fn prop_parse_response_total(s in "(?s).*") {
        let advice = parse_response(&s);
        assert_clean(&advice)?;
    }

    #[test]
    fn prop_parse_response_headered_text(
        lines in prop::collection::vec(
            prop_oneof![
                Just("Crop care:".to_string()),
                Just("Irrigation:".to_string()),
                Just("Urgent:".to_string()),
                Just("Long term:".to_string()),
                Just("Disease watch".to_string()),
                "- [a-z ]{0,12}",
                "[a-z ]{0,12}",
            ],
            0..20,
        )
    ) {
        let advice = parse_response(&lines.join("\n"));
        assert_clean(&advice)?;
    }
}

fn advice_strategy() -> impl Strategy<Value = CategorizedAdvice> {
    let items = || prop::collection::vec("[A-Za-z][A-Za-z ]{0,20}[A-Za-z]", 0..4);
    (items(), items(), items(), items(), items()).prop_map(|(a, b, c, d, e)| CategorizedAdvice {
        crop_care: a,
        irrigation: b,
        pest_management: c,
        urgent: d,
        long_term: e,
    })
}

proptest! {
    #[test]
    fn prop_strict_parse_precedence(advice in advice_strategy()) {
        let raw = serde_json::to_string(&advice).unwrap();
        prop_assert_eq!(parse_response(&raw), advice);
    }
}
