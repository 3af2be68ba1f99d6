mod common;

use agroadvisor::{build_prompt, Role};
use common::{hot_humid_clear, tomato_farm};

#[test]
fn test_prompt_is_deterministic() {
    let a = build_prompt(&tomato_farm(), &hot_humid_clear()).unwrap();
    let b = build_prompt(&tomato_farm(), &hot_humid_clear()).unwrap();
    assert_eq!(a.content.as_bytes(), b.content.as_bytes());
}

#[test]
fn test_prompt_embeds_profile_and_weather() {
    let prompt = build_prompt(&tomato_farm(), &hot_humid_clear()).unwrap();
    assert_eq!(prompt.role, Role::System);
    for needle in ["32", "85", "tomato", "clay", "Clear"] {
        assert!(prompt.content.contains(needle), "prompt lacks {needle}");
    }
}
