#![allow(dead_code)]

use std::time::Duration;

use agroadvisor::ai::config::AiConfig;
use agroadvisor::{FarmProfile, Location, SoilType, WeatherObservation};

pub fn ai_config(url: String) -> AiConfig {
    AiConfig {
        api_key: "k".to_string(),
        gpt_model: "gpt-3.5-turbo".to_string(),
        openai_chat_url: Some(url),
        request_timeout: Duration::from_secs(5),
    }
}

pub fn tomato_farm() -> FarmProfile {
    FarmProfile {
        crops: vec!["tomato".to_string()],
        soil_type: SoilType::Clay,
        location: Location {
            latitude: Some(13.08),
            longitude: Some(80.27),
        },
    }
}

pub fn hot_humid_clear() -> WeatherObservation {
    WeatherObservation {
        temperature_c: 32.0,
        humidity_pct: 85.0,
        condition_main: "Clear".to_string(),
        has_precipitation: false,
    }
}

/// Wrap `content` in a chat-completions response envelope.
pub fn chat_body(content: &str) -> String {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
    .to_string()
}
