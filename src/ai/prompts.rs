//! System prompt sent to the completion model.
//!
//! The template asks for the same five keys that
//! [`crate::advice::CategorizedAdvice`] serializes to, so a well-behaved
//! model answer goes straight through the strict parser.

use serde::Serialize;
use tracing::trace;

use crate::error::AdvisoryError;
use crate::farm::{FarmProfile, WeatherObservation};

/// Fixed instructions and output shape. Context facts are appended below it.
pub const ADVISOR_PROMPT: &str = r#"You are an expert agricultural advisor. Provide specific advice as a JSON object in the following format:
{
  "cropCare": ["specific recommendations for crop maintenance"],
  "irrigation": ["water management advice based on weather"],
  "pestManagement": ["pest and disease prevention/treatment"],
  "urgent": ["any immediate actions needed"],
  "longTerm": ["planning advice for the coming weeks"]
}
Every key must be present and every value must be an array of strings."#;

const ADVISOR_PROMPT_FOOTER: &str =
    "Provide practical, actionable advice that a farmer can implement immediately.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
}

/// A single chat message carrying the rendered instructions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prompt {
    pub role: Role,
    pub content: String,
}

/// Render the advisory prompt for one farm and one weather observation.
pub fn build_prompt(
    profile: &FarmProfile,
    weather: &WeatherObservation,
) -> Result<Prompt, AdvisoryError> {
    if profile.crops.is_empty() {
        return Err(AdvisoryError::InvalidInput(
            "farm profile lists no crops".to_string(),
        ));
    }
    if !weather.temperature_c.is_finite() {
        return Err(AdvisoryError::InvalidInput(format!(
            "temperature is not a finite number: {}",
            weather.temperature_c
        )));
    }
    if !weather.humidity_pct.is_finite() {
        return Err(AdvisoryError::InvalidInput(format!(
            "humidity is not a finite number: {}",
            weather.humidity_pct
        )));
    }

    let content = format!(
        "{ADVISOR_PROMPT}\n\nConsider:\n\
         - Current temperature: {temp}°C\n\
         - Humidity: {humidity}%\n\
         - Weather condition: {condition}\n\
         - Crops: {crops}\n\
         - Soil type: {soil}\n\n\
         {ADVISOR_PROMPT_FOOTER}",
        temp = weather.temperature_c,
        humidity = weather.humidity_pct,
        condition = weather.condition_main,
        crops = profile.crops.join(", "),
        soil = profile.soil_type,
    );
    trace!(len = content.len(), "Built advisory prompt");

    Ok(Prompt {
        role: Role::System,
        content,
    })
}
