//! Inputs to advice generation: the farm profile and the current weather.
//!
//! Both are owned by external collaborators (the profile store and the
//! weather provider). This module only knows their document shapes well
//! enough to turn them into the typed values the prompt builder consumes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Silt,
}

impl SoilType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "clay",
            SoilType::Sandy => "sandy",
            SoilType::Loamy => "loamy",
            SoilType::Silt => "silt",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Farm coordinates. A blank coordinate in the document is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "lenient_coord")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub longitude: Option<f64>,
}

/// A farm as stored in the profile document.
///
/// `crops` is accepted either as a JSON array or as the comma-separated
/// string the profile form writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarmProfile {
    #[serde(deserialize_with = "crop_list")]
    pub crops: Vec<String>,
    pub soil_type: SoilType,
    #[serde(default)]
    pub location: Location,
}

impl FarmProfile {
    pub fn from_document(doc: &str) -> serde_json::Result<Self> {
        let profile: FarmProfile = serde_json::from_str(doc)?;
        trace!(crops = ?profile.crops, soil = %profile.soil_type, "Loaded farm profile");
        Ok(profile)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub condition_main: String,
    pub has_precipitation: bool,
}

impl WeatherObservation {
    /// Decode a current-weather document from the weather provider.
    pub fn from_provider_payload(payload: &str) -> serde_json::Result<Self> {
        let raw: ProviderWeather = serde_json::from_str(payload)?;
        Ok(raw.into())
    }
}

/// Current-weather document as returned by the provider (metric units).
#[derive(Debug, Deserialize)]
pub struct ProviderWeather {
    pub main: ProviderMain,
    #[serde(default)]
    pub weather: Vec<ProviderCondition>,
    #[serde(default)]
    pub rain: Option<serde_json::Value>,
    #[serde(default)]
    pub snow: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ProviderMain {
    pub temp: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct ProviderCondition {
    pub main: String,
}

impl From<ProviderWeather> for WeatherObservation {
    fn from(raw: ProviderWeather) -> Self {
        let condition_main = raw
            .weather
            .into_iter()
            .next()
            .map(|c| c.main)
            .unwrap_or_else(|| "Unknown".to_string());
        Self {
            temperature_c: raw.main.temp,
            humidity_pct: raw.main.humidity,
            condition_main,
            has_precipitation: raw.rain.is_some() || raw.snow.is_some(),
        }
    }
}

fn crop_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Crops {
        List(Vec<String>),
        Joined(String),
    }

    let raw = match Crops::deserialize(deserializer)? {
        Crops::List(list) => list,
        Crops::Joined(text) => text.split(',').map(str::to_string).collect(),
    };
    Ok(raw
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect())
}

// The profile form stores coordinates as text and starts them out empty.
fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coord {
        Number(f64),
        Text(String),
    }

    match Option::<Coord>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Coord::Number(n)) => Ok(Some(n)),
        Some(Coord::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Coord::Text(s)) => s.trim().parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}
