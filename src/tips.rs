use tracing::trace;

use crate::farm::WeatherObservation;

pub const HIGH_TEMPERATURE_C: f64 = 30.0;
pub const HIGH_HUMIDITY_PCT: f64 = 80.0;

pub const HEAT_TIP: &str = "High temperature alert: Consider additional irrigation";
pub const HUMIDITY_TIP: &str = "High humidity: Monitor for potential fungal diseases";
pub const RAIN_TIP: &str = "Rain expected: Hold off on irrigation";

/// Weather-only tips for the overview screen. No model is consulted.
pub fn quick_tips(weather: &WeatherObservation) -> Vec<&'static str> {
    let mut tips = Vec::new();
    if weather.temperature_c > HIGH_TEMPERATURE_C {
        tips.push(HEAT_TIP);
    }
    if weather.humidity_pct > HIGH_HUMIDITY_PCT {
        tips.push(HUMIDITY_TIP);
    }
    if weather.has_precipitation {
        tips.push(RAIN_TIP);
    }
    trace!(count = tips.len(), "quick tips");
    tips
}
