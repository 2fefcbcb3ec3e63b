use serde::{Deserialize, Serialize};

/// Qualitative weather state on voting day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Rain,
    TorrentialRain,
    Typhoon,
    ExtremeHeat,
}

impl WeatherCondition {
    /// Conditions severe enough to suppress turnout on their own.
    pub fn is_severe(&self) -> bool {
        matches!(
            self,
            WeatherCondition::TorrentialRain
                | WeatherCondition::Typhoon
                | WeatherCondition::ExtremeHeat
        )
    }
}

/// Forecast observation for the voting-day window. Optional input to
/// the pipeline; absence means a neutral weather coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub rainfall_mm: f64,
    pub condition: WeatherCondition,
}

impl WeatherObservation {
    pub fn new(temperature_c: f64, rainfall_mm: f64, condition: WeatherCondition) -> Self {
        Self {
            temperature_c,
            rainfall_mm,
            condition,
        }
    }
}
