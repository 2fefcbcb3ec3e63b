use super::AgeGroup;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recall target as registered in configuration.
///
/// Immutable for the duration of a prediction run. The `intensity`
/// coefficient captures how much national attention the target draws;
/// the documented range is [0.8, 1.8] (local councilor to top-profile
/// national figure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecallTarget {
    pub id: String,
    pub name: String,
    /// District key for the regional multiplier table, e.g. "taipei".
    pub district: String,
    /// Political intensity coefficient.
    pub intensity: f64,
    /// Per-age population share overrides for districts whose age mix
    /// departs from the national table. Fractions in [0,1].
    #[serde(default)]
    pub population_overrides: HashMap<AgeGroup, f64>,
    /// Historical turnout ratio for comparable votes in this district.
    #[serde(default)]
    pub historical_turnout: Option<f64>,
    /// Local mobilization capacity in [0,1]; 0.5 is neutral.
    #[serde(default)]
    pub mobilization: Option<f64>,
}

impl RecallTarget {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        district: impl Into<String>,
        intensity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            district: district.into(),
            intensity,
            population_overrides: HashMap::new(),
            historical_turnout: None,
            mobilization: None,
        }
    }

    pub fn with_historical_turnout(mut self, turnout: f64) -> Self {
        self.historical_turnout = Some(turnout);
        self
    }

    pub fn with_mobilization(mut self, mobilization: f64) -> Self {
        self.mobilization = Some(mobilization);
        self
    }
}
