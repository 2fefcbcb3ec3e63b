use serde::{Deserialize, Serialize};
use tracing::warn;

/// One analysis axis's contribution to the final prediction.
///
/// The coefficient always lies within the documented bounds for its
/// dimension; scorers clamp out-of-range inputs rather than failing and
/// record the event in `clamped` and the rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    /// Dimension key, e.g. "sentiment.youth" or "weather".
    pub dimension: String,
    pub coefficient: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Derivation notes and source labels, kept for auditability.
    pub rationale: String,
    /// True when an out-of-range input had to be clamped into bounds.
    pub clamped: bool,
}

impl DimensionScore {
    /// Build a score, clamping the coefficient into `[lower, upper]`.
    /// Non-finite coefficients fall back to the midpoint of the bounds.
    pub fn new(
        dimension: impl Into<String>,
        coefficient: f64,
        (lower, upper): (f64, f64),
        rationale: impl Into<String>,
    ) -> Self {
        let dimension = dimension.into();
        let mut rationale = rationale.into();
        let mut clamped = false;

        // Misconfigured bounds must not panic the pipeline.
        let (lower, upper) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };

        let bounded = if !coefficient.is_finite() {
            clamped = true;
            (lower + upper) / 2.0
        } else if coefficient < lower || coefficient > upper {
            clamped = true;
            coefficient.clamp(lower, upper)
        } else {
            coefficient
        };

        if clamped {
            warn!(
                dimension = %dimension,
                raw = coefficient,
                clamped_to = bounded,
                "dimension coefficient out of bounds, clamped"
            );
            rationale.push_str(&format!(" [clamped from {coefficient}]"));
        }

        Self {
            dimension,
            coefficient: bounded,
            lower_bound: lower,
            upper_bound: upper,
            rationale,
            clamped,
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        self.coefficient >= self.lower_bound && self.coefficient <= self.upper_bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds_coefficient_kept() {
        let s = DimensionScore::new("media.youth", 0.9, (0.5, 1.5), "platform mix");
        assert_eq!(s.coefficient, 0.9);
        assert!(!s.clamped);
        assert!(s.is_within_bounds());
    }

    #[test]
    fn test_out_of_bounds_coefficient_clamped() {
        let s = DimensionScore::new("media.youth", 2.3, (0.5, 1.5), "platform mix");
        assert_eq!(s.coefficient, 1.5);
        assert!(s.clamped);
        assert!(s.rationale.contains("clamped"));
    }

    #[test]
    fn test_nan_falls_back_to_midpoint() {
        let s = DimensionScore::new("weather", f64::NAN, (0.5, 1.0), "obs");
        assert_eq!(s.coefficient, 0.75);
        assert!(s.clamped);
    }
}
