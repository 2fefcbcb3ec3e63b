use serde::{Deserialize, Serialize};

/// Statutory turnout floor: at least a quarter of eligible voters must
/// cast a ballot. Inclusive.
pub const MIN_TURNOUT: f64 = 0.25;

/// Statutory approval bar: approvals must exceed half of cast ballots.
/// Exclusive.
pub const APPROVAL_BAR: f64 = 0.50;

/// Outcome of the statutory test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Pass,
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// The statutory rule. PASS iff turnout >= 25% AND approval > 50%.
/// Note the asymmetry: the turnout floor is inclusive, the approval bar
/// is exclusive.
pub fn evaluate(turnout: f64, approval: f64) -> Verdict {
    if turnout >= MIN_TURNOUT && approval > APPROVAL_BAR {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_pass() {
        assert_eq!(evaluate(0.4, 0.6), Verdict::Pass);
    }

    #[test]
    fn test_clear_fail() {
        assert_eq!(evaluate(0.1, 0.3), Verdict::Fail);
    }

    #[test]
    fn test_exact_boundaries_fail() {
        // Turnout floor is met inclusively, but approval sits exactly
        // on the exclusive bar.
        assert_eq!(evaluate(0.25, 0.50), Verdict::Fail);
    }

    #[test]
    fn test_epsilon_above_boundaries_pass() {
        assert_eq!(evaluate(0.2500001, 0.5000001), Verdict::Pass);
    }

    #[test]
    fn test_turnout_floor_is_inclusive() {
        assert_eq!(evaluate(0.25, 0.51), Verdict::Pass);
        assert_eq!(evaluate(0.2499999, 0.51), Verdict::Fail);
    }

    #[test]
    fn test_approval_bar_is_exclusive() {
        assert_eq!(evaluate(0.30, 0.50), Verdict::Fail);
        assert_eq!(evaluate(0.30, 0.5000001), Verdict::Pass);
    }
}
