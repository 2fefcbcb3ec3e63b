/// Confidence tiering by total sample volume.
pub fn sample_confidence(total_samples: u64) -> f64 {
    match total_samples {
        0..=99 => 0.3,
        100..=499 => 0.6,
        500..=999 => 0.8,
        _ => 0.9,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(sample_confidence(0), 0.3);
        assert_eq!(sample_confidence(99), 0.3);
        assert_eq!(sample_confidence(100), 0.6);
        assert_eq!(sample_confidence(499), 0.6);
        assert_eq!(sample_confidence(500), 0.8);
        assert_eq!(sample_confidence(999), 0.8);
        assert_eq!(sample_confidence(1000), 0.9);
        assert_eq!(sample_confidence(u64::MAX), 0.9);
    }
}
