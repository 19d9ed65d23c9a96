// ============================================================
// Layer 3: Prediction Result
// ============================================================

use crate::domain::features::FeatureVector;

/// The pipeline's estimate together with the exact row it was
/// computed from. Both the renderer and the logger read from here,
/// so they always agree on the number shown and the number stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub features: FeatureVector,

    /// Raw model output in days, always finite
    pub raw_days: f64,
}

impl Prediction {
    pub fn new(features: FeatureVector, raw_days: f64) -> Self {
        Self { features, raw_days }
    }

    /// Whole days, truncated toward zero (21.9 → 21, -0.4 → 0).
    pub fn days(&self) -> i64 {
        self.raw_days.trunc() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(raw: f64) -> Prediction {
        Prediction::new(FeatureVector::from_features(Vec::new()), raw)
    }

    #[test]
    fn test_days_truncates_toward_zero() {
        assert_eq!(prediction(21.0).days(), 21);
        assert_eq!(prediction(21.9).days(), 21);
        assert_eq!(prediction(-0.4).days(), 0);
        assert_eq!(prediction(-3.7).days(), -3);
    }
}
