// ============================================================
// Layer 1: Result Renderer
// ============================================================
// Turns a prediction into the result panel shown to the user.
// Stateless; the number comes from Prediction::days() so it is
// always the same value the logger wrote.

use crate::domain::prediction::Prediction;

pub const MISSING_JOB_ROLE_WARNING: &str = "⚠ Please enter a Job Role.";

/// The result panel for a whole number of days.
pub fn render_days(days: i64) -> String {
    format!(
        "\n⏱ Estimated Time to Hire\n\
         {days} Days\n\
         Prediction based on historical hiring patterns\n"
    )
}

pub fn render_prediction(prediction: &Prediction) -> String {
    render_days(prediction.days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::FeatureVector;

    #[test]
    fn test_panel_shows_whole_days() {
        let p   = Prediction::new(FeatureVector::from_features(Vec::new()), 21.0);
        let out = render_prediction(&p);
        assert!(out.contains("Estimated Time to Hire"));
        assert!(out.lines().any(|l| l == "21 Days"));
    }

    #[test]
    fn test_fraction_is_truncated_not_rounded() {
        let p = Prediction::new(FeatureVector::from_features(Vec::new()), 34.99);
        assert!(render_prediction(&p).contains("\n34 Days\n"));
    }
}
