// ============================================================
// Layer 3: Domain Errors
// ============================================================
// Two error types live here:
//
//   ParseFieldError: a form label that is not one of the
//                    allowed options (e.g. "Band_9").
//
//   PredictError:    the per-request failure taxonomy.
//                    EmptyJobRole is recoverable and shown to
//                    the user as a warning. Schema and
//                    NonFinitePrediction abort the request.
//
// Artifact-load and log-write failures are boundary errors and
// travel as anyhow::Error from the infra layer instead.

use thiserror::Error;

/// A form value that does not match any allowed option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} '{value}' (expected one of: {expected})")]
pub struct ParseFieldError {
    /// Human readable field name, e.g. "job band"
    pub field: &'static str,

    /// The rejected input, verbatim
    pub value: String,

    /// Comma separated list of accepted labels
    pub expected: String,
}

impl ParseFieldError {
    pub fn new<'a>(
        field:    &'static str,
        value:    impl Into<String>,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            field,
            value:    value.into(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

/// Failures of a single prediction request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// The job role was empty or whitespace only.
    /// Checked before the encoder or the pipeline is touched.
    #[error("job role must not be empty")]
    EmptyJobRole,

    /// The assembled feature vector does not match what the
    /// loaded pipeline was trained on.
    #[error("feature schema mismatch: {reason}")]
    Schema { reason: String },

    /// The pipeline returned NaN or an infinity.
    #[error("pipeline produced a non-finite prediction ({value})")]
    NonFinitePrediction { value: f64 },
}

impl PredictError {
    /// Shorthand for building a schema error from any message.
    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema { reason: reason.into() }
    }

    /// True for errors the user can fix by editing the form.
    pub fn is_validation(&self) -> bool {
        matches!(self, PredictError::EmptyJobRole)
    }
}
