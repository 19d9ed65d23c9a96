// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The two seams of the prediction flow:
//
//   InferencePipeline: the loaded model. The application never
//                      looks inside it; it hands over a row and
//                      gets a number back.
//                      Implementations:
//                        - RegressionPipeline (JSON artifact)
//                        - stub pipelines in tests
//
//   PredictionSink:    where successful predictions are recorded.
//                      Implementations:
//                        - PredictionLogger (CSV file)

use anyhow::Result;

use crate::domain::error::PredictError;
use crate::domain::features::FeatureVector;
use crate::domain::prediction::Prediction;

// ─── InferencePipeline ────────────────────────────────────────────────────────
/// A pre-trained model mapping one feature row to one estimate.
///
/// Implementations must be deterministic: the same row always
/// yields the same number. Any scaling or encoding the model
/// needs happens inside `predict`.
pub trait InferencePipeline: Send + Sync {
    /// Returns `PredictError::Schema` when the row's column names,
    /// order, or cell types differ from the training schema.
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError>;
}

// ─── PredictionSink ───────────────────────────────────────────────────────────
/// Durable record of every successful prediction.
pub trait PredictionSink {
    /// Record one prediction. Called exactly once per success and
    /// never for a rejected or failed request.
    fn record(&self, prediction: &Prediction) -> Result<()>;
}
