// ============================================================
// Layer 5: Inferencer
// ============================================================
// Calls the loaded pipeline with one feature row and returns
// one estimate. The pipeline is opaque here; the inferencer only
// guarantees the caller never sees NaN or an infinity.
use crate::domain::error::PredictError;
use crate::domain::features::FeatureVector;
use crate::domain::traits::InferencePipeline;

pub struct Inferencer {
    pipeline: Box<dyn InferencePipeline>,
}

impl Inferencer {
    pub fn new(pipeline: impl InferencePipeline + 'static) -> Self {
        Self { pipeline: Box::new(pipeline) }
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let value = self.pipeline.predict(features)?;
        if !value.is_finite() {
            return Err(PredictError::NonFinitePrediction { value });
        }
        tracing::debug!("Pipeline returned {:.4} days for {} features", value, features.len());
        Ok(value)
    }
}
