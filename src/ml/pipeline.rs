// ============================================================
// Layer 5: Regression Pipeline Artifact
// ============================================================
// The serialised model produced by the offline training job.
//
// A pipeline has three stages, applied in order:
//
//   1. Column transform, one transformer per input column:
//        categorical → one-hot over the training categories
//        numeric     → (x - mean) / scale
//   2. Linear regressor: intercept + Σ coefficient_i · x_i
//      over the concatenated encoded row
//   3. Optional output clip
//
// Artifact format (model/time_to_hire_model.json):
//
//   {
//     "columns": [
//       { "name": "Job_Family",
//         "transform": { "kind": "categorical",
//                        "categories": ["HR", "Operations", ...],
//                        "handle_unknown": "ignore" } },
//       { "name": "Job_Role",
//         "transform": { "kind": "numeric", "mean": 0.05, "scale": 0.02 } },
//       ...
//     ],
//     "regressor": { "kind": "linear",
//                    "intercept": 27.5,
//                    "coefficients": [ ... ] },
//     "clip": { "min": 1.0 }
//   }
//
// The pipeline owns the training schema: a row whose column names,
// order, or cell kinds differ is rejected with PredictError::Schema.

use serde::{Deserialize, Serialize};

use crate::domain::error::PredictError;
use crate::domain::features::{FeatureValue, FeatureVector};
use crate::domain::traits::InferencePipeline;

/// What to do with a categorical label not seen during training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Encode as all zeros
    #[default]
    Ignore,
    /// Fail the request with a schema error
    Error,
}

fn unit_scale() -> f64 {
    1.0
}

/// Per-column preprocessing step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnTransform {
    Categorical {
        categories: Vec<String>,
        #[serde(default)]
        handle_unknown: HandleUnknown,
    },
    Numeric {
        #[serde(default)]
        mean: f64,
        #[serde(default = "unit_scale")]
        scale: f64,
    },
}

impl ColumnTransform {
    /// Number of encoded values this column contributes.
    pub fn width(&self) -> usize {
        match self {
            ColumnTransform::Categorical { categories, .. } => categories.len(),
            ColumnTransform::Numeric { .. }                 => 1,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ColumnTransform::Categorical { .. } => "categorical",
            ColumnTransform::Numeric { .. }     => "numeric",
        }
    }

    /// Append this column's encoding of `value` to `row`.
    fn encode_into(
        &self,
        column: &str,
        value:  &FeatureValue,
        row:    &mut Vec<f64>,
    ) -> Result<(), PredictError> {
        match (self, value) {
            (
                ColumnTransform::Categorical { categories, handle_unknown },
                FeatureValue::Categorical(label),
            ) => {
                let hit = categories.iter().position(|c| c == label);
                if hit.is_none() && *handle_unknown == HandleUnknown::Error {
                    return Err(PredictError::schema(format!(
                        "column '{column}' has unknown category '{label}'"
                    )));
                }
                row.extend((0..categories.len()).map(|i| if Some(i) == hit { 1.0 } else { 0.0 }));
                Ok(())
            }
            (ColumnTransform::Numeric { mean, scale }, FeatureValue::Numeric(x)) => {
                // A zero-variance column was scaled by 1 at training time
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                row.push((x - mean) / scale);
                Ok(())
            }
            (transform, value) => Err(PredictError::schema(format!(
                "column '{column}' expects a {} value, got {}",
                transform.kind(),
                value.kind(),
            ))),
        }
    }
}

/// One expected input column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name:      String,
    pub transform: ColumnTransform,
}

/// Final estimator applied to the encoded row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    Linear {
        intercept:    f64,
        coefficients: Vec<f64>,
    },
}

impl Regressor {
    fn input_width(&self) -> usize {
        match self {
            Regressor::Linear { coefficients, .. } => coefficients.len(),
        }
    }

    fn apply(&self, row: &[f64]) -> f64 {
        match self {
            Regressor::Linear { intercept, coefficients } => {
                intercept + coefficients.iter().zip(row).map(|(c, x)| c * x).sum::<f64>()
            }
        }
    }
}

/// Optional bounds on the output, e.g. to keep estimates positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputClip {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl OutputClip {
    fn apply(&self, value: f64) -> f64 {
        let value = self.min.map_or(value, |lo| value.max(lo));
        self.max.map_or(value, |hi| value.min(hi))
    }
}

/// A deserialised training pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionPipeline {
    pub columns:   Vec<ColumnSpec>,
    pub regressor: Regressor,
    #[serde(default)]
    pub clip:      Option<OutputClip>,
}

impl RegressionPipeline {
    /// Column names in training order.
    pub fn feature_names_in(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Width of the encoded row fed to the regressor.
    pub fn encoded_width(&self) -> usize {
        self.columns.iter().map(|c| c.transform.width()).sum()
    }

    /// Internal consistency checks, run once when the artifact loads.
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.columns.is_empty() {
            return Err(PredictError::schema("pipeline declares no input columns"));
        }

        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(PredictError::schema(format!("duplicate column '{}'", col.name)));
            }
            if let ColumnTransform::Numeric { mean, scale } = &col.transform {
                if !mean.is_finite() || !scale.is_finite() {
                    return Err(PredictError::schema(format!(
                        "column '{}' has non-finite scaling parameters",
                        col.name
                    )));
                }
            }
        }

        let expected = self.encoded_width();
        let actual   = self.regressor.input_width();
        if expected != actual {
            return Err(PredictError::schema(format!(
                "regressor has {actual} coefficients but the encoded row has {expected} values"
            )));
        }
        Ok(())
    }

    /// Check names and order, then encode every column.
    pub fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, PredictError> {
        if !self.feature_names_in().eq(features.names()) {
            return Err(PredictError::schema(format!(
                "expected columns [{}], got [{}]",
                self.feature_names_in().collect::<Vec<_>>().join(", "),
                features.names().collect::<Vec<_>>().join(", "),
            )));
        }

        let mut row = Vec::with_capacity(self.encoded_width());
        for (spec, feature) in self.columns.iter().zip(features.features()) {
            spec.transform.encode_into(&spec.name, &feature.value, &mut row)?;
        }
        Ok(row)
    }
}

impl InferencePipeline for RegressionPipeline {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let row   = self.transform(features)?;
        let value = self.regressor.apply(&row);
        // f64::max/min swallow NaN, so the check must come before the clip
        if !value.is_finite() {
            return Err(PredictError::NonFinitePrediction { value });
        }
        Ok(self.clip.map_or(value, |clip| clip.apply(value)))
    }
}
