// ============================================================
// Layer 6: Artifact Store
// ============================================================
// Loads the two read-only artifacts produced by offline training:
//
//   model/time_to_hire_model.json   ← RegressionPipeline
//   model/job_role_frequency.json   ← FrequencyTable
//
// Both are loaded exactly once, at startup. Any failure here
// (missing file, bad JSON, inconsistent pipeline) is fatal: the
// application refuses to serve requests without its model.

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::application::predict_use_case::Artifacts;
use crate::ml::encoder::FrequencyTable;
use crate::ml::pipeline::RegressionPipeline;

/// Knows where the artifacts live and how to deserialise them.
pub struct ArtifactStore {
    model_path:     PathBuf,
    frequency_path: PathBuf,
}

impl ArtifactStore {
    pub fn new(model_path: impl Into<PathBuf>, frequency_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path:     model_path.into(),
            frequency_path: frequency_path.into(),
        }
    }

    /// Load both artifacts into a ready-to-serve context.
    pub fn load(&self) -> Result<Artifacts> {
        let pipeline    = self.load_pipeline()?;
        let frequencies = self.load_frequency_table()?;
        Ok(Artifacts::new(pipeline, frequencies))
    }

    /// Deserialise and sanity-check the regression pipeline.
    pub fn load_pipeline(&self) -> Result<RegressionPipeline> {
        let json = read_artifact(&self.model_path, "model pipeline")?;

        let pipeline: RegressionPipeline = serde_json::from_str(&json)
            .with_context(|| {
                format!("Model pipeline '{}' is not valid JSON", self.model_path.display())
            })?;

        pipeline
            .validate()
            .with_context(|| {
                format!("Model pipeline '{}' is inconsistent", self.model_path.display())
            })?;

        tracing::info!(
            "Loaded model pipeline from '{}' ({} columns, {} encoded features)",
            self.model_path.display(),
            pipeline.columns.len(),
            pipeline.encoded_width(),
        );
        Ok(pipeline)
    }

    /// Deserialise the job role frequency table.
    pub fn load_frequency_table(&self) -> Result<FrequencyTable> {
        let json = read_artifact(&self.frequency_path, "job role frequency table")?;

        let table: FrequencyTable = serde_json::from_str(&json)
            .with_context(|| {
                format!(
                    "Frequency table '{}' must be a JSON object of role → number",
                    self.frequency_path.display()
                )
            })?;

        if table.is_empty() {
            tracing::warn!("Frequency table is empty; every job role will encode as 0");
        }
        tracing::info!(
            "Loaded {} job role frequencies from '{}'",
            table.len(),
            self.frequency_path.display(),
        );
        Ok(table)
    }
}

fn read_artifact(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| {
        format!(
            "Cannot read {what} from '{}'. \
             Train the model and export its artifacts first.",
            path.display()
        )
    })
}
