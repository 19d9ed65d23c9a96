// ============================================================
// Layer 2: PredictUseCase
// ============================================================
// Orchestrates one prediction, in order:
//
//   Step 1: Guard: job role must not be empty    (Layer 3 - domain)
//   Step 2: Frequency-encode the job role        (Layer 5 - ml)
//   Step 3: Assemble the training-schema row     (Layer 3 - domain)
//   Step 4: Run the pipeline                     (Layer 5 - ml)
//   Step 5: Append the prediction log row        (Layer 6 - infra)
//
// Steps 1-4 are the pure `handle_predict`. Step 5 is the only I/O
// and happens before the caller displays anything, so every result
// the user sees has a matching log row.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::domain::error::PredictError;
use crate::domain::features::FeatureVector;
use crate::domain::hiring::InputRecord;
use crate::domain::prediction::Prediction;
use crate::domain::traits::{InferencePipeline, PredictionSink};
use crate::infra::{artifacts::ArtifactStore, prediction_log::PredictionLogger};
use crate::ml::{encoder::FrequencyTable, inferencer::Inferencer};

// ─── Application Configuration ───────────────────────────────────────────────
// Where the artifacts are read from and where the log is written.
// Serialisable so a deployment can pin its paths in a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub model_path:     String,
    pub frequency_path: String,
    pub log_path:       String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path:     "model/time_to_hire_model.json".to_string(),
            frequency_path: "model/job_role_frequency.json".to_string(),
            log_path:       "data/prediction_logs.csv".to_string(),
        }
    }
}

impl AppConfig {
    /// Read a config file. Keys left out keep their default value.
    /// Unknown keys are an error, so a misspelt path cannot fall
    /// back to the default silently.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Config '{}' is not valid JSON", path.display()))
    }
}

// ─── Artifacts ───────────────────────────────────────────────────────────────
/// Read-only state loaded once at startup and borrowed by every request.
pub struct Artifacts {
    pub inferencer:  Inferencer,
    pub frequencies: FrequencyTable,
}

impl Artifacts {
    pub fn new(pipeline: impl InferencePipeline + 'static, frequencies: FrequencyTable) -> Self {
        Self {
            inferencer: Inferencer::new(pipeline),
            frequencies,
        }
    }
}

/// Validate, encode, assemble, and infer. Touches no files.
pub fn handle_predict(input: &InputRecord, artifacts: &Artifacts) -> Result<Prediction, PredictError> {
    input.validate()?;

    let frequency = artifacts.frequencies.encode(&input.job_role);
    if !artifacts.frequencies.contains(&input.job_role) {
        tracing::debug!("Job role '{}' not in frequency table, encoding as 0", input.job_role);
    }

    let features = FeatureVector::assemble(input, frequency);
    let raw_days = artifacts.inferencer.predict(&features)?;

    Ok(Prediction::new(features, raw_days))
}

/// Result of one predict action that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictOutcome {
    /// The prediction was made and logged.
    Predicted(Prediction),

    /// The form was rejected before inference. Nothing was logged.
    Rejected(PredictError),
}

// ─── PredictUseCase ──────────────────────────────────────────────────────────
pub struct PredictUseCase {
    artifacts: Artifacts,
    sink:      Box<dyn PredictionSink>,
}

impl PredictUseCase {
    /// Load the artifacts named by `config`. Fails if either is
    /// missing or corrupt.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store     = ArtifactStore::new(&config.model_path, &config.frequency_path);
        let artifacts = store.load()?;
        let logger    = PredictionLogger::new(&config.log_path);
        tracing::info!("Logging predictions to '{}'", logger.csv_path().display());
        Ok(Self::with_parts(artifacts, logger))
    }

    pub fn with_parts(artifacts: Artifacts, sink: impl PredictionSink + 'static) -> Self {
        Self { artifacts, sink: Box::new(sink) }
    }

    /// Run one prediction and log it.
    ///
    /// Validation failures come back as `Ok(Rejected)`. Schema,
    /// non-finite output, and log write failures are errors.
    pub fn execute(&self, input: &InputRecord) -> Result<PredictOutcome> {
        let prediction = match handle_predict(input, &self.artifacts) {
            Ok(p) => p,
            Err(e) if e.is_validation() => {
                tracing::warn!("Prediction rejected: {e}");
                return Ok(PredictOutcome::Rejected(e));
            }
            Err(e) => return Err(e).context("Prediction failed"),
        };

        self.sink.record(&prediction).context("Prediction succeeded but could not be logged")?;

        tracing::info!(
            "Predicted {} days for '{}' ({}, {}, {})",
            prediction.days(),
            input.job_role,
            input.job_family,
            input.job_band,
            input.city,
        );
        Ok(PredictOutcome::Predicted(prediction))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::FeatureValue;
    use crate::domain::hiring::{Assessment, CandidateSource, City, JobBand, JobFamily, NoticePeriod};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Returns a fixed estimate and counts how often it was asked.
    struct StubPipeline {
        days:  f64,
        calls: Arc<AtomicUsize>,
    }

    impl InferencePipeline for StubPipeline {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.days)
        }
    }

    struct RejectingPipeline;

    impl InferencePipeline for RejectingPipeline {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, PredictError> {
            Err(PredictError::schema("expected column 'Job_Title'"))
        }
    }

    fn frequencies() -> FrequencyTable {
        [("Data Scientist", 0.072)].into_iter().collect()
    }

    fn stub(days: f64) -> (Artifacts, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let artifacts = Artifacts::new(StubPipeline { days, calls: calls.clone() }, frequencies());
        (artifacts, calls)
    }

    fn scenario(job_role: &str) -> InputRecord {
        InputRecord {
            job_family:              JobFamily::Technology,
            job_role:                job_role.to_string(),
            job_band:                JobBand::Band3,
            experience_years:        5,
            city:                    City::Bangalore,
            candidate_source:        CandidateSource::Referral,
            assessment:              Assessment::Yes,
            notice_period:           NoticePeriod::Days45,
            panel_availability_days: 3,
            interview_rounds:        2,
        }
    }

    fn predicted(outcome: PredictOutcome) -> Prediction {
        match outcome {
            PredictOutcome::Predicted(p) => p,
            other => panic!("expected a prediction, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_role_encodes_as_zero() {
        let (artifacts, _) = stub(21.0);
        let p = handle_predict(&scenario("Data Engineer"), &artifacts).unwrap();
        assert_eq!(p.features.get("Job_Role"), Some(&FeatureValue::Numeric(0.0)));
        assert_eq!(p.days(), 21);
    }

    #[test]
    fn test_known_role_uses_stored_frequency() {
        let (artifacts, _) = stub(21.0);
        let p = handle_predict(&scenario("Data Scientist"), &artifacts).unwrap();
        assert_eq!(p.features.get("Job_Role"), Some(&FeatureValue::Numeric(0.072)));
    }

    #[test]
    fn test_repeated_predictions_are_identical() {
        let (artifacts, _) = stub(17.25);
        let first = handle_predict(&scenario("Data Scientist"), &artifacts).unwrap();
        for _ in 0..5 {
            assert_eq!(handle_predict(&scenario("Data Scientist"), &artifacts).unwrap(), first);
        }
    }

    #[test]
    fn test_empty_role_skips_inference_and_logging() {
        let dir            = tempfile::tempdir().unwrap();
        let log_path       = dir.path().join("data").join("prediction_logs.csv");
        let (artifacts, calls) = stub(21.0);
        let use_case = PredictUseCase::with_parts(artifacts, PredictionLogger::new(&log_path));

        for role in ["", "   "] {
            let outcome = use_case.execute(&scenario(role)).unwrap();
            assert_eq!(outcome, PredictOutcome::Rejected(PredictError::EmptyJobRole));
        }

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!log_path.exists());
    }

    #[test]
    fn test_scenario_logs_twenty_one_days() {
        let dir      = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("data").join("prediction_logs.csv");
        let (artifacts, calls) = stub(21.0);
        let use_case = PredictUseCase::with_parts(artifacts, PredictionLogger::new(&log_path));

        let p = predicted(use_case.execute(&scenario("Data Engineer")).unwrap());
        assert_eq!(p.days(), 21);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let log = fs::read_to_string(&log_path).unwrap();
        let row: Vec<&str> = log.lines().nth(1).unwrap().split(',').collect();
        assert_eq!(
            &row[..11],
            ["Technology", "0", "Band_3", "5", "Bangalore", "3", "2", "Yes", "Referral", "45", "21"]
        );
    }

    #[test]
    fn test_each_success_appends_one_row() {
        let dir      = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("prediction_logs.csv");
        let (artifacts, _) = stub(30.0);
        let use_case = PredictUseCase::with_parts(artifacts, PredictionLogger::new(&log_path));

        for n in 1..=4 {
            use_case.execute(&scenario("Data Scientist")).unwrap();
            // A rejected request in between must not add a row
            use_case.execute(&scenario("")).unwrap();
            let lines = fs::read_to_string(&log_path).unwrap().lines().count();
            assert_eq!(lines, n + 1);
        }
    }

    #[test]
    fn test_schema_error_fails_request_without_logging() {
        let dir      = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("prediction_logs.csv");
        let artifacts = Artifacts::new(RejectingPipeline, frequencies());
        let use_case  = PredictUseCase::with_parts(artifacts, PredictionLogger::new(&log_path));

        let err = use_case.execute(&scenario("Data Scientist")).unwrap_err();
        assert!(format!("{err:#}").contains("feature schema mismatch"));
        assert!(err.downcast_ref::<PredictError>().is_some());
        assert!(!log_path.exists());
    }

    #[test]
    fn test_config_defaults_and_partial_file() {
        assert_eq!(AppConfig::default().log_path, "data/prediction_logs.csv");

        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"log_path": "/tmp/other.csv"}"#).unwrap();

        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.log_path, "/tmp/other.csv");
        assert_eq!(cfg.model_path, AppConfig::default().model_path);
    }

    #[test]
    fn test_config_rejects_misspelt_key() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"modelpath": "elsewhere/model.json"}"#).unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("modelpath"));
    }

    #[test]
    fn test_new_fails_without_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig {
            model_path:     dir.path().join("missing.json").display().to_string(),
            frequency_path: dir.path().join("missing_freq.json").display().to_string(),
            log_path:       dir.path().join("log.csv").display().to_string(),
        };
        assert!(PredictUseCase::new(&cfg).is_err());
    }
}
