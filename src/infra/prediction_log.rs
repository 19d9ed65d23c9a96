// ============================================================
// Layer 6: Prediction Logger
// ============================================================
// Appends one CSV row per successful prediction.
//
// Output file: data/prediction_logs.csv (configurable)
//
// Columns, in order:
//   the ten feature columns (see domain::features),
//   Predicted_Time_to_Hire, Prediction_Timestamp
//
// Example CSV output:
//   Job_Family,Job_Role,Job_Band,...,Notice_Period_Days,Predicted_Time_to_Hire,Prediction_Timestamp
//   Technology,0,Band_3,5,Bangalore,3,2,Yes,Referral,45,21,2026-10-17 14:03:22.481337
//
// Numbers below 1e-4 or from 1e16 up are written in exponent form
// with a signed two-digit exponent ("1e-07"), so a rare job role's
// frequency reads the same as in the training exports. The
// timestamp drops the fraction when it is exactly zero.
//
// The header is written when the file is created (or found
// empty), never again. The parent directory is created on demand.
// The file is append-only with no rotation and no lock; each row
// goes out in a single append-mode write.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, Timelike};
use std::{
    borrow::Cow,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::features::{FeatureValue, FeatureVector, FEATURE_COLUMNS};
use crate::domain::prediction::Prediction;
use crate::domain::traits::PredictionSink;

pub const PREDICTED_COLUMN: &str = "Predicted_Time_to_Hire";
pub const TIMESTAMP_COLUMN: &str = "Prediction_Timestamp";

/// Local time, `YYYY-MM-DD HH:MM:SS`, then `.ffffff` unless the
/// microseconds are zero
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The full log header line, without the trailing newline.
pub fn header() -> String {
    FEATURE_COLUMNS
        .iter()
        .copied()
        .chain([PREDICTED_COLUMN, TIMESTAMP_COLUMN])
        .collect::<Vec<_>>()
        .join(",")
}

/// One row of the prediction log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub features:       FeatureVector,
    pub predicted_days: i64,
    pub timestamp:      NaiveDateTime,
}

impl LogRecord {
    pub fn new(prediction: &Prediction, timestamp: NaiveDateTime) -> Self {
        Self {
            features:       prediction.features.clone(),
            predicted_days: prediction.days(),
            timestamp,
        }
    }

    /// Stamp a prediction with the current local time.
    pub fn now(prediction: &Prediction) -> Self {
        Self::new(prediction, Local::now().naive_local())
    }

    /// The CSV line for this record, without the trailing newline.
    pub fn to_csv_row(&self) -> String {
        let mut fields: Vec<String> = self
            .features
            .features()
            .iter()
            .map(|f| match &f.value {
                FeatureValue::Numeric(n)         => format_number(*n),
                FeatureValue::Categorical(label) => csv_field(label).into_owned(),
            })
            .collect();
        fields.push(self.predicted_days.to_string());
        fields.push(format_timestamp(&self.timestamp));
        fields.join(",")
    }
}

fn format_timestamp(ts: &NaiveDateTime) -> String {
    let micros = (ts.nanosecond() % 1_000_000_000) / 1_000;
    let whole  = ts.format(TIMESTAMP_FORMAT);
    if micros == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{micros:06}")
    }
}

/// Shortest round-trip form, switching to exponent notation outside
/// [1e-4, 1e16).
fn format_number(n: f64) -> String {
    let abs = n.abs();
    if n == 0.0 || !n.is_finite() || (1e-4..1e16).contains(&abs) {
        return n.to_string();
    }
    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None    => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => sci,
    }
}

/// Quote a field only when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Appends prediction rows to a CSV file.
pub struct PredictionLogger {
    csv_path: PathBuf,
}

impl PredictionLogger {
    /// No I/O happens until the first append.
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self { csv_path: csv_path.into() }
    }

    /// Append one record, writing the header first if the file is new.
    pub fn append(&self, record: &LogRecord) -> Result<()> {
        if let Some(dir) = self.csv_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory '{}'", dir.display()))?;
        }

        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open prediction log '{}'", self.csv_path.display()))?;

        let is_new = f.metadata()?.len() == 0;

        let mut chunk = String::new();
        if is_new {
            chunk.push_str(&header());
            chunk.push('\n');
        }
        chunk.push_str(&record.to_csv_row());
        chunk.push('\n');

        f.write_all(chunk.as_bytes())
            .with_context(|| format!("Cannot write to prediction log '{}'", self.csv_path.display()))?;

        if is_new {
            tracing::debug!("Created prediction log: '{}'", self.csv_path.display());
        }
        tracing::debug!("Logged prediction of {} days", record.predicted_days);
        Ok(())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

impl PredictionSink for PredictionLogger {
    fn record(&self, prediction: &Prediction) -> Result<()> {
        self.append(&LogRecord::now(prediction))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hiring::{CandidateSource, InputRecord, JobBand, NoticePeriod};
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_micro_opt(14, 3, 22, 481_337)
            .unwrap()
    }

    fn prediction(role_frequency: f64, raw_days: f64) -> Prediction {
        let record = InputRecord {
            job_role:         "Data Engineer".into(),
            job_band:         JobBand::Band3,
            experience_years: 5,
            candidate_source: CandidateSource::Referral,
            notice_period:    NoticePeriod::Days45,
            ..Default::default()
        };
        Prediction::new(FeatureVector::assemble(&record, role_frequency), raw_days)
    }

    fn lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_header_column_order() {
        assert_eq!(
            header(),
            "Job_Family,Job_Role,Job_Band,Experience_Required_Years,City,\
             Interview_Panel_Availability,Total_Interview_Rounds,Assessment_Included,\
             Candidate_Source,Notice_Period_Days,Predicted_Time_to_Hire,Prediction_Timestamp"
        );
    }

    #[test]
    fn test_row_format() {
        let row = LogRecord::new(&prediction(0.0, 21.7), timestamp()).to_csv_row();
        assert_eq!(
            row,
            "Technology,0,Band_3,5,Bangalore,3,2,Yes,Referral,45,21,2026-10-17 14:03:22.481337"
        );
    }

    #[test]
    fn test_fractional_frequency_is_logged_verbatim() {
        let row = LogRecord::new(&prediction(0.072, 30.0), timestamp()).to_csv_row();
        assert!(row.starts_with("Technology,0.072,Band_3,"));
    }

    #[test]
    fn test_tiny_frequency_uses_exponent_form() {
        let row = LogRecord::new(&prediction(1e-7, 30.0), timestamp()).to_csv_row();
        assert!(row.starts_with("Technology,1e-07,Band_3,"));

        assert_eq!(format_number(1.5e-7), "1.5e-07");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(2.5e-12), "2.5e-12");
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(45.0), "45");
    }

    #[test]
    fn test_whole_second_timestamp_has_no_fraction() {
        let whole = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(9, 0, 5)
            .unwrap();
        let row = LogRecord::new(&prediction(0.0, 21.0), whole).to_csv_row();
        assert!(row.ends_with(",21,2026-10-17 09:00:05"));

        let early = NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_micro_opt(9, 0, 5, 42)
            .unwrap();
        assert_eq!(format_timestamp(&early), "2026-10-17 09:00:05.000042");
    }

    #[test]
    fn test_n_appends_give_n_plus_one_lines() {
        let dir    = tempfile::tempdir().unwrap();
        let logger = PredictionLogger::new(dir.path().join("prediction_logs.csv"));

        for days in [10.0, 20.0, 30.0] {
            logger.append(&LogRecord::new(&prediction(0.0, days), timestamp())).unwrap();
        }

        let lines = lines(logger.csv_path());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], header());
        assert_eq!(lines.iter().filter(|l| **l == header()).count(), 1);
    }

    #[test]
    fn test_existing_log_is_appended_not_rewritten() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.csv");

        PredictionLogger::new(&path)
            .append(&LogRecord::new(&prediction(0.0, 1.0), timestamp()))
            .unwrap();
        // A second logger instance, as after a process restart
        PredictionLogger::new(&path)
            .append(&LogRecord::new(&prediction(0.0, 2.0), timestamp()))
            .unwrap();

        let lines = lines(&path);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.iter().filter(|l| **l == header()).count(), 1);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("log.csv");

        PredictionLogger::new(&path)
            .append(&LogRecord::new(&prediction(0.0, 5.0), timestamp()))
            .unwrap();

        assert!(path.exists());
        assert_eq!(lines(&path).len(), 2);
    }

    #[test]
    fn test_sink_stamps_current_time() {
        let dir    = tempfile::tempdir().unwrap();
        let logger = PredictionLogger::new(dir.path().join("log.csv"));

        logger.record(&prediction(0.0, 21.0)).unwrap();

        let lines = lines(logger.csv_path());
        let stamp = lines[1].rsplit(',').next().unwrap();
        assert!(NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S%.f").is_ok());
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("Band_3"), "Band_3");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
