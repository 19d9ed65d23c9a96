// ============================================================
// Layer 3: Feature Vector
// ============================================================
// The single-row table handed to the inference pipeline.
//
// It is the InputRecord with the free-text job role replaced by
// its frequency score. Column names and order are fixed to the
// training-time schema:
//
//   Job_Family, Job_Role, Job_Band, Experience_Required_Years,
//   City, Interview_Panel_Availability, Total_Interview_Rounds,
//   Assessment_Included, Candidate_Source, Notice_Period_Days
//
// The same column list (plus two trailing columns) is the
// header of the prediction log.

use std::fmt;

use crate::domain::hiring::InputRecord;

/// Training-time column order.
pub const FEATURE_COLUMNS: [&str; 10] = [
    "Job_Family",
    "Job_Role",
    "Job_Band",
    "Experience_Required_Years",
    "City",
    "Interview_Panel_Availability",
    "Total_Interview_Rounds",
    "Assessment_Included",
    "Candidate_Source",
    "Notice_Period_Days",
];

/// A single cell of the feature row.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// A label the pipeline one-hot encodes, e.g. "Band_3"
    Categorical(String),

    /// A number the pipeline scales, e.g. 5 or 0.072
    Numeric(f64),
}

impl FeatureValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FeatureValue::Categorical(_) => "categorical",
            FeatureValue::Numeric(_)     => "numeric",
        }
    }
}

/// Numbers print in shortest round-trip form: 5.0 as "5", 0.072 as "0.072".
impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Categorical(label) => f.write_str(label),
            FeatureValue::Numeric(n)         => write!(f, "{n}"),
        }
    }
}

/// One named cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub name:  String,
    pub value: FeatureValue,
}

impl Feature {
    pub fn categorical(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { name: name.into(), value: FeatureValue::Categorical(label.into()) }
    }

    pub fn numeric(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value: FeatureValue::Numeric(value) }
    }
}

/// An ordered, named, single-row feature table.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    features: Vec<Feature>,
}

impl FeatureVector {
    /// Build the training-schema row from a form record and the
    /// job role's frequency score.
    pub fn assemble(record: &InputRecord, job_role_frequency: f64) -> Self {
        let [family, role, band, experience, city, panel, rounds, assessment, source, notice] =
            FEATURE_COLUMNS;

        Self::from_features(vec![
            Feature::categorical(family,     record.job_family.as_str()),
            Feature::numeric(role,           job_role_frequency),
            Feature::categorical(band,       record.job_band.as_str()),
            Feature::numeric(experience,     f64::from(record.experience_years)),
            Feature::categorical(city,       record.city.as_str()),
            Feature::numeric(panel,          f64::from(record.panel_availability_days)),
            Feature::numeric(rounds,         f64::from(record.interview_rounds)),
            Feature::categorical(assessment, record.assessment.as_str()),
            Feature::categorical(source,     record.candidate_source.as_str()),
            Feature::numeric(notice,         f64::from(record.notice_period.days())),
        ])
    }

    /// Wrap an arbitrary row. Used by tests and by callers that
    /// need to probe a pipeline with a non-standard schema.
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(|f| f.name.as_str())
    }

    /// Look up a cell by column name.
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.features.iter().find(|f| f.name == name).map(|f| &f.value)
    }
}
