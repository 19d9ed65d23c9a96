// ============================================================
// Layer 1: CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `predict` and `interactive`, and
// their flags.
//
// The `predict` flags ARE the form: every field has the same
// default the form starts with, enum fields only accept the
// training labels, and numeric fields are range checked by clap
// before any artifact is loaded.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::predict_use_case::AppConfig;
use crate::domain::hiring::{
    Assessment, CandidateSource, City, InputRecord, JobBand, JobFamily, NoticePeriod,
    EXPERIENCE_MAX, PANEL_DAYS_MAX, ROUNDS_MAX, ROUNDS_MIN,
};

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict time to hire for one hiring request given as flags
    Predict(PredictArgs),

    /// Fill in the form field by field and predict, repeatedly
    Interactive(InteractiveArgs),
}

/// Artifact and log locations shared by both subcommands.
/// Explicit flags win over values from --config.
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// JSON file with model_path, frequency_path and log_path keys
    #[arg(long)]
    pub config: Option<String>,

    /// Trained regression pipeline [default: model/time_to_hire_model.json]
    #[arg(long)]
    pub model_path: Option<String>,

    /// Job role frequency table [default: model/job_role_frequency.json]
    #[arg(long)]
    pub frequency_path: Option<String>,

    /// Prediction log CSV [default: data/prediction_logs.csv]
    #[arg(long)]
    pub log_path: Option<String>,
}

impl ArtifactArgs {
    /// Build the application config: defaults, then --config, then flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut cfg = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None       => AppConfig::default(),
        };
        if let Some(p) = &self.model_path     { cfg.model_path     = p.clone(); }
        if let Some(p) = &self.frequency_path { cfg.frequency_path = p.clone(); }
        if let Some(p) = &self.log_path       { cfg.log_path       = p.clone(); }
        Ok(cfg)
    }
}

/// The hiring request form, one flag per field.
#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Job family: Technology, Sales, HR, Operations
    #[arg(long, default_value = "Technology")]
    pub job_family: JobFamily,

    /// Job role, free text, e.g. "Data Engineer"
    #[arg(long, default_value = "")]
    pub job_role: String,

    /// Job band: Band_1 .. Band_6
    #[arg(long, default_value = "Band_1")]
    pub job_band: JobBand,

    /// Experience required, in years
    #[arg(long, default_value_t = 3,
          value_parser = clap::value_parser!(u32).range(0..=i64::from(EXPERIENCE_MAX)))]
    pub experience: u32,

    /// City: Bangalore, Hyderabad, Chennai, Tokyo, Osaka, Beijing, Shanghai
    #[arg(long, default_value = "Bangalore")]
    pub city: City,

    /// Candidate source: LinkedIn, Naukri, Referral, Consultant, Other
    #[arg(long, default_value = "LinkedIn")]
    pub candidate_source: CandidateSource,

    /// Assessment included: Yes or No
    #[arg(long, default_value = "Yes")]
    pub assessment: Assessment,

    /// Notice period in days: 30, 45, 60 or 90
    #[arg(long, default_value = "30")]
    pub notice: NoticePeriod,

    /// Days until the interview panel is available
    #[arg(long, default_value_t = 3,
          value_parser = clap::value_parser!(u32).range(0..=i64::from(PANEL_DAYS_MAX)))]
    pub panel_days: u32,

    /// Total interview rounds
    #[arg(long, default_value_t = 2,
          value_parser = clap::value_parser!(u32)
              .range(i64::from(ROUNDS_MIN)..=i64::from(ROUNDS_MAX)))]
    pub rounds: u32,
}

/// Convert the form flags into the domain record.
/// The application layer never sees clap types.
impl From<FormArgs> for InputRecord {
    fn from(a: FormArgs) -> Self {
        InputRecord {
            job_family:              a.job_family,
            job_role:                a.job_role,
            job_band:                a.job_band,
            experience_years:        a.experience,
            city:                    a.city,
            candidate_source:        a.candidate_source,
            assessment:              a.assessment,
            notice_period:           a.notice,
            panel_availability_days: a.panel_days,
            interview_rounds:        a.rounds,
        }
    }
}

/// All arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}

/// All arguments for the `interactive` command
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}
