// ============================================================
// Layer 3: Hiring Request (Input Record)
// ============================================================
// One hiring-request description as filled in on the form.
//
// Categorical fields are closed enums whose labels are exactly
// the strings the model was trained on ("Band_3", "Referral",
// ...). Parsing is case sensitive: "band_3" is rejected, because
// the pipeline would treat it as an unseen category.
//
// Numeric bounds are enforced by the form, not here. The only
// check this type performs is the non-empty job role guard.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{ParseFieldError, PredictError};

pub const EXPERIENCE_MAX:  u32 = 30;
pub const PANEL_DAYS_MAX:  u32 = 30;
pub const ROUNDS_MIN:      u32 = 1;
pub const ROUNDS_MAX:      u32 = 5;

/// Declares a closed label enum with `ALL`, `as_str`, `Display`
/// and a case-sensitive `FromStr`.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every option, in the order the form lists them.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The training-time label for this option.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseFieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| {
                        ParseFieldError::new($field, s, $name::ALL.iter().map(|v| v.as_str()))
                    })
            }
        }
    };
}

label_enum! {
    /// Broad business function the role belongs to
    JobFamily, "job family" {
        Technology => "Technology",
        Sales      => "Sales",
        Hr         => "HR",
        Operations => "Operations",
    }
}

label_enum! {
    /// Seniority band, Band_1 (entry) to Band_6
    JobBand, "job band" {
        Band1 => "Band_1",
        Band2 => "Band_2",
        Band3 => "Band_3",
        Band4 => "Band_4",
        Band5 => "Band_5",
        Band6 => "Band_6",
    }
}

label_enum! {
    City, "city" {
        Bangalore => "Bangalore",
        Hyderabad => "Hyderabad",
        Chennai   => "Chennai",
        Tokyo     => "Tokyo",
        Osaka     => "Osaka",
        Beijing   => "Beijing",
        Shanghai  => "Shanghai",
    }
}

label_enum! {
    /// Channel the candidate pipeline is sourced from
    CandidateSource, "candidate source" {
        LinkedIn   => "LinkedIn",
        Naukri     => "Naukri",
        Referral   => "Referral",
        Consultant => "Consultant",
        Other      => "Other",
    }
}

label_enum! {
    /// Whether a take-home or online assessment is part of the process.
    /// Kept as a Yes/No label because the model was trained on the text.
    Assessment, "assessment included" {
        Yes => "Yes",
        No  => "No",
    }
}

label_enum! {
    /// Candidate notice period. Only these four values are offered.
    NoticePeriod, "notice period (days)" {
        Days30 => "30",
        Days45 => "45",
        Days60 => "60",
        Days90 => "90",
    }
}

impl NoticePeriod {
    pub fn days(&self) -> u32 {
        match self {
            NoticePeriod::Days30 => 30,
            NoticePeriod::Days45 => 45,
            NoticePeriod::Days60 => 60,
            NoticePeriod::Days90 => 90,
        }
    }
}

/// A hiring request as collected from the form.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub job_family: JobFamily,

    /// Free text. Looked up verbatim in the frequency table.
    pub job_role: String,

    pub job_band: JobBand,

    /// Years of experience required, 0..=EXPERIENCE_MAX
    pub experience_years: u32,

    pub city: City,

    pub candidate_source: CandidateSource,

    pub assessment: Assessment,

    pub notice_period: NoticePeriod,

    /// Days until the interview panel is available, 0..=PANEL_DAYS_MAX
    pub panel_availability_days: u32,

    /// Total interview rounds, ROUNDS_MIN..=ROUNDS_MAX
    pub interview_rounds: u32,
}

impl InputRecord {
    /// True when the job role has at least one non-whitespace character.
    pub fn has_job_role(&self) -> bool {
        !self.job_role.trim().is_empty()
    }

    /// The single guard applied before encoding and inference.
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.has_job_role() {
            Ok(())
        } else {
            Err(PredictError::EmptyJobRole)
        }
    }
}

/// The form's initial values: first option of every list,
/// 3 years experience, 3 panel days, 2 rounds, empty role.
impl Default for InputRecord {
    fn default() -> Self {
        Self {
            job_family:              JobFamily::Technology,
            job_role:                String::new(),
            job_band:                JobBand::Band1,
            experience_years:        3,
            city:                    City::Bangalore,
            candidate_source:        CandidateSource::LinkedIn,
            assessment:              Assessment::Yes,
            notice_period:           NoticePeriod::Days30,
            panel_availability_days: 3,
            interview_rounds:        2,
        }
    }
}
