// ============================================================
// Layer 5: Job Role Frequency Encoder
// ============================================================
// Replaces the free-text job role with how often that role
// appeared in the training data.
//
// Artifact format (model/job_role_frequency.json):
//   { "Data Scientist": 0.072, "Sales Executive": 0.11, ... }
//
// Matching is exact: no case folding, no trimming. A role the
// table has never seen encodes as 0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Read-only role → frequency lookup, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    frequencies: HashMap<String, f64>,
}

impl FrequencyTable {
    pub fn new(frequencies: HashMap<String, f64>) -> Self {
        Self { frequencies }
    }

    /// Frequency score for `job_role`, or 0 when the role is unseen.
    pub fn encode(&self, job_role: &str) -> f64 {
        self.frequencies.get(job_role).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, job_role: &str) -> bool {
        self.frequencies.contains_key(job_role)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
