use serde::{Deserialize, Serialize};

/// One loan matching a timeline search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanSearchHit {
    pub loan_number: String,
    #[serde(default)]
    pub call_count: u64,
    #[serde(default)]
    pub first_call: Option<String>,
    #[serde(default)]
    pub last_call: Option<String>,
    /// Summed call seconds. The service aggregates in SQL and may send a
    /// float.
    #[serde(default)]
    pub total_duration: f64,
}
