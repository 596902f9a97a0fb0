use serde::{Deserialize, Serialize};

use crate::enums::LoanStatus;

/// Derived analytical summary for a loan, computed by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoanInsights {
    pub loan_number: String,
    pub loan_status: LoanStatus,
    #[serde(default)]
    pub key_issues: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub risk_indicators: Vec<String>,
    #[serde(default)]
    pub compliance_notes: Vec<String>,
}
