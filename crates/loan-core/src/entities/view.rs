use serde::{Deserialize, Serialize};

use super::{LoanInsights, LoanTimeline};

/// Timeline and insights for the same loan. The view only ever shows both
/// together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanView {
    pub timeline: LoanTimeline,
    pub insights: LoanInsights,
}

impl LoanView {
    #[must_use]
    pub fn loan_number(&self) -> &str {
        &self.timeline.loan_number
    }
}
