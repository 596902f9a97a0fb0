use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::Sentiment;

/// One recorded call associated with a loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineEvent {
    pub orkuid: String,
    pub timestamp: String,
    /// Call length in seconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_facts: IndexMap<String, Value>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub loan_mentions: u32,
}

impl TimelineEvent {
    /// Whole minutes of the call, rounded down.
    #[must_use]
    pub const fn whole_minutes(&self) -> u64 {
        self.duration / 60
    }
}

/// A significant dated occurrence extracted from the call history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Milestone {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    /// Id of the call the milestone was extracted from.
    #[serde(default)]
    pub orkuid: String,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

/// Aggregate call history for one loan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoanTimeline {
    pub loan_number: String,
    #[serde(default)]
    pub total_calls: u64,
    #[serde(default)]
    pub total_duration_minutes: u64,
    pub first_contact: String,
    pub last_contact: String,
    #[serde(default)]
    pub primary_user: Option<String>,
    #[serde(default)]
    pub timeline_events: Vec<TimelineEvent>,
    #[serde(default)]
    pub aggregated_summary: String,
    #[serde(default)]
    pub key_milestones: Vec<Milestone>,
    /// Sentiment label -> number of calls, in the order the service sent it.
    #[serde(default)]
    pub sentiment_trend: IndexMap<String, u64>,
}
