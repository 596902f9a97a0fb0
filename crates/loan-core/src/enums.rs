//! Sentiment, loan status, view tab and export format enums.
//!
//! `Sentiment` and `LoanStatus` come from an upstream analysis service that
//! may grow new labels at any time, so both deserialize through a total
//! lookup: any unrecognized label lands in `Other` with the raw text kept.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Sentiment
// ---------------------------------------------------------------------------

/// Coarse emotional tone of a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
    /// A label the service produced that this client does not know.
    Other(String),
}

impl Sentiment {
    /// Map a raw label to a sentiment. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            "neutral" => Self::Neutral,
            "unknown" => Self::Unknown,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for Sentiment {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Other(_) => Self::Other(raw),
            known => known,
        }
    }
}

impl From<Sentiment> for String {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LoanStatus
// ---------------------------------------------------------------------------

/// Status the insights service assigns to a loan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanStatus {
    Active,
    Resolved,
    AtRisk,
    Denied,
    Other(String),
}

impl LoanStatus {
    /// Map a raw status label to a status. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Active" => Self::Active,
            "Resolved" => Self::Resolved,
            "At Risk" => Self::AtRisk,
            "Denied" => Self::Denied,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label exactly as the service spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Resolved => "Resolved",
            Self::AtRisk => "At Risk",
            Self::Denied => "Denied",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for LoanStatus {
    fn from(raw: String) -> Self {
        match Self::parse(&raw) {
            Self::Other(_) => Self::Other(raw),
            known => known,
        }
    }
}

impl From<LoanStatus> for String {
    fn from(status: LoanStatus) -> Self {
        match status {
            LoanStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tab
// ---------------------------------------------------------------------------

/// Tab of the loan view. `Timeline` is active until the user switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Timeline,
    Insights,
    Summary,
}

impl Tab {
    /// Navigation order.
    pub const ALL: [Self; 3] = [Self::Timeline, Self::Insights, Self::Summary];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Insights => "insights",
            Self::Summary => "summary",
        }
    }

    /// Capitalized label shown in the tab bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Timeline => "Timeline",
            Self::Insights => "Insights",
            Self::Summary => "Summary",
        }
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timeline" => Ok(Self::Timeline),
            "insights" => Ok(Self::Insights),
            "summary" => Ok(Self::Summary),
            other => Err(CoreError::UnknownTab(other.to_string())),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ExportFormat
// ---------------------------------------------------------------------------

/// Format accepted by the timeline export endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(CoreError::Validation(format!(
                "unsupported export format '{other}' (expected json or csv)"
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
