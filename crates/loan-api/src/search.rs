//! Timeline search endpoint.

use chrono::NaiveDate;
use loan_core::entities::LoanSearchHit;

use crate::{ApiClient, error::FetchError, http::decode};

/// Criteria for `GET /search/timeline`. Unset fields are left to the
/// service's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_calls: Option<u32>,
    pub sentiment: Option<String>,
}

impl TimelineQuery {
    /// Encoded query string including the leading `?`, or empty when no
    /// criteria are set.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(date) = self.start_date {
            pairs.push(format!("start_date={}", date.format("%Y-%m-%d")));
        }
        if let Some(date) = self.end_date {
            pairs.push(format!("end_date={}", date.format("%Y-%m-%d")));
        }
        if let Some(min_calls) = self.min_calls {
            pairs.push(format!("min_calls={min_calls}"));
        }
        if let Some(sentiment) = &self.sentiment {
            pairs.push(format!("sentiment={}", urlencoding::encode(sentiment)));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

impl ApiClient {
    /// List loans whose call history matches `query`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the service answers with
    /// a non-success status, or the body is not a list of hits.
    pub async fn search_timelines(
        &self,
        query: &TimelineQuery,
    ) -> Result<Vec<LoanSearchHit>, FetchError> {
        let url = format!("{}{}", self.url(&["search", "timeline"]), query.to_query_string());
        decode(self.get(&url).await?).await
    }
}
