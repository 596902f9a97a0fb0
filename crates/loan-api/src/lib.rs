//! # loan-api
//!
//! HTTP client for the loan timeline service.
//!
//! Endpoints consumed:
//! - `GET {base}/timeline/{loan}`: aggregated call history
//! - `GET {base}/insights/{loan}`: derived status, issues, actions, risks
//! - `GET {base}/timeline/{loan}/export?format=json|csv`
//! - `GET {base}/search/timeline`: loans matching date/volume criteria
//!
//! Every call is a single request. There are no retries; a failure is
//! surfaced immediately as a [`FetchError`].

mod error;
mod http;
mod insights;
mod search;
mod timeline;

pub use error::{FetchError, GENERIC_DETAIL};
pub use search::TimelineQuery;
pub use timeline::TimelineExport;

use loan_config::ApiConfig;
use loan_core::entities::{LoanInsights, LoanTimeline};

// ── Backend seam ───────────────────────────────────────────────────

/// The two reads the loan view depends on.
///
/// [`ApiClient`] is the production implementation; the view controller is
/// generic over this trait so it can be driven without a network.
#[allow(async_fn_in_trait)]
pub trait LoanBackend {
    /// Fetch the aggregated timeline for `loan_number`.
    async fn fetch_timeline(&self, loan_number: &str) -> Result<LoanTimeline, FetchError>;

    /// Fetch the derived insights for `loan_number`.
    async fn fetch_insights(&self, loan_number: &str) -> Result<LoanInsights, FetchError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one timeline service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from the resolved API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. no TLS backend available).
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("loanline/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.endpoint().to_string(),
        })
    }

    /// Base URL requests are issued against, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join percent-encoded path segments onto the base URL.
    fn url(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        url
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url).send().await.inspect_err(|e| {
            tracing::warn!(%url, error = %e, "timeline service unreachable");
        })?;
        http::check_response(resp).await
    }
}

impl LoanBackend for ApiClient {
    async fn fetch_timeline(&self, loan_number: &str) -> Result<LoanTimeline, FetchError> {
        Self::fetch_timeline(self, loan_number).await
    }

    async fn fetch_insights(&self, loan_number: &str) -> Result<LoanInsights, FetchError> {
        Self::fetch_insights(self, loan_number).await
    }
}
