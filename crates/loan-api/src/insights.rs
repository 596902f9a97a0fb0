//! Insights endpoint.

use loan_core::entities::LoanInsights;

use crate::{ApiClient, error::FetchError, http::decode};

impl ApiClient {
    /// Fetch the derived insights for `loan_number`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the service answers with
    /// a non-success status, or the body is not a `LoanInsights`.
    pub async fn fetch_insights(&self, loan_number: &str) -> Result<LoanInsights, FetchError> {
        let url = self.url(&["insights", loan_number]);
        decode(self.get(&url).await?).await
    }
}
