//! Timeline and timeline-export endpoints.

use loan_core::entities::{CsvExport, LoanTimeline};
use loan_core::enums::ExportFormat;
use serde::Serialize;

use crate::{ApiClient, error::FetchError, http::decode};

/// Body of the export endpoint: the timeline itself for JSON, a file payload
/// for CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimelineExport {
    Json(Box<LoanTimeline>),
    Csv(CsvExport),
}

impl TimelineExport {
    /// File name the service suggests, or a name derived from the loan.
    #[must_use]
    pub fn suggested_filename(&self) -> String {
        match self {
            Self::Json(timeline) => format!("loan_{}_timeline.json", timeline.loan_number),
            Self::Csv(csv) => csv.filename.clone(),
        }
    }
}

impl ApiClient {
    /// Fetch the aggregated timeline for `loan_number`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the service answers with
    /// a non-success status, or the body is not a `LoanTimeline`.
    pub async fn fetch_timeline(&self, loan_number: &str) -> Result<LoanTimeline, FetchError> {
        let url = self.url(&["timeline", loan_number]);
        decode(self.get(&url).await?).await
    }

    /// Export the timeline for `loan_number` in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] under the same conditions as
    /// [`Self::fetch_timeline`].
    pub async fn export_timeline(
        &self,
        loan_number: &str,
        format: ExportFormat,
    ) -> Result<TimelineExport, FetchError> {
        let url = format!(
            "{}?format={}",
            self.url(&["timeline", loan_number, "export"]),
            format.as_str()
        );
        let resp = self.get(&url).await?;
        match format {
            ExportFormat::Json => Ok(TimelineExport::Json(Box::new(decode(resp).await?))),
            ExportFormat::Csv => Ok(TimelineExport::Csv(decode(resp).await?)),
        }
    }
}
