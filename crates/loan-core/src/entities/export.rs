use serde::{Deserialize, Serialize};

/// CSV export of a timeline as returned by the export endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvExport {
    pub content: String,
    pub filename: String,
}
