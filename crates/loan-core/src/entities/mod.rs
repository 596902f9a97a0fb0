//! Response entities of the loan timeline service.
//!
//! Field names follow the service's JSON (`orkuid`, `timeline_events`,
//! `key_milestones`, ...). Timestamps stay as delivered strings; formatting
//! them is the renderer's job and must not fail on odd input.

mod export;
mod insights;
mod search;
mod timeline;
mod view;

pub use export::CsvExport;
pub use insights::LoanInsights;
pub use search::LoanSearchHit;
pub use timeline::{LoanTimeline, Milestone, TimelineEvent};
pub use view::LoanView;
