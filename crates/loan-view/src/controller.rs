//! View state and the search orchestration around it.
//!
//! A search runs in three steps so overlapping searches stay correct:
//!
//! ```text
//! begin_search()  -> SearchTicket { seq }     loading = true, error cleared
//! fetch_pair()    -> timeline, then insights  no state touched
//! complete_search(ticket, outcome)            applied only if seq is latest
//! ```
//!
//! A ticket that is no longer the latest is discarded on completion; the
//! newer search still owns `loading`.

use std::collections::BTreeSet;

use loan_api::{FetchError, LoanBackend};
use loan_core::entities::{LoanInsights, LoanTimeline, LoanView};
use loan_core::enums::Tab;

/// Overall phase of the view, derived from [`ViewState`].
///
/// ```text
/// Idle -> Loading -> Loaded
///                 -> Errored -> Loading -> ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Everything the renderer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Query input as typed.
    pub loan_number: String,
    pub timeline: Option<LoanTimeline>,
    pub insights: Option<LoanInsights>,
    pub loading: bool,
    /// Banner text; empty when there is no error.
    pub error: String,
    pub active_tab: Tab,
    /// Indices of action items ticked in this session. Never sent anywhere
    /// and reset by every search.
    pub checked_actions: BTreeSet<usize>,
}

impl ViewState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.error.is_empty() {
            Phase::Errored
        } else if self.timeline.is_some() && self.insights.is_some() {
            Phase::Loaded
        } else {
            Phase::Idle
        }
    }

    /// Timeline and insights, only when both are present.
    #[must_use]
    pub fn loaded(&self) -> Option<(&LoanTimeline, &LoanInsights)> {
        self.timeline.as_ref().zip(self.insights.as_ref())
    }
}

/// Proof that a search was started; hand it back to
/// [`Controller::complete_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    loan_number: String,
}

impl SearchTicket {
    /// Trimmed loan number the search was issued for.
    #[must_use]
    pub fn loan_number(&self) -> &str {
        &self.loan_number
    }

    #[must_use]
    pub const fn seq(&self) -> u64 {
        self.seq
    }
}

/// Owner of the single view-state record.
#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
    latest_seq: u64,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_loan_number(&mut self, loan_number: impl Into<String>) {
        self.state.loan_number = loan_number.into();
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.state.active_tab = tab;
    }

    /// Flip the checkbox of action item `index`. Returns the new checked
    /// state, or `None` when there is no such action item.
    pub fn toggle_action(&mut self, index: usize) -> Option<bool> {
        let count = self
            .state
            .insights
            .as_ref()
            .map_or(0, |insights| insights.action_items.len());
        if index >= count {
            return None;
        }
        if self.state.checked_actions.remove(&index) {
            Some(false)
        } else {
            self.state.checked_actions.insert(index);
            Some(true)
        }
    }

    /// Start a search for the current input.
    ///
    /// Returns `None` without touching state when the trimmed input is
    /// empty.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        let loan_number = self.state.loan_number.trim();
        if loan_number.is_empty() {
            return None;
        }
        let loan_number = loan_number.to_string();

        self.latest_seq += 1;
        self.state.loading = true;
        self.state.error.clear();
        self.state.checked_actions.clear();

        tracing::debug!(seq = self.latest_seq, loan = %loan_number, "search started");
        Some(SearchTicket {
            seq: self.latest_seq,
            loan_number,
        })
    }

    /// Apply the outcome of `ticket`'s fetch. Returns `false` when the
    /// ticket was superseded and the outcome discarded.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<LoanView, FetchError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "discarding superseded search result"
            );
            return false;
        }

        match outcome {
            Ok(view) => {
                self.state.timeline = Some(view.timeline);
                self.state.insights = Some(view.insights);
                self.state.error.clear();
            }
            Err(error) => {
                tracing::warn!(loan = %ticket.loan_number, %error, "search failed");
                self.state.timeline = None;
                self.state.insights = None;
                self.state.error = error.detail().to_string();
            }
        }
        self.state.loading = false;
        true
    }

    /// Run a full search against `backend`: begin, fetch both halves,
    /// complete. Returns the resulting phase, or `None` for an empty query.
    pub async fn search<B: LoanBackend>(&mut self, backend: &B) -> Option<Phase> {
        let ticket = self.begin_search()?;
        let outcome = fetch_pair(backend, ticket.loan_number()).await;
        self.complete_search(ticket, outcome);
        Some(self.state.phase())
    }
}

/// Fetch the timeline, then the insights for `loan_number`.
///
/// Insights are requested only after the timeline succeeded; a failure of
/// either aborts the pair.
///
/// # Errors
///
/// Returns the first [`FetchError`] encountered.
pub async fn fetch_pair<B: LoanBackend>(
    backend: &B,
    loan_number: &str,
) -> Result<LoanView, FetchError> {
    let timeline = backend.fetch_timeline(loan_number).await?;
    let insights = backend.fetch_insights(loan_number).await?;
    Ok(LoanView { timeline, insights })
}
