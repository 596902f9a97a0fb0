//! # loan-view
//!
//! The loan timeline view, split in three layers:
//!
//! - [`controller`]: owns the single [`ViewState`] and orchestrates
//!   searches against a [`loan_api::LoanBackend`]
//! - [`render`]: pure mapping from state to a [`View`] tree
//! - [`paint`]: turns a [`View`] into terminal text
//!
//! [`palette`], [`format`] and [`table`] are the lookups and helpers the
//! last two share.

pub mod controller;
pub mod format;
pub mod paint;
pub mod palette;
pub mod render;
pub mod table;

pub use controller::{Controller, Phase, SearchTicket, ViewState, fetch_pair};
pub use paint::{PaintOptions, paint};
pub use render::{Block, View, render};
