//! # loan-core
//!
//! Core types shared across all Loanline crates:
//! - Response entities returned by the loan timeline service (timeline,
//!   insights, search hits, exports)
//! - Total enums for sentiment, loan status and view tabs
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
