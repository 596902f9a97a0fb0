//! Cross-cutting error types for Loanline.
//!
//! Transport errors live in `loan-api` (`FetchError`) and configuration
//! errors in `loan-config`. This module only holds errors raised while
//! parsing user-facing identifiers.

use thiserror::Error;

/// Errors that can be raised by any Loanline crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A tab name that does not match `timeline`, `insights` or `summary`.
    #[error("unknown tab '{0}' (expected timeline, insights or summary)")]
    UnknownTab(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
