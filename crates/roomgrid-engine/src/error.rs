//! Error types for request validation.

use thiserror::Error;

/// Synchronous input-validation failures, rejected before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The date string is not shaped like `YYYY-MM-DD`.
    #[error("the date must look like YYYY-MM-DD")]
    InvalidDateFormat,

    /// The date is before today in the civil timezone.
    #[error("dates before today cannot be selected")]
    DateInPast,

    /// The time string is not a valid `HH:MM` clock value.
    #[error("the time must look like HH:MM")]
    InvalidTimeFormat,

    /// The time is not on the 10-minute request grid.
    #[error("times must be chosen in 10-minute steps")]
    TimeNotOnGrid,

    /// The requested window is empty or inverted.
    #[error("the end time must be later than the start time")]
    EndNotAfterStart,
}

/// Convenience alias used throughout roomgrid-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
