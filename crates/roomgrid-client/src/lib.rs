//! # roomgrid-client
//!
//! Async client for the booking site's read API, plus the per-tab session
//! state that orchestrates it.
//!
//! The client performs the dependent two-step context lookup (sharing id →
//! map → space list), then serves the two logical queries the overlay needs:
//! an availability snapshot for an explicit window, and the full daily
//! schedule with per-room reservations fetched concurrently. All
//! normalization is delegated to [`roomgrid_engine`]; this crate owns only
//! the network boundary, the schedule cache, and the autofill seam.
//!
//! ## Modules
//!
//! - [`provider`] — HTTP client for the read API
//! - [`session`] — per-tab state: map context, schedule cache, busy flag
//! - [`autofill`] — abstract form-autofill driver boundary
//! - [`error`] — error types

pub mod autofill;
pub mod error;
pub mod provider;
pub mod session;

pub use autofill::{AutofillDriver, AutofillError, ReservationPlan};
pub use error::ClientError;
pub use provider::{
    AvailabilityRequest, AvailabilityView, MapContext, ProviderClient, ProviderConfig,
    ScheduleRequest, ScheduleView, SelectedWindow,
};
pub use session::Session;
