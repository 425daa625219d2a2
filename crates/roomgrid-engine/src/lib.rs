//! # roomgrid-engine
//!
//! Minute-resolution occupancy model for a shared-meeting-room booking site.
//!
//! The engine turns the provider's raw space and reservation payloads into a
//! per-room, timezone-correct daily schedule: sorted minute-bounded
//! reservation intervals, a shared display window derived from heterogeneous
//! room operating hours, a 10-minute slot grid, and validated one-hour
//! "auto-pick" booking candidates.
//!
//! Everything here is synchronous and deterministic. Functions that depend on
//! the current time take an explicit [`chrono::DateTime<chrono::Utc>`] so
//! callers (and tests) control the clock. All minute-of-day values are
//! expressed in the fixed civil timezone (KST, UTC+9, no DST).
//!
//! ## Modules
//!
//! - [`clock`] — instant ↔ minute-of-day ↔ `"HH:MM"` conversions
//! - [`catalog`] — raw provider spaces → curated, ordered room set
//! - [`availability`] — per-room boolean availability snapshot
//! - [`schedule`] — reservation normalization, timeline range and slot grid
//! - [`autopick`] — validated 60-minute booking candidates
//! - [`validate`] — request date/time validation
//! - [`raw`] — lenient field accessors for provider JSON
//! - [`error`] — error types

pub mod autopick;
pub mod availability;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod raw;
pub mod schedule;
pub mod validate;

pub use autopick::{plan_auto_pick, AutoPickRange, AutoPickRejection};
pub use availability::{build_snapshot, AvailabilitySnapshot, RoomAvailability};
pub use catalog::{resolve_rooms, Room, RoomCatalog};
pub use error::EngineError;
pub use schedule::{
    assemble_schedule, build_timeline_slots, compute_timeline_range, normalize_reservations,
    DailySchedule, Reservation, RoomSchedule, TimelineRange, TimelineSlot,
};
