//! Abstract boundary to the host page's reservation form.
//!
//! The core never touches the host UI. A validated auto-pick becomes a
//! [`ReservationPlan`], and a host-specific [`AutofillDriver`] carries it
//! into the form. This crate ships only the seam.

use roomgrid_engine::autopick::AutoPickRange;
use roomgrid_engine::clock;
use thiserror::Error;

/// A validated date/time/room tuple ready for form autofill.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationPlan {
    pub date: String,
    pub room_id: i64,
    pub room_name: String,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl ReservationPlan {
    /// Builds the plan from a validated pick and the room's display name.
    pub fn from_pick(pick: &AutoPickRange, room_name: &str) -> Self {
        Self {
            date: pick.date.clone(),
            room_id: pick.room_id,
            room_name: room_name.to_string(),
            start_minute: pick.start_minute,
            end_minute: pick.end_minute,
        }
    }

    /// `"HH:MM"` start, as the host form expects it.
    pub fn start_time(&self) -> String {
        clock::minute_to_clock(i64::from(self.start_minute))
    }

    /// `"HH:MM"` end.
    pub fn end_time(&self) -> String {
        clock::minute_to_clock(i64::from(self.end_minute))
    }
}

/// Failures while driving the host form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AutofillError {
    /// A host widget the flow depends on was not found.
    #[error("host form widget not found: {0}")]
    WidgetNotFound(String),

    /// The host form rejected a value.
    #[error("host form rejected the {0} value")]
    Rejected(String),

    /// The flow was interrupted before completion.
    #[error("autofill was interrupted: {0}")]
    Interrupted(String),
}

/// One operation: apply a validated reservation to the host form.
/// Implemented separately per host environment.
pub trait AutofillDriver {
    fn apply_reservation(&mut self, plan: &ReservationPlan) -> Result<(), AutofillError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_exposes_clock_strings() {
        let pick = AutoPickRange {
            date: "2026-03-16".to_string(),
            room_id: 7,
            start_minute: 660,
            end_minute: 720,
        };
        let plan = ReservationPlan::from_pick(&pick, "Venus");
        assert_eq!(plan.start_time(), "11:00");
        assert_eq!(plan.end_time(), "12:00");
        assert_eq!(plan.room_name, "Venus");
    }
}
