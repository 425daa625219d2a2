//! Validated 60-minute booking candidates from a clicked timeline slot.
//!
//! Clicking a free slot proposes a one-hour booking starting at the slot's
//! start minute. The proposal must fit the schedule's display range, the
//! room's operating window, the current time (for today's schedule), and the
//! room's existing reservations. Each check fails with a distinct,
//! user-facing rejection; rejections are ordinary values, never propagated
//! as errors.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::clock;
use crate::schedule::{DailySchedule, RoomSchedule, TimelineSlot, SLOT_MINUTES};

/// Length of an auto-picked booking.
pub const AUTO_PICK_DURATION_MINUTES: u32 = 60;

/// A proposed, validated booking range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoPickRange {
    pub date: String,
    pub room_id: i64,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl AutoPickRange {
    /// `"HH:MM"` start, as the host form expects it.
    pub fn start_time(&self) -> String {
        clock::minute_to_clock(i64::from(self.start_minute))
    }

    /// `"HH:MM"` end.
    pub fn end_time(&self) -> String {
        clock::minute_to_clock(i64::from(self.end_minute))
    }
}

/// Why a clicked slot could not become a booking. The `Display` text is the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutoPickRejection {
    /// Degenerate guard: the candidate range is empty. Unreachable while the
    /// duration is a positive constant.
    #[error("{room}: could not form an auto-pick range")]
    EmptyRange { room: String },

    /// The slot starts before the schedule range or the room's window opens.
    #[error("{room}: {slot} is before operating hours")]
    BeforeOperatingHours { room: String, slot: String },

    /// A full hour starting at the slot runs past the schedule range or the
    /// room's window.
    #[error("{room}: cannot secure a full hour after {slot}")]
    ExceedsOperatingHours { room: String, slot: String },

    /// On today's schedule the slot is already in the past.
    #[error("{room}: the range would include past time")]
    IncludesPastTime { room: String },

    /// The candidate overlaps existing reservations, listed as
    /// `"HH:MM~HH:MM"` intervals.
    #[error("{room}: {start}~{end} conflicts with existing reservations ({})", conflicts.join(", "))]
    Conflicts {
        room: String,
        start: String,
        end: String,
        conflicts: Vec<String>,
    },
}

/// Computes the one-hour booking candidate for a clicked slot.
///
/// Checks run in a fixed order so the first applicable rejection wins:
/// range formation, lower bound, upper bound, past-time (today only), then
/// overlap. `now` decides both whether the schedule is today's and what the
/// current civil minute is.
pub fn plan_auto_pick(
    schedule: &DailySchedule,
    room: &RoomSchedule,
    slot: &TimelineSlot,
    now: DateTime<Utc>,
) -> Result<AutoPickRange, AutoPickRejection> {
    let room_label = format!("{} ({})", room.name, room.floor_label);
    let start_minute = slot.start_minute;
    let end_minute = start_minute + AUTO_PICK_DURATION_MINUTES;

    if start_minute >= end_minute {
        return Err(AutoPickRejection::EmptyRange { room: room_label });
    }

    let mut lower_bound = schedule.range.start_minute;
    if let Some(window_start) = room.window_start_minute {
        lower_bound = lower_bound.max(window_start);
    }
    if start_minute < lower_bound {
        return Err(AutoPickRejection::BeforeOperatingHours {
            room: room_label,
            slot: slot.label.clone(),
        });
    }

    let mut upper_bound = clock::MINUTES_PER_DAY.min(schedule.range.end_minute);
    if let Some(window_end) = room.window_end_minute {
        upper_bound = upper_bound.min(window_end);
    }
    if end_minute > upper_bound {
        return Err(AutoPickRejection::ExceedsOperatingHours {
            room: room_label,
            slot: slot.label.clone(),
        });
    }

    if schedule.date == clock::today_date(now) {
        let minimum_selectable =
            clock::ceil_to_step(clock::current_minute_of_day(now), SLOT_MINUTES);
        if let Some(minimum) = minimum_selectable {
            if start_minute < minimum {
                return Err(AutoPickRejection::IncludesPastTime { room: room_label });
            }
        }
    }

    // Half-open overlap: an existing reservation conflicts iff it starts
    // before the candidate ends and ends after the candidate starts. A
    // zero-length reservation strictly inside the candidate still counts;
    // one touching either boundary never does.
    let conflicts: Vec<String> = room
        .reservations
        .iter()
        .filter(|reservation| {
            reservation.start_minute < end_minute && reservation.end_minute > start_minute
        })
        .map(|reservation| format!("{}~{}", reservation.start_time, reservation.end_time))
        .collect();

    if !conflicts.is_empty() {
        return Err(AutoPickRejection::Conflicts {
            room: room_label,
            start: clock::minute_to_clock(i64::from(start_minute)),
            end: clock::minute_to_clock(i64::from(end_minute)),
            conflicts,
        });
    }

    Ok(AutoPickRange {
        date: schedule.date.clone(),
        room_id: room.id,
        start_minute,
        end_minute,
    })
}
