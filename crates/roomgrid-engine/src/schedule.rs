//! Daily schedule assembly: reservation normalization, the shared timeline
//! range, and the 10-minute slot grid.
//!
//! This is the core of the engine. Raw reservation payloads become sorted,
//! minute-bounded intervals per room; the rooms' heterogeneous operating
//! windows become one shared display window; and the window becomes a
//! contiguous, gapless sequence of slots the overlay renders as grid rows.

use serde::Serialize;
use serde_json::Value;

use crate::catalog::Room;
use crate::clock::{self, MINUTES_PER_DAY};
use crate::raw;

/// Size of one timeline slot, and the request-time grid step.
pub const SLOT_MINUTES: u32 = 10;

/// Display window used when no room has a defined operating window
/// (07:00–23:00).
pub const FALLBACK_WINDOW: (u32, u32) = (7 * 60, 23 * 60);

/// Title used when a reservation has a blank description.
pub const UNTITLED_RESERVATION: &str = "reservation";

/// An existing booking on a room, bounded to minutes of the civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Provider id; absent when the provider sends a non-integer id. Only
    /// the start/end instants gate inclusion, never the id.
    pub id: Option<i64>,
    pub title: String,
    /// Reservation-owner name, empty when absent.
    pub owner: String,
    pub start_minute: u32,
    pub end_minute: u32,
    pub start_time: String,
    pub end_time: String,
}

/// The shared display window for one day, aligned to slot boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRange {
    pub start_minute: u32,
    pub end_minute: u32,
    pub slot_minutes: u32,
    pub start_time: String,
    pub end_time: String,
}

/// One row of the schedule grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSlot {
    pub start_minute: u32,
    pub end_minute: u32,
    pub label: String,
    pub is_hour_mark: bool,
}

/// One room with its day's reservations attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSchedule {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub floor_label: String,
    pub window_start_minute: Option<u32>,
    pub window_end_minute: Option<u32>,
    pub reservations: Vec<Reservation>,
}

impl RoomSchedule {
    pub fn new(room: &Room, reservations: Vec<Reservation>) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            color: room.color.clone(),
            floor_label: room.floor_label.clone(),
            window_start_minute: room.window_start_minute,
            window_end_minute: room.window_end_minute,
            reservations,
        }
    }
}

/// The full per-date schedule consumed by the overlay renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySchedule {
    pub date: String,
    pub range: TimelineRange,
    pub timeline: Vec<TimelineSlot>,
    pub rooms: Vec<RoomSchedule>,
}

/// Normalizes a raw reservation list for one room.
///
/// A non-array payload is an empty list. Each entry needs both instants to
/// convert to civil minutes of day; an entry with either instant unparseable
/// is dropped, never defaulted. The result is sorted ascending by start
/// minute (stable, so equal starts keep provider order). A zero-length
/// entry (`start == end`) is kept as-is.
pub fn normalize_reservations(reservations: &Value) -> Vec<Reservation> {
    let entries = match reservations.as_array() {
        Some(entries) => entries.as_slice(),
        None => return Vec::new(),
    };

    let mut normalized: Vec<Reservation> = entries
        .iter()
        .filter_map(|entry| {
            let start_minute =
                raw::str_field(entry, "startDateTime").and_then(clock::civil_minute_of_day)?;
            let end_minute =
                raw::str_field(entry, "endDateTime").and_then(clock::civil_minute_of_day)?;

            Some(Reservation {
                id: raw::int_field(entry, "id"),
                title: raw::trimmed_field(entry, "description")
                    .unwrap_or(UNTITLED_RESERVATION)
                    .to_string(),
                owner: raw::trimmed_field(entry, "name").unwrap_or("").to_string(),
                start_minute,
                end_minute,
                start_time: clock::minute_to_clock(i64::from(start_minute)),
                end_time: clock::minute_to_clock(i64::from(end_minute)),
            })
        })
        .collect();

    normalized.sort_by_key(|reservation| reservation.start_minute);
    normalized
}

/// Computes the shared timeline range from the rooms' operating windows.
///
/// Takes the minimum of all present window starts floored to the slot size
/// and the maximum of all present window ends ceiled to it, clamped to the
/// civil day. No window at all falls back to [`FALLBACK_WINDOW`]. A
/// degenerate result is forced open by one slot.
pub fn compute_timeline_range(rooms: &[RoomSchedule]) -> TimelineRange {
    let raw_start = rooms
        .iter()
        .filter_map(|room| room.window_start_minute)
        .min()
        .unwrap_or(FALLBACK_WINDOW.0);
    let raw_end = rooms
        .iter()
        .filter_map(|room| room.window_end_minute)
        .max()
        .unwrap_or(FALLBACK_WINDOW.1);

    let start_minute = (raw_start / SLOT_MINUTES) * SLOT_MINUTES;
    let mut end_minute = raw_end.div_ceil(SLOT_MINUTES) * SLOT_MINUTES;
    end_minute = end_minute.min(MINUTES_PER_DAY);

    if end_minute <= start_minute {
        end_minute = (start_minute + SLOT_MINUTES).min(MINUTES_PER_DAY);
    }

    TimelineRange {
        start_minute,
        end_minute,
        slot_minutes: SLOT_MINUTES,
        start_time: clock::minute_to_clock(i64::from(start_minute)),
        end_time: clock::minute_to_clock(i64::from(end_minute)),
    }
}

/// Generates the contiguous slot sequence covering `[start, end)`.
pub fn build_timeline_slots(start_minute: u32, end_minute: u32, slot_minutes: u32) -> Vec<TimelineSlot> {
    let mut slots = Vec::new();
    if slot_minutes == 0 {
        return slots;
    }

    let mut minute = start_minute;
    while minute < end_minute {
        slots.push(TimelineSlot {
            start_minute: minute,
            end_minute: minute + slot_minutes,
            label: clock::minute_to_clock(i64::from(minute)),
            is_hour_mark: minute % 60 == 0,
        });
        minute += slot_minutes;
    }
    slots
}

/// Assembles the full per-date schedule from rooms that already carry their
/// normalized reservations. Pure: caching and fetch failure handling live in
/// the layer above.
pub fn assemble_schedule(date: &str, rooms: Vec<RoomSchedule>) -> DailySchedule {
    let range = compute_timeline_range(&rooms);
    let timeline = build_timeline_slots(range.start_minute, range.end_minute, range.slot_minutes);

    DailySchedule {
        date: date.to_string(),
        range,
        timeline,
        rooms,
    }
}
