//! Per-room boolean availability for an explicit time window.
//!
//! A pure transform of the provider's availability report against the
//! resolved room set. Absence of data means not available — the snapshot
//! fails closed.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::catalog::Room;
use crate::raw;

/// One room's availability in the queried window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAvailability {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub floor_label: String,
    pub is_available: bool,
}

/// Aggregate counts over the room set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilityCounts {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
}

/// Result of one availability query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilitySnapshot {
    pub counts: AvailabilityCounts,
    pub rooms: Vec<RoomAvailability>,
}

/// Builds the snapshot from the provider's reported entries
/// (`[{spaceId, isAvailable}, ...]`).
///
/// A room is available iff its entry is present and `isAvailable` is the
/// JSON literal `true`; missing entries, nulls, and truthy non-booleans all
/// resolve to false.
pub fn build_snapshot(rooms: &[Room], entries: &[Value]) -> AvailabilitySnapshot {
    let available_by_id: HashMap<i64, bool> = entries
        .iter()
        .filter_map(|entry| {
            let space_id = raw::int_field(entry, "spaceId")?;
            Some((space_id, raw::flag_field(entry, "isAvailable")))
        })
        .collect();

    let rooms: Vec<RoomAvailability> = rooms
        .iter()
        .map(|room| RoomAvailability {
            id: room.id,
            name: room.name.clone(),
            color: room.color.clone(),
            floor_label: room.floor_label.clone(),
            is_available: available_by_id.get(&room.id) == Some(&true),
        })
        .collect();

    let available = rooms.iter().filter(|room| room.is_available).count();
    let counts = AvailabilityCounts {
        total: rooms.len(),
        available,
        occupied: rooms.len() - available,
    };

    AvailabilitySnapshot { counts, rooms }
}
