//! Maps the provider's raw space list to the curated, ordered room set.
//!
//! The booking site exposes every drawable object on the map as a "space";
//! only a fixed catalog of named meeting rooms is interesting here. Each
//! catalog entry carries a display floor label and an explicit sort order,
//! and every resolved room gets its bookable minute-of-day window derived
//! from the provider's per-space operating-hour settings.

use serde::Serialize;
use serde_json::Value;

use crate::clock;
use crate::raw;

/// Display color used when the provider supplies none.
pub const DEFAULT_ROOM_COLOR: &str = "#9CA3AF";

/// Floor label used when a catalog entry carries none.
pub const UNSPECIFIED_FLOOR: &str = "unspecified floor";

/// One curated room: the provider-side name it matches on, plus display
/// metadata.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub name: String,
    pub floor_label: String,
}

/// The fixed, ordered catalog of target rooms. Spaces whose normalized name
/// is not in the catalog never reach any computation.
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    entries: Vec<CatalogEntry>,
}

impl RoomCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The nine rooms of the production deployment, in display order. Names
    /// are the provider's own (Korean) space names and must match exactly
    /// after trimming.
    pub fn production_default() -> Self {
        let rooms = [
            ("금성", "11층 · 큰방"),
            ("지구", "11층 · 큰방"),
            ("수성", "11층 · 작은방"),
            ("화성", "11층 · 작은방"),
            ("보이저", "12층 · 큰방"),
            ("디스커버리", "12층 · 큰방"),
            ("아폴로", "12층 · 작은방"),
            ("허블", "12층 · 작은방"),
            ("은하수", "13층"),
        ];
        Self::new(
            rooms
                .iter()
                .map(|(name, floor)| CatalogEntry {
                    name: (*name).to_string(),
                    floor_label: (*floor).to_string(),
                })
                .collect(),
        )
    }

    /// Display order and floor label for a normalized space name, if the
    /// name is in the catalog.
    fn lookup(&self, name: &str) -> Option<(usize, &str)> {
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|order| {
                let label = self.entries[order].floor_label.trim();
                let label = if label.is_empty() {
                    UNSPECIFIED_FLOOR
                } else {
                    label
                };
                (order, label)
            })
    }
}

/// A bookable room resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Stable provider identifier; always a positive integer.
    pub id: i64,
    pub name: String,
    /// Display-only hex color.
    pub color: String,
    /// "floor · size category" display string from the catalog.
    pub floor_label: String,
    /// Earliest bookable minute of day, absent when the provider supplies no
    /// valid operating-hour setting for this space.
    pub window_start_minute: Option<u32>,
    /// Latest bookable minute of day; symmetric with the start.
    pub window_end_minute: Option<u32>,
}

/// Resolves the provider's raw space list into the working room set.
///
/// Keeps only reservation-enabled spaces whose id parses to a positive
/// integer and whose trimmed name is in the catalog; attaches floor label
/// and operating window; sorts by catalog order. The result is fully
/// determined by the catalog — input order never matters.
pub fn resolve_rooms(spaces: &[Value], catalog: &RoomCatalog) -> Vec<Room> {
    let mut rooms: Vec<(usize, Room)> = spaces
        .iter()
        .filter(|space| raw::flag_field(space, "reservationEnable"))
        .filter_map(|space| {
            let id = raw::int_field(space, "id").filter(|id| *id > 0)?;
            let name = match raw::trimmed_field(space, "name") {
                Some(name) => name.to_string(),
                None => format!("space {id}"),
            };
            let (order, floor_label) = catalog.lookup(&name)?;
            let (window_start_minute, window_end_minute) =
                parse_operating_window(space.get("settings"));

            Some((
                order,
                Room {
                    id,
                    name,
                    color: raw::str_field(space, "color")
                        .unwrap_or(DEFAULT_ROOM_COLOR)
                        .to_string(),
                    floor_label: floor_label.to_string(),
                    window_start_minute,
                    window_end_minute,
                },
            ))
        })
        .collect();

    rooms.sort_by_key(|(order, _)| *order);
    rooms.into_iter().map(|(_, room)| room).collect()
}

/// Derives the bookable window from a space's settings list: the minimum of
/// all valid start times and the maximum of all valid end times.
/// Absent or unparseable settings are ignored; no valid setting means the
/// side stays absent (not zero).
fn parse_operating_window(settings: Option<&Value>) -> (Option<u32>, Option<u32>) {
    let entries = match settings.and_then(Value::as_array) {
        Some(entries) => entries.as_slice(),
        None => return (None, None),
    };

    let start = entries
        .iter()
        .filter_map(|setting| raw::str_field(setting, "settingStartTime"))
        .filter_map(clock::parse_setting_time)
        .min();
    let end = entries
        .iter()
        .filter_map(|setting| raw::str_field(setting, "settingEndTime"))
        .filter_map(clock::parse_setting_time)
        .max();

    (start, end)
}

/// Extracts the raw space list from a spaces response, which is either
/// `{"spaces": [...]}` or a bare array. Anything else is an empty list.
pub fn extract_spaces(body: &Value) -> Vec<Value> {
    if let Some(spaces) = body.get("spaces").and_then(Value::as_array) {
        return spaces.clone();
    }
    if let Some(spaces) = body.as_array() {
        return spaces.clone();
    }
    Vec::new()
}
