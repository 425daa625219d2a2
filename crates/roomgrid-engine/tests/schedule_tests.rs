//! Tests for reservation normalization, the timeline range, and the slot
//! grid.

use roomgrid_engine::schedule::{
    assemble_schedule, build_timeline_slots, compute_timeline_range, normalize_reservations,
    RoomSchedule, SLOT_MINUTES,
};
use serde_json::{json, Value};

fn room(window: Option<(u32, u32)>) -> RoomSchedule {
    RoomSchedule {
        id: 1,
        name: "Venus".to_string(),
        color: "#123456".to_string(),
        floor_label: "11F · large".to_string(),
        window_start_minute: window.map(|(start, _)| start),
        window_end_minute: window.map(|(_, end)| end),
        reservations: Vec::new(),
    }
}

// ── Reservation normalization ────────────────────────────────────────────────

#[test]
fn unparseable_instants_drop_the_entry_only() {
    let raw = json!([
        {
            "id": 1,
            "description": "standup",
            "name": "Alice",
            "startDateTime": "2026-03-16T10:00:00+09:00",
            "endDateTime": "2026-03-16T11:00:00+09:00",
        },
        {
            "id": 2,
            "description": "broken",
            "startDateTime": "yesterday-ish",
            "endDateTime": "2026-03-16T12:00:00+09:00",
        },
        {
            "id": 3,
            "startDateTime": "2026-03-16T09:00:00+09:00",
            "endDateTime": "2026-03-16T09:30:00+09:00",
        },
    ]);

    let reservations = normalize_reservations(&raw);
    assert_eq!(reservations.len(), 2);
    // Sorted ascending by start minute, not input order.
    assert_eq!(reservations[0].id, Some(3));
    assert_eq!(reservations[0].start_minute, 540);
    assert_eq!(reservations[1].start_minute, 600);
    assert_eq!(reservations[1].end_minute, 660);
    assert_eq!(reservations[1].start_time, "10:00");
    assert_eq!(reservations[1].end_time, "11:00");
}

#[test]
fn blank_title_and_owner_use_sentinels() {
    let raw = json!([{
        "description": "   ",
        "startDateTime": "2026-03-16T10:00:00+09:00",
        "endDateTime": "2026-03-16T11:00:00+09:00",
    }]);

    let reservations = normalize_reservations(&raw);
    assert_eq!(reservations[0].title, "reservation");
    assert_eq!(reservations[0].owner, "");
    assert_eq!(reservations[0].id, None);
}

#[test]
fn zero_length_reservations_are_kept() {
    let raw = json!([{
        "id": 5,
        "startDateTime": "2026-03-16T10:00:00+09:00",
        "endDateTime": "2026-03-16T10:00:00+09:00",
    }]);

    let reservations = normalize_reservations(&raw);
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].start_minute, reservations[0].end_minute);
}

#[test]
fn non_array_payload_is_an_empty_list() {
    for raw in [json!(null), json!({}), json!("reservations"), json!(12)] {
        assert!(normalize_reservations(&raw).is_empty());
    }
}

#[test]
fn instants_convert_in_the_civil_timezone() {
    // 01:00Z == 10:00 KST.
    let raw = json!([{
        "startDateTime": "2026-03-16T01:00:00Z",
        "endDateTime": "2026-03-16T02:00:00Z",
    }]);
    let reservations = normalize_reservations(&raw);
    assert_eq!(reservations[0].start_minute, 600);
    assert_eq!(reservations[0].end_minute, 660);
}

// ── Timeline range ───────────────────────────────────────────────────────────

#[test]
fn range_covers_the_union_of_windows() {
    let rooms = vec![room(Some((420, 1380))), room(Some((480, 1320)))];
    let range = compute_timeline_range(&rooms);
    assert_eq!(range.start_minute, 420);
    assert_eq!(range.end_minute, 1380);
    assert_eq!(range.slot_minutes, SLOT_MINUTES);
    assert_eq!(range.start_time, "07:00");
    assert_eq!(range.end_time, "23:00");
}

#[test]
fn range_falls_back_to_default_window_without_any_window() {
    let rooms = vec![room(None), room(None)];
    let range = compute_timeline_range(&rooms);
    assert_eq!(range.start_minute, 420);
    assert_eq!(range.end_minute, 1380);

    let range = compute_timeline_range(&[]);
    assert_eq!((range.start_minute, range.end_minute), (420, 1380));
}

#[test]
fn range_aligns_to_slot_boundaries() {
    let rooms = vec![room(Some((425, 1373)))];
    let range = compute_timeline_range(&rooms);
    assert_eq!(range.start_minute, 420); // floored
    assert_eq!(range.end_minute, 1380); // ceiled
}

#[test]
fn range_clamps_to_the_civil_day() {
    let rooms = vec![room(Some((0, 1439)))];
    let range = compute_timeline_range(&rooms);
    assert_eq!(range.start_minute, 0);
    assert_eq!(range.end_minute, 1440);
}

#[test]
fn degenerate_range_is_forced_open_by_one_slot() {
    let rooms = vec![room(Some((600, 600)))];
    let range = compute_timeline_range(&rooms);
    assert_eq!(range.start_minute, 600);
    assert_eq!(range.end_minute, 610);
}

// ── Slot grid ────────────────────────────────────────────────────────────────

#[test]
fn slots_are_contiguous_gapless_and_cover_the_range() {
    let slots = build_timeline_slots(420, 1380, SLOT_MINUTES);
    assert_eq!(slots.len(), 96);
    assert_eq!(slots.first().unwrap().start_minute, 420);
    assert_eq!(slots.last().unwrap().end_minute, 1380);
    for pair in slots.windows(2) {
        assert_eq!(pair[0].end_minute, pair[1].start_minute);
    }
}

#[test]
fn hour_marks_land_on_full_hours() {
    let slots = build_timeline_slots(420, 540, SLOT_MINUTES);
    for slot in &slots {
        assert_eq!(slot.is_hour_mark, slot.start_minute % 60 == 0);
    }
    assert!(slots[0].is_hour_mark); // 07:00
    assert!(!slots[1].is_hour_mark); // 07:10
    assert_eq!(slots[0].label, "07:00");
}

#[test]
fn empty_range_yields_no_slots() {
    assert!(build_timeline_slots(600, 600, SLOT_MINUTES).is_empty());
    assert!(build_timeline_slots(600, 590, SLOT_MINUTES).is_empty());
}

// ── Assembly ─────────────────────────────────────────────────────────────────

#[test]
fn assemble_produces_the_full_per_date_object() {
    let reservations: Value = json!([{
        "id": 1,
        "description": "sync",
        "startDateTime": "2026-03-16T10:00:00+09:00",
        "endDateTime": "2026-03-16T11:00:00+09:00",
    }]);

    let mut venus = room(Some((540, 1080)));
    venus.reservations = normalize_reservations(&reservations);

    let schedule = assemble_schedule("2026-03-16", vec![venus]);
    assert_eq!(schedule.date, "2026-03-16");
    assert_eq!(schedule.range.start_minute, 540);
    assert_eq!(schedule.range.end_minute, 1080);
    assert_eq!(schedule.timeline.len(), 54);
    assert_eq!(schedule.rooms.len(), 1);
    assert_eq!(schedule.rooms[0].reservations.len(), 1);
}
