//! Property tests for the clock helpers and the slot grid.

use proptest::prelude::*;
use roomgrid_engine::clock::{ceil_to_step, minute_to_clock, parse_clock};
use roomgrid_engine::schedule::{build_timeline_slots, SLOT_MINUTES};

proptest! {
    /// For every valid "HH:MM", formatting the parsed minute reproduces the
    /// input exactly.
    #[test]
    fn clock_roundtrip(hour in 0u32..24, minute in 0u32..60) {
        let input = format!("{hour:02}:{minute:02}");
        let parsed = parse_clock(&input).expect("valid clock string");
        prop_assert_eq!(minute_to_clock(i64::from(parsed)), input);
    }

    /// Formatting is invariant under whole-day shifts, including negative
    /// ones.
    #[test]
    fn clock_wraps_whole_days(minute in -5_000i64..5_000, days in -5i64..5) {
        prop_assert_eq!(
            minute_to_clock(minute),
            minute_to_clock(minute + days * 1440)
        );
    }

    /// ceil_to_step lands on a multiple of the step, never below the input,
    /// never more than one step above, and never past the end of day.
    #[test]
    fn ceil_to_step_properties(minute in 0u32..1440, step in 1u32..120) {
        let result = ceil_to_step(minute, step).expect("non-zero step");
        prop_assert_eq!(result % step, 0);
        prop_assert!(result >= minute.min(1440));
        prop_assert!(result < minute + step || result == 1440);
        prop_assert!(result <= 1440);
    }

    /// The slot grid is contiguous and gapless and covers exactly the range.
    #[test]
    fn slot_grid_is_gapless(start_slot in 0u32..100, len_slots in 1u32..80) {
        let start = start_slot * SLOT_MINUTES;
        let end = start + len_slots * SLOT_MINUTES;
        let slots = build_timeline_slots(start, end, SLOT_MINUTES);

        prop_assert_eq!(slots.len() as u32, len_slots);
        prop_assert_eq!(slots.first().unwrap().start_minute, start);
        prop_assert_eq!(slots.last().unwrap().end_minute, end);
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[0].end_minute, pair[1].start_minute);
            prop_assert_eq!(pair[1].is_hour_mark, pair[1].start_minute % 60 == 0);
        }
    }
}
