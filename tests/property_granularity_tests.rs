use std::collections::HashSet;

use proptest::prelude::*;
use time_range_slider::core::{
    ADAPTIVE_ORDER, AdaptiveGranularity, DateRange, GranularityEngine, SNAP_ORDER,
    SnapGranularity, from_epoch_millis, level_index, span_millis,
};
use time_range_slider::{RangeSlider, RangeSliderConfig};

const YEAR_2000_MS: i64 = 946_684_800_000;
const FORTY_YEARS_MS: i64 = 40 * 31_557_600_000;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn initial_granularity_is_monotonic_in_width(
        a in 0i64..FORTY_YEARS_MS,
        b in 0i64..FORTY_YEARS_MS
    ) {
        let engine = AdaptiveGranularity::new();
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        let narrow_index = level_index(&ADAPTIVE_ORDER, engine.initial_granularity(narrow));
        let wide_index = level_index(&ADAPTIVE_ORDER, engine.initial_granularity(wide));
        prop_assert!(narrow_index >= wide_index);
    }

    #[test]
    fn narrowing_lands_on_a_stable_level(
        width in 1i64..FORTY_YEARS_MS,
        current in 0usize..ADAPTIVE_ORDER.len()
    ) {
        let engine = AdaptiveGranularity::new();
        let level = ADAPTIVE_ORDER[current];
        let next = engine.determine_granularity(width, level);
        let next_index = level_index(&ADAPTIVE_ORDER, next).unwrap_or(0);

        if next_index > current {
            prop_assert_eq!(engine.determine_granularity(width, next), next);
        }
        if next_index < current {
            prop_assert_eq!(next_index + 1, current);
            let after = engine.determine_granularity(width, next);
            let after_index = level_index(&ADAPTIVE_ORDER, after).unwrap_or(0);
            prop_assert!(after_index <= next_index);
        }
    }

    #[test]
    fn snap_slider_round_trip_stays_within_one_step(
        offset in 0i64..FORTY_YEARS_MS,
        level_slot in 0usize..SNAP_ORDER.len()
    ) {
        let engine = SnapGranularity::new();
        let level = SNAP_ORDER[level_slot];
        let start = from_epoch_millis(YEAR_2000_MS);
        let date = from_epoch_millis(YEAR_2000_MS + offset);

        let value = engine.date_to_slider_value(date, start, level);
        let back = engine.slider_value_to_date(value, start, level);
        prop_assert!(span_millis(date, back).abs() <= level.nominal_millis());
    }

    #[test]
    fn natural_extent_is_idempotent(
        offset in 0i64..FORTY_YEARS_MS,
        level_slot in 0usize..SNAP_ORDER.len()
    ) {
        let engine = SnapGranularity::new();
        let level = SNAP_ORDER[level_slot];
        let instant = from_epoch_millis(YEAR_2000_MS + offset);

        let extent = engine.extent_for(level, instant);
        prop_assert!(extent.contains(instant));
        prop_assert_eq!(engine.extent_for(level, extent.start), extent);
        prop_assert_eq!(engine.extent_for(level, extent.end), extent);
    }

    #[test]
    fn ticks_are_unique_sorted_and_guarded(
        offset in 0i64..FORTY_YEARS_MS,
        width in 60_000i64..(3 * 31_557_600_000)
    ) {
        let engine = AdaptiveGranularity::new();
        let start = from_epoch_millis(YEAR_2000_MS + offset);
        let end = from_epoch_millis(YEAR_2000_MS + offset + width);
        let extent = DateRange::new(start, end);
        let level = engine.initial_level(extent);
        let ticks = engine.ticks_for(extent, level);

        let unique: HashSet<_> = ticks.iter().map(|tick| tick.time).collect();
        prop_assert_eq!(unique.len(), ticks.len());
        for pair in ticks.windows(2) {
            prop_assert!(pair[0].position <= pair[1].position);
        }
        for tick in &ticks {
            prop_assert!((0.0..=100.0).contains(&tick.position));
            if tick.major {
                prop_assert!(tick.position >= 2.0 && tick.position <= 98.0);
                prop_assert!(tick.major_label.is_some());
            }
        }
    }

    #[test]
    fn slider_changes_keep_selection_inside_extent(
        moves in prop::collection::vec((-500i64..10_500, -500i64..10_500), 1..12)
    ) {
        let config = RangeSliderConfig::new(
            from_epoch_millis(YEAR_2000_MS),
            from_epoch_millis(YEAR_2000_MS + 25 * 31_557_600_000),
        );
        let mut slider = RangeSlider::adaptive(config).expect("slider init");
        for (start, end) in moves {
            prop_assert!(slider.on_slider_change([start, end]));
            let [low, high] = slider.slider_values();
            prop_assert!(low >= 0 && low < high && high <= slider.slider_max());

            let selection = slider.selection();
            let extent = slider.extent();
            prop_assert!(extent.start <= selection.start && selection.end <= extent.end);
        }
    }
}
