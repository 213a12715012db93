use approx::assert_abs_diff_eq;
use chrono::{NaiveDate, NaiveDateTime};
use time_range_slider::core::{DateRange, GranularityLevel, SLIDER_RESOLUTION};
use time_range_slider::{RangeSlider, RangeSliderConfig};

fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
        .expect("valid test instant")
}

fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    at(y, m, d, 0, 0, 0, 0)
}

fn adaptive_slider() -> RangeSlider<time_range_slider::core::AdaptiveGranularity> {
    RangeSlider::adaptive(RangeSliderConfig::new(day(2000, 1, 1), day(2025, 1, 1)))
        .expect("slider init")
}

#[test]
fn zoom_in_on_written_summer_range_then_reset() {
    let mut slider = adaptive_slider();
    let summer = DateRange::new(day(2024, 6, 1), day(2024, 8, 31));

    assert!(slider.write_value(Some(summer)));
    assert!(slider.can_zoom_in());
    assert!(slider.zoom_in());

    assert_eq!(slider.extent(), summer);
    assert_eq!(slider.slider_values(), [0, SLIDER_RESOLUTION]);
    assert_abs_diff_eq!(slider.start_thumb_position(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(slider.end_thumb_position(), 100.0, epsilon = 1e-9);
    assert_eq!(slider.current_level(), GranularityLevel::Months);
    assert_eq!(slider.granularity_label(), "Months");
    assert!(slider.is_zoomed());
    assert_eq!(slider.zoom_depth(), 1);

    assert!(slider.reset_zoom());
    assert_eq!(slider.extent(), slider.bounds());
    assert_eq!(slider.selection(), summer);
    assert_eq!(slider.current_level(), GranularityLevel::Years);
    assert!(!slider.is_zoomed());
    assert_eq!(slider.zoom_depth(), 0);
    assert!(!slider.reset_zoom());
}

#[test]
fn nested_zooms_restore_extents_exactly() {
    let mut slider = adaptive_slider();
    let bounds = slider.bounds();

    assert!(slider.on_slider_change([2_000, 6_000]));
    assert!(slider.zoom_in());
    let first_zoom = slider.extent();

    assert!(slider.on_slider_change([2_500, 7_500]));
    let inner_selection = slider.selection();
    assert!(slider.zoom_in());
    assert_eq!(slider.zoom_depth(), 2);
    assert_eq!(slider.zoom_history(), &[bounds, first_zoom]);

    assert!(slider.zoom_out());
    assert_eq!(slider.extent(), first_zoom);
    assert_eq!(slider.selection(), inner_selection);
    let [start, end] = slider.slider_values();
    assert!((start - 2_500).abs() <= 1);
    assert!((end - 7_500).abs() <= 1);

    assert!(slider.zoom_out());
    assert_eq!(slider.extent(), bounds);
    assert_eq!(slider.zoom_depth(), 0);
    assert!(!slider.is_zoomed());
    assert!(!slider.zoom_out());
}

#[test]
fn full_selection_cannot_zoom_in() {
    let mut slider = adaptive_slider();
    assert!(!slider.can_zoom_in());
    assert!(!slider.zoom_in());
    assert!(!slider.can_zoom_out());
    assert_eq!(slider.extent(), slider.bounds());
}

#[test]
fn ticks_follow_the_zoomed_extent() {
    let mut slider = adaptive_slider();
    let before = slider.tick_labels().to_vec();
    assert!(slider.write_value(Some(DateRange::new(day(2024, 1, 25), day(2024, 3, 10)))));
    assert_eq!(slider.tick_labels(), before.as_slice());

    assert!(slider.zoom_in());
    assert_eq!(slider.current_level(), GranularityLevel::Days);
    assert!(slider.tick_labels().iter().any(|tick| tick.major));
    assert!(
        slider
            .tick_labels()
            .iter()
            .all(|tick| (0.0..=100.0).contains(&tick.position))
    );
}

#[test]
fn snap_slider_zooms_to_natural_boundaries() {
    let mut slider = RangeSlider::snap(RangeSliderConfig::new(day(2024, 1, 1), day(2025, 1, 1)))
        .expect("slider init");
    assert_eq!(slider.current_level(), GranularityLevel::Months);
    assert_eq!(slider.slider_max(), 12);

    assert!(slider.on_slider_change([2, 5]));
    assert_eq!(slider.selection().start, at(2024, 3, 1, 21, 0, 0, 0));
    assert_eq!(slider.current_level(), GranularityLevel::Months);

    assert!(slider.zoom_in());
    assert_eq!(slider.current_level(), GranularityLevel::Days);
    assert_eq!(
        slider.extent(),
        DateRange::new(day(2024, 3, 1), at(2024, 6, 1, 23, 59, 59, 999))
    );
    assert_eq!(slider.slider_max(), 93);
    assert_eq!(slider.slider_values(), [0, 93]);
    assert_eq!(slider.selection(), slider.extent());

    assert!(slider.zoom_out());
    assert_eq!(slider.current_level(), GranularityLevel::Months);
    assert_eq!(slider.extent(), slider.bounds());
    assert_eq!(slider.zoom_depth(), 0);
    assert!(!slider.is_zoomed());
    assert_eq!(
        slider.selection(),
        DateRange::new(day(2024, 3, 1), at(2024, 6, 30, 23, 59, 59, 999))
    );
    assert_eq!(slider.slider_values(), [2, 6]);
    assert!(!slider.reset_zoom());
}

#[test]
fn snap_nested_zooms_restore_extents_exactly() {
    let mut slider = RangeSlider::snap(RangeSliderConfig::new(day(2024, 1, 1), day(2025, 1, 1)))
        .expect("slider init");
    let bounds = slider.bounds();

    assert!(slider.on_slider_change([2, 5]));
    assert!(slider.zoom_in());
    let first_zoom = slider.extent();
    assert_eq!(slider.current_level(), GranularityLevel::Days);

    assert!(slider.on_slider_change([10, 40]));
    assert_eq!(
        slider.selection(),
        DateRange::new(day(2024, 3, 11), day(2024, 4, 10))
    );
    assert!(slider.zoom_in());
    assert_eq!(slider.current_level(), GranularityLevel::Minutes);
    assert_eq!(
        slider.extent(),
        DateRange::new(day(2024, 3, 11), at(2024, 4, 10, 0, 0, 59, 999))
    );
    assert_eq!(slider.zoom_history(), &[bounds, first_zoom]);

    assert!(slider.zoom_out());
    assert_eq!(slider.extent(), first_zoom);
    assert_eq!(slider.current_level(), GranularityLevel::Days);
    assert_eq!(slider.zoom_depth(), 1);
    assert!(slider.is_zoomed());
    assert_eq!(
        slider.selection(),
        DateRange::new(day(2024, 3, 11), at(2024, 4, 10, 23, 59, 59, 999))
    );
    assert_eq!(slider.slider_values(), [10, 41]);

    assert!(slider.zoom_out());
    assert_eq!(slider.extent(), bounds);
    assert_eq!(slider.current_level(), GranularityLevel::Months);
    assert_eq!(slider.zoom_depth(), 0);
    assert!(!slider.is_zoomed());
    assert_eq!(slider.slider_values(), [2, 4]);
}

#[test]
fn snap_zoom_in_covering_bounds_refines_level_without_history() {
    let mut slider = RangeSlider::snap(RangeSliderConfig::new(day(2024, 1, 1), day(2025, 1, 1)))
        .expect("slider init");
    assert_eq!(slider.selection(), slider.bounds());

    assert!(slider.zoom_in());
    assert_eq!(slider.current_level(), GranularityLevel::Days);
    assert_eq!(slider.extent(), slider.bounds());
    assert_eq!(slider.zoom_depth(), 0);
    assert!(!slider.is_zoomed());

    assert!(slider.zoom_out());
    assert_eq!(slider.current_level(), GranularityLevel::Months);
    assert_eq!(slider.extent(), slider.bounds());
    assert_eq!(slider.zoom_depth(), 0);
}

#[test]
fn snap_written_value_growing_extent_to_bounds_clears_history() {
    let mut slider = RangeSlider::snap(RangeSliderConfig::new(day(2024, 1, 1), day(2025, 1, 1)))
        .expect("slider init");
    assert!(slider.on_slider_change([2, 5]));
    assert!(slider.zoom_in());
    let zoomed = slider.extent();

    let inside = DateRange::new(day(2024, 7, 10), day(2024, 7, 12));
    assert!(slider.write_value(Some(inside)));
    assert_eq!(slider.extent(), DateRange::new(zoomed.start, at(2024, 7, 12, 23, 59, 59, 999)));
    assert_eq!(slider.zoom_depth(), 1);
    assert!(slider.is_zoomed());

    let whole_year = DateRange::new(day(2024, 1, 1), day(2025, 1, 1));
    assert!(slider.write_value(Some(whole_year)));
    assert_eq!(slider.extent(), slider.bounds());
    assert_eq!(slider.selection(), whole_year);
    assert_eq!(slider.zoom_depth(), 0);
    assert!(!slider.is_zoomed());
    assert_eq!(slider.current_level(), GranularityLevel::Days);
}

#[test]
fn snap_slider_cannot_zoom_past_finest_level() {
    let mut slider = RangeSlider::snap(RangeSliderConfig::new(
        day(2024, 1, 1),
        at(2024, 1, 1, 0, 0, 5, 0),
    ))
    .expect("slider init");
    assert_eq!(slider.current_level(), GranularityLevel::Deciseconds);
    assert_eq!(slider.slider_max(), 50);

    assert!(slider.on_slider_change([10, 20]));
    assert_eq!(slider.selection().start, at(2024, 1, 1, 0, 0, 1, 0));
    assert!(!slider.can_zoom_in());
    assert!(!slider.zoom_in());
    assert!(slider.can_zoom_out());
    assert_eq!(slider.current_level(), GranularityLevel::Deciseconds);
}
