use chrono::{NaiveDate, NaiveDateTime};
use time_range_slider::core::{
    AdaptiveGranularity, DateRange, GranularityEngine, GranularityLevel, span_millis,
};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .expect("valid test date")
}

#[test]
fn three_decade_extent_starts_at_years() {
    let engine = AdaptiveGranularity::new();
    let width = span_millis(day(1995, 9, 3), day(2026, 2, 11));
    assert_eq!(engine.initial_granularity(width), GranularityLevel::Years);
}

#[test]
fn four_hours_stays_at_minutes() {
    let engine = AdaptiveGranularity::new();
    assert_eq!(
        engine.determine_granularity(4 * HOUR_MS, GranularityLevel::Minutes),
        GranularityLevel::Minutes
    );
}

#[test]
fn width_inside_hysteresis_band_keeps_either_level() {
    let engine = AdaptiveGranularity::new();
    let six_years = 6 * 365 * DAY_MS;
    assert_eq!(
        engine.determine_granularity(six_years, GranularityLevel::Months),
        GranularityLevel::Months
    );
    assert_eq!(
        engine.determine_granularity(six_years, GranularityLevel::Years),
        GranularityLevel::Years
    );
}

#[test]
fn narrowing_stops_at_first_level_that_does_not_qualify() {
    let engine = AdaptiveGranularity::new();
    assert_eq!(
        engine.determine_granularity(100 * DAY_MS, GranularityLevel::Years),
        GranularityLevel::Months
    );
    assert_eq!(
        engine.determine_granularity(60 * DAY_MS, GranularityLevel::Years),
        GranularityLevel::Days
    );
}

#[test]
fn widening_moves_one_level_per_evaluation() {
    let engine = AdaptiveGranularity::new();
    assert_eq!(
        engine.determine_granularity(500 * DAY_MS, GranularityLevel::Days),
        GranularityLevel::Months
    );
    assert_eq!(
        engine.determine_granularity(500 * DAY_MS, GranularityLevel::Hours),
        GranularityLevel::Days
    );
}

#[test]
fn unknown_level_falls_back_to_initial_resolution() {
    let engine = AdaptiveGranularity::new();
    assert_eq!(
        engine.determine_granularity(HOUR_MS, GranularityLevel::Decades),
        GranularityLevel::Minutes
    );
}

#[test]
fn initial_granularity_for_short_spans() {
    let engine = AdaptiveGranularity::new();
    assert_eq!(engine.initial_granularity(HOUR_MS), GranularityLevel::Minutes);
    assert_eq!(engine.initial_granularity(60_000), GranularityLevel::Seconds);
    assert_eq!(engine.initial_granularity(2 * DAY_MS), GranularityLevel::Hours);
}

#[test]
fn zoom_in_plan_requires_strict_sub_range() {
    let engine = AdaptiveGranularity::new();
    let extent = DateRange::new(day(2000, 1, 1), day(2025, 1, 1));
    let mut context = time_range_slider::core::ZoomContext {
        bounds: extent,
        extent,
        selection: extent,
        level: GranularityLevel::Years,
        previous: None,
    };
    assert!(engine.zoom_in_plan(&context).is_none());
    assert!(engine.zoom_out_plan(&context).is_none());

    context.selection = DateRange::new(day(2024, 6, 1), day(2024, 8, 31));
    let plan = engine.zoom_in_plan(&context).expect("sub-range should zoom");
    assert_eq!(plan.extent, context.selection);
    assert_eq!(plan.level, GranularityLevel::Months);
}

#[test]
fn labels_and_thumb_formats_follow_level() {
    let engine = AdaptiveGranularity::new();
    assert_eq!(engine.label(GranularityLevel::Hours), "Hours");
    assert_eq!(
        engine.format_thumb(GranularityLevel::Days, day(2024, 3, 16)),
        "Mar 16, 2024"
    );
    assert!(!engine.supports(GranularityLevel::Deciseconds));
}
