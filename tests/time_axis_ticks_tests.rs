use approx::assert_relative_eq;
use axis_rs::core::{Range, TickType, TimeDomain, VisualTick};
use axis_rs::{AxisEngineConfig, TimeAxis};
use chrono::{DateTime, TimeDelta, TimeZone, Utc, Weekday};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid timestamp")
}

fn axis(domain: TimeDomain, begin: DateTime<Utc>, end: DateTime<Utc>, pixels: f64) -> TimeAxis {
    let mut axis = TimeAxis::new(domain, AxisEngineConfig::default()).expect("axis init");
    axis.set_value(Range::new(begin, end).expect("valid range"));
    axis.set_pixel_size(pixels).expect("pixel size");
    axis
}

fn of_type(
    ticks: &[VisualTick<DateTime<Utc>>],
    tick_type: TickType,
) -> Vec<&VisualTick<DateTime<Utc>>> {
    ticks
        .iter()
        .filter(|tick| tick.tick_type == tick_type)
        .collect()
}

#[test]
fn one_day_in_1200_pixels_uses_hourly_ticks_and_two_hour_labels() {
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        1200.0,
    );
    assert_eq!(axis.scale(), Some(72.0));

    let arrangement = axis.current_arrangement();
    assert_eq!(arrangement.std_label().interval(), TimeDelta::hours(2));
    assert_eq!(
        arrangement
            .item(TickType::StdTick)
            .expect("std tick tier")
            .interval(),
        TimeDelta::hours(1)
    );

    let ticks = axis.ticks().to_vec();
    let std_ticks = of_type(&ticks, TickType::StdTick);
    assert_eq!(std_ticks.len(), 25);
    assert_eq!(std_ticks[0].value, at(2024, 1, 1, 0, 0));
    assert_eq!(std_ticks[1].value, at(2024, 1, 1, 1, 0));
    assert_eq!(std_ticks[24].value, at(2024, 1, 2, 0, 0));
    for (hour, tick) in std_ticks.iter().enumerate() {
        assert_relative_eq!(tick.pixel_position, hour as f64 * 50.0, epsilon = 1e-9);
        assert!(!tick.has_label());
    }

    let labels: Vec<&str> = of_type(&ticks, TickType::StdLabel)
        .iter()
        .map(|tick| tick.text.as_str())
        .collect();
    assert_eq!(labels.len(), 13);
    assert_eq!(labels[0], "00:00");
    assert_eq!(labels[1], "02:00");
    assert_eq!(labels[11], "22:00");
}

#[test]
fn leftmost_label_uses_the_initial_format() {
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        1200.0,
    );
    let ticks = axis.ticks().to_vec();

    // Ties at the same pixel put the heavier tick first.
    assert_eq!(ticks[0].tick_type, TickType::BigLabel);
    assert_eq!(ticks[0].text, "2024-01-01 00:00");

    let big_labels = of_type(&ticks, TickType::BigLabel);
    assert_eq!(big_labels.len(), 2);
    assert_eq!(big_labels[1].text, "02 Jan");
}

#[test]
fn ticks_are_ordered_by_pixel_position() {
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 3, 10, 7, 13),
        at(2024, 3, 11, 2, 47),
        977.0,
    );
    let ticks = axis.ticks();
    assert!(!ticks.is_empty());
    assert!(
        ticks
            .windows(2)
            .all(|pair| pair[0].pixel_position <= pair[1].pixel_position)
    );
    assert!(ticks.iter().all(|tick| tick.pixel_position >= 0.0));
    assert!(ticks.iter().all(|tick| tick.pixel_position <= 977.0 + 1e-9));
}

#[test]
fn zero_pixel_size_yields_no_ticks() {
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        0.0,
    );
    assert!(axis.ticks().is_empty());
    assert_eq!(axis.scale(), None);
    assert_eq!(axis.to_pixel(at(2024, 1, 1, 12, 0), 0.0), 0.0);
}

#[test]
fn unfilled_or_empty_ranges_yield_no_ticks() {
    let mut axis = TimeAxis::new(TimeDomain::default(), AxisEngineConfig::default())
        .expect("axis init");
    axis.set_pixel_size(800.0).expect("pixel size");
    assert!(axis.ticks().is_empty());

    let point = at(2024, 5, 5, 5, 5);
    axis.set_value(Range::new(point, point).expect("point range"));
    assert!(axis.ticks().is_empty());
}

#[test]
fn repeated_reads_reuse_cached_ticks_until_geometry_changes() {
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        1200.0,
    );
    let identity = axis.identity();
    let first = axis.ticks().to_vec();
    let second = axis.ticks().to_vec();
    assert_eq!(first, second);
    assert_eq!(axis.identity(), identity);

    let stats = axis.tick_cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.size, first.len());

    axis.set_pixel_size(600.0).expect("pixel size");
    assert_ne!(axis.identity(), identity);
    let resized = axis.ticks().to_vec();
    assert_ne!(first, resized);
    assert_eq!(axis.tick_cache_stats().misses, 2);
}

#[test]
fn identity_renders_bounds_and_geometry() {
    let axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        1200.0,
    );
    assert_eq!(
        axis.identity().to_string(),
        "2024-01-01 00:00:00 UTC;2024-01-02 00:00:00 UTC;1200;0"
    );
}

#[test]
fn short_label_variant_is_chosen_before_the_next_band() {
    // 28 days in 1200 px: daily labels are 43 px apart, too tight for
    // "%d %b" but enough for the day-number variant.
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 29, 0, 0),
        1200.0,
    );
    let arrangement = axis.current_arrangement();
    assert_eq!(arrangement.std_label().interval(), TimeDelta::days(1));
    assert_eq!(arrangement.std_label().format(), "%d");
    assert!(arrangement.select_distance_ratio() < 1.0);

    let ticks = axis.ticks().to_vec();
    let day_labels = of_type(&ticks, TickType::StdLabel);
    assert_eq!(day_labels.len(), 29);
    assert_eq!(day_labels[4].text, "05");

    let weeks = of_type(&ticks, TickType::BigLabel);
    let starts: Vec<DateTime<Utc>> = weeks.iter().map(|tick| tick.value).collect();
    assert_eq!(
        starts,
        vec![
            at(2024, 1, 1, 0, 0),
            at(2024, 1, 8, 0, 0),
            at(2024, 1, 15, 0, 0),
            at(2024, 1, 22, 0, 0),
            at(2024, 1, 29, 0, 0),
        ]
    );
    assert_eq!(weeks[0].text, "01 Jan 2024");
}

#[test]
fn week_ticks_follow_the_configured_first_weekday() {
    let mut axis = axis(
        TimeDomain::default().with_first_weekday(Weekday::Sun),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 29, 0, 0),
        1200.0,
    );
    let ticks = axis.ticks().to_vec();
    let starts: Vec<DateTime<Utc>> = of_type(&ticks, TickType::BigLabel)
        .iter()
        .map(|tick| tick.value)
        .collect();
    assert_eq!(
        starts,
        vec![
            at(2024, 1, 7, 0, 0),
            at(2024, 1, 14, 0, 0),
            at(2024, 1, 21, 0, 0),
            at(2024, 1, 28, 0, 0),
        ]
    );
}

#[test]
fn scale_limit_clamps_arrangement_selection() {
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        1200.0,
    );
    axis.set_scale_limit(Range::from_bounds(None, Some(30.0)).expect("limit"))
        .expect("scale limit");
    assert_eq!(axis.scale(), Some(30.0));
    assert_eq!(
        axis.current_arrangement().std_label().interval(),
        TimeDelta::hours(1)
    );

    let ticks = axis.ticks().to_vec();
    // Pixels still follow the real geometry.
    let last = ticks.last().expect("ticks");
    assert_relative_eq!(last.pixel_position, 1200.0, epsilon = 1e-9);
}

#[test]
fn round_to_tick_type_snaps_to_the_active_tier() {
    let axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        1200.0,
    );
    assert_eq!(
        axis.round_to_tick_type(at(2024, 1, 1, 1, 20), TickType::StdTick),
        Some(at(2024, 1, 1, 1, 0))
    );
    assert_eq!(
        axis.round_to_tick_type(at(2024, 1, 1, 1, 40), TickType::StdTick),
        Some(at(2024, 1, 1, 2, 0))
    );
    assert_eq!(
        axis.round_to_tick_type(at(2024, 1, 1, 1, 20), TickType::StdLabel),
        Some(at(2024, 1, 1, 2, 0))
    );
    assert_eq!(
        axis.round_to_tick_type(at(2024, 1, 1, 1, 20), TickType::BigTick),
        None
    );
}

#[test]
fn pixel_first_offsets_tick_positions() {
    let mut axis = axis(
        TimeDomain::default(),
        at(2024, 1, 1, 0, 0),
        at(2024, 1, 2, 0, 0),
        1200.0,
    );
    axis.set_pixel_first(40.0).expect("pixel first");
    let ticks = axis.ticks().to_vec();
    assert_relative_eq!(ticks[0].pixel_position, 40.0);
    assert_relative_eq!(
        ticks.last().expect("ticks").pixel_position,
        1240.0,
        epsilon = 1e-9
    );
}

#[test]
fn whole_calendar_range_keeps_millennium_ticks() {
    let mut axis = axis(
        TimeDomain::default(),
        DateTime::<Utc>::MIN_UTC,
        DateTime::<Utc>::MAX_UTC,
        1000.0,
    );
    let ticks = axis.ticks().to_vec();

    assert_eq!(ticks.len(), 525);
    assert!(
        ticks
            .iter()
            .all(|tick| tick.tick_type == TickType::BigLabel && !tick.has_label())
    );
    assert_eq!(ticks[0].value, at(-262_000, 1, 1, 0, 0));
    assert_eq!(ticks[524].value, at(262_000, 1, 1, 0, 0));
}
