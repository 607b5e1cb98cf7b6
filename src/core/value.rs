use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

/// Arithmetic capabilities every axis value type must provide.
///
/// `Size` is the difference type (seconds for time, plain `f64` for lengths).
/// Sizes are bridged to `f64` "units" so scale and pixel math stays generic.
pub trait AxisValue: Copy + PartialOrd + fmt::Debug {
    type Size: Copy + PartialOrd + fmt::Debug;

    /// Returns `self + interval`, saturating at the representable bounds.
    fn add_interval(self, interval: Self::Size) -> Self;

    /// Returns `other - self`.
    fn distance_to(self, other: Self) -> Self::Size;

    fn size_to_units(size: Self::Size) -> f64;

    fn size_from_units(units: f64) -> Self::Size;
}

impl AxisValue for f64 {
    type Size = f64;

    fn add_interval(self, interval: f64) -> f64 {
        self + interval
    }

    fn distance_to(self, other: f64) -> f64 {
        other - self
    }

    fn size_to_units(size: f64) -> f64 {
        size
    }

    fn size_from_units(units: f64) -> f64 {
        units
    }
}

/// Time values use seconds as units with nanosecond resolution.
impl AxisValue for DateTime<Utc> {
    type Size = TimeDelta;

    fn add_interval(self, interval: TimeDelta) -> Self {
        self.checked_add_signed(interval).unwrap_or(if interval < TimeDelta::zero() {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
    }

    fn distance_to(self, other: Self) -> TimeDelta {
        other.signed_duration_since(self)
    }

    fn size_to_units(size: TimeDelta) -> f64 {
        size.num_seconds() as f64 + f64::from(size.subsec_nanos()) / 1_000_000_000.0
    }

    fn size_from_units(units: f64) -> TimeDelta {
        if units.is_nan() {
            return TimeDelta::zero();
        }
        let saturated = if units < 0.0 {
            TimeDelta::MIN
        } else {
            TimeDelta::MAX
        };
        let whole = units.trunc();
        // `as` saturates, so huge spans fall through to `saturated`.
        let Some(seconds) = TimeDelta::try_seconds(whole as i64) else {
            return saturated;
        };
        let nanos = ((units - whole) * 1_000_000_000.0).round() as i64;
        seconds
            .checked_add(&TimeDelta::nanoseconds(nanos))
            .unwrap_or(saturated)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use super::AxisValue;

    #[test]
    fn time_delta_units_keep_sub_second_precision() {
        let delta = TimeDelta::milliseconds(1_500);
        assert_eq!(<chrono::DateTime<Utc> as AxisValue>::size_to_units(delta), 1.5);

        let negative = TimeDelta::milliseconds(-2_250);
        assert_eq!(
            <chrono::DateTime<Utc> as AxisValue>::size_to_units(negative),
            -2.25
        );
    }

    #[test]
    fn time_units_bridge_wide_spans_without_truncation() {
        let span = TimeDelta::days(365 * 300_000);
        let units = <chrono::DateTime<Utc> as AxisValue>::size_to_units(span);
        assert_eq!(
            <chrono::DateTime<Utc> as AxisValue>::size_from_units(units),
            span
        );
        assert_eq!(
            <chrono::DateTime<Utc> as AxisValue>::size_from_units(2.5),
            TimeDelta::milliseconds(2_500)
        );
        assert_eq!(
            <chrono::DateTime<Utc> as AxisValue>::size_from_units(-1e30),
            TimeDelta::MIN
        );
        assert_eq!(
            <chrono::DateTime<Utc> as AxisValue>::size_from_units(f64::NAN),
            TimeDelta::zero()
        );
    }

    #[test]
    fn time_add_interval_saturates_instead_of_panicking() {
        let near_end = chrono::DateTime::<Utc>::MAX_UTC - TimeDelta::days(1);
        let moved = near_end.add_interval(TimeDelta::days(10));
        assert_eq!(moved, chrono::DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn time_distance_is_signed() {
        let a = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(a.distance_to(b), TimeDelta::hours(1));
        assert_eq!(b.distance_to(a), TimeDelta::hours(-1));
    }
}
