use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeDelta, Utc, Weekday,
};
use serde::{Deserialize, Serialize};

use crate::core::arrangement::ArrangementRecord;
use crate::core::domain::{AxisDomain, CycleRounding, nearest_step_by_ratio};
use crate::core::time_catalog::time_arrangement_records;
use crate::core::value::AxisValue;

pub const CYCLE_TIME: &str = "time";
pub const CYCLE_DAY: &str = "day";
pub const CYCLE_WEEK: &str = "week";
pub const CYCLE_MONTH: &str = "month";
pub const CYCLE_YEAR: &str = "year";

pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;
pub(crate) const DAYS_PER_MONTH: f64 = 30.436_875;
pub(crate) const DAYS_PER_YEAR: f64 = 365.2425;

const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * MICROS_PER_SECOND;
/// 1970-01-05 was the first Monday after the epoch.
const FIRST_EPOCH_MONDAY_DAYS: i128 = 4;

const TIME_SNAP_STEPS_SECONDS: &[f64] = &[
    0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 15.0, 60.0, 300.0, 900.0, 3_600.0, 21_600.0,
    86_400.0,
];
const COARSE_SNAP_SECONDS: f64 = 60.0;

/// Fixed UTC offset in which calendar boundaries and labels are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeAxisTimeZone {
    #[default]
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl TimeAxisTimeZone {
    #[must_use]
    pub fn fixed_offset(self) -> FixedOffset {
        match self {
            Self::Utc => Utc.fix(),
            Self::FixedOffsetMinutes { minutes } => {
                FixedOffset::east_opt(i32::from(minutes) * 60).unwrap_or_else(|| Utc.fix())
            }
        }
    }

    #[must_use]
    pub fn offset_seconds(self) -> i64 {
        i64::from(self.fixed_offset().local_minus_utc())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CycleLevel {
    Time,
    Day,
    Week,
    Month,
    Year,
}

impl CycleLevel {
    fn parse(cycle: &str) -> Option<Self> {
        match cycle {
            CYCLE_TIME => Some(Self::Time),
            CYCLE_DAY => Some(Self::Day),
            CYCLE_WEEK => Some(Self::Week),
            CYCLE_MONTH => Some(Self::Month),
            CYCLE_YEAR => Some(Self::Year),
            _ => None,
        }
    }

    /// Finest level able to express `interval_seconds` as whole units.
    fn natural(interval_seconds: f64) -> Self {
        let days = interval_seconds / SECONDS_PER_DAY;
        if days < 1.0 {
            Self::Time
        } else if days < 7.0 {
            Self::Day
        } else if days < 28.0 {
            Self::Week
        } else if days < 360.0 {
            Self::Month
        } else {
            Self::Year
        }
    }
}

/// Calendar-aware time domain over `DateTime<Utc>` values.
///
/// Cycles form a hierarchy (`time` < `day` < `week` < `month` < `year`). A tier
/// is rounded at the finer of the arrangement's cycle and the level its
/// interval naturally belongs to, so a 7-day tier in a `year` arrangement
/// still falls on `first_weekday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDomain {
    first_weekday: Weekday,
    timezone: TimeAxisTimeZone,
}

impl Default for TimeDomain {
    fn default() -> Self {
        Self {
            first_weekday: Weekday::Mon,
            timezone: TimeAxisTimeZone::Utc,
        }
    }
}

impl TimeDomain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_first_weekday(mut self, first_weekday: Weekday) -> Self {
        self.first_weekday = first_weekday;
        self
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: TimeAxisTimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    #[must_use]
    pub fn timezone(&self) -> TimeAxisTimeZone {
        self.timezone
    }

    fn offset_micros(&self) -> i128 {
        i128::from(self.timezone.offset_seconds()) * MICROS_PER_SECOND
    }

    fn to_local_micros(&self, value: DateTime<Utc>) -> i128 {
        i128::from(value.timestamp_micros()) + self.offset_micros()
    }

    fn from_local_micros(&self, local: i128) -> Option<DateTime<Utc>> {
        let utc = i64::try_from(local - self.offset_micros()).ok()?;
        DateTime::<Utc>::from_timestamp_micros(utc)
    }

    fn round_local(
        &self,
        local: i128,
        interval_seconds: f64,
        level: CycleLevel,
        rounding: CycleRounding,
    ) -> Option<i128> {
        let days = interval_seconds / SECONDS_PER_DAY;
        match level {
            CycleLevel::Time => {
                let step = ((interval_seconds * 1_000_000.0).round() as i128).max(1);
                Some(align_linear(local, 0, step, rounding))
            }
            CycleLevel::Day => {
                let count = whole_count(days, 1.0);
                Some(align_linear(local, 0, count * MICROS_PER_DAY, rounding))
            }
            CycleLevel::Week => {
                let count = whole_count(days, 7.0);
                let origin = (FIRST_EPOCH_MONDAY_DAYS
                    + i128::from(self.first_weekday.num_days_from_monday()))
                    * MICROS_PER_DAY;
                Some(align_linear(local, origin, count * 7 * MICROS_PER_DAY, rounding))
            }
            CycleLevel::Month => align_calendar(
                local,
                i64::try_from(whole_count(days, DAYS_PER_MONTH)).ok()?,
                rounding,
                month_index,
                month_start_micros,
            ),
            CycleLevel::Year => align_calendar(
                local,
                i64::try_from(whole_count(days, DAYS_PER_YEAR)).ok()?,
                rounding,
                |naive| i64::from(naive.year()),
                year_start_micros,
            ),
        }
    }
}

fn whole_count(days: f64, unit_days: f64) -> i128 {
    ((days / unit_days).round() as i128).max(1)
}

fn align_linear(position: i128, origin: i128, step: i128, rounding: CycleRounding) -> i128 {
    let relative = position - origin;
    let steps = match rounding {
        CycleRounding::Up => {
            let floor = relative.div_euclid(step);
            if relative.rem_euclid(step) == 0 {
                floor
            } else {
                floor + 1
            }
        }
        CycleRounding::Nearest => (relative + step / 2).div_euclid(step),
    };
    origin + steps * step
}

fn naive_from_local_micros(local: i128) -> Option<NaiveDateTime> {
    let micros = i64::try_from(local).ok()?;
    DateTime::<Utc>::from_timestamp_micros(micros).map(|dt| dt.naive_utc())
}

fn local_micros_of(naive: NaiveDateTime) -> i128 {
    i128::from(naive.and_utc().timestamp_micros())
}

fn month_index(naive: NaiveDateTime) -> i64 {
    i64::from(naive.year()) * 12 + i64::from(naive.month0())
}

fn month_start_micros(index: i64) -> Option<i128> {
    let year = i32::try_from(index.div_euclid(12)).ok()?;
    let month = u32::try_from(index.rem_euclid(12)).ok()? + 1;
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(local_micros_of(date.and_hms_opt(0, 0, 0)?))
}

fn year_start_micros(year: i64) -> Option<i128> {
    let year = i32::try_from(year).ok()?;
    let date = NaiveDate::from_ymd_opt(year, 1, 1)?;
    Some(local_micros_of(date.and_hms_opt(0, 0, 0)?))
}

/// Aligns to starts of calendar units whose index is a multiple of `count`.
fn align_calendar(
    local: i128,
    count: i64,
    rounding: CycleRounding,
    index_of: impl Fn(NaiveDateTime) -> i64,
    start_of: impl Fn(i64) -> Option<i128>,
) -> Option<i128> {
    let naive = naive_from_local_micros(local)?;
    let index = index_of(naive);
    let floor_index = index - index.rem_euclid(count);
    // Either neighbour may fall outside the calendar near the extremes.
    let floor_start = start_of(floor_index);
    if floor_start == Some(local) {
        return Some(local);
    }
    let next_start = start_of(floor_index + count);
    match (rounding, floor_start, next_start) {
        (CycleRounding::Up, _, next) => next,
        (CycleRounding::Nearest, Some(floor), Some(next)) => {
            if local - floor <= next - local {
                Some(floor)
            } else {
                Some(next)
            }
        }
        (CycleRounding::Nearest, floor, next) => floor.or(next),
    }
}

impl AxisDomain for TimeDomain {
    type Value = DateTime<Utc>;

    fn supports_cycle(&self, cycle: &str) -> bool {
        CycleLevel::parse(cycle).is_some()
    }

    fn round_to_cycle(
        &self,
        value: DateTime<Utc>,
        interval: TimeDelta,
        cycle: &str,
        rounding: CycleRounding,
    ) -> Option<DateTime<Utc>> {
        let level = CycleLevel::parse(cycle)?;
        let seconds = <DateTime<Utc> as AxisValue>::size_to_units(interval);
        if !seconds.is_finite() || seconds <= 0.0 {
            return None;
        }

        let effective = level.min(CycleLevel::natural(seconds));
        let local = self.to_local_micros(value);
        let aligned = self.round_local(local, seconds, effective, rounding)?;
        self.from_local_micros(aligned)
    }

    fn validate_format(&self, format: &str) -> bool {
        !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    }

    fn format_tick(&self, value: DateTime<Utc>, format: &str) -> String {
        if format.is_empty() {
            return String::new();
        }
        let local = value.with_timezone(&self.timezone.fixed_offset());
        let mut text = String::new();
        if write!(text, "{}", local.format(format)).is_err() {
            return String::new();
        }
        text
    }

    fn snap_origin(&self) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
            .add_interval(TimeDelta::seconds(-self.timezone.offset_seconds()))
    }

    fn snap_step_units(&self, half_pixel_units: f64) -> f64 {
        nearest_step_by_ratio(half_pixel_units, TIME_SNAP_STEPS_SECONDS)
    }

    fn coarse_snap_units(&self) -> Option<f64> {
        Some(COARSE_SNAP_SECONDS)
    }

    fn init_axis_arrangement(&self) -> Vec<ArrangementRecord> {
        time_arrangement_records()
    }
}
