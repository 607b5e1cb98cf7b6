//! Built-in arrangement catalog for time axes.
//!
//! Intervals are seconds. Months and years are average lengths; the calendar
//! cycles snap them back onto real month and year starts.

use crate::core::arrangement::{ArrangementRecord, TierRecord};
use crate::core::tick::TickType::{self, BigLabel, BigTick, Pixel, StdLabel, StdTick};
use crate::core::time_domain::{
    CYCLE_DAY, CYCLE_MONTH, CYCLE_TIME, CYCLE_WEEK, CYCLE_YEAR, DAYS_PER_MONTH, DAYS_PER_YEAR,
    SECONDS_PER_DAY,
};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = SECONDS_PER_DAY;
const WEEK: f64 = 7.0 * DAY;
const MONTH: f64 = DAYS_PER_MONTH * DAY;
const QUARTER: f64 = 3.0 * MONTH;
const HALF_YEAR: f64 = 6.0 * MONTH;
const YEAR: f64 = DAYS_PER_YEAR * DAY;

const SECOND_INITIAL: &str = "%Y-%m-%d %H:%M:%S";
const MINUTE_INITIAL: &str = "%Y-%m-%d %H:%M";
const DAY_INITIAL: &str = "%d %b %Y";
const MONTH_INITIAL: &str = "%b %Y";
const YEAR_INITIAL: &str = "%Y";

struct CatalogEntry {
    cycle: &'static str,
    initial: &'static str,
    ratio: f64,
    tiers: &'static [(TickType, f64, &'static str)],
}

const TIME_ARRANGEMENTS: &[CatalogEntry] = &[
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: SECOND_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 0.1, ""),
            (StdTick, 0.5, ""),
            (StdLabel, 1.0, "%H:%M:%S"),
            (BigLabel, MINUTE, "%H:%M"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: SECOND_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 0.5, ""),
            (StdTick, 1.0, ""),
            (StdLabel, 5.0, "%H:%M:%S"),
            (BigLabel, MINUTE, "%H:%M"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: SECOND_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 1.0, ""),
            (StdTick, 5.0, ""),
            (StdLabel, 15.0, "%H:%M:%S"),
            (BigLabel, MINUTE, "%H:%M"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: SECOND_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 1.0, ""),
            (StdTick, 5.0, ""),
            (BigTick, 15.0, ""),
            (StdLabel, 30.0, "%H:%M:%S"),
            (BigLabel, 5.0 * MINUTE, "%H:%M"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 5.0, ""),
            (StdTick, 15.0, ""),
            (BigTick, 30.0, ""),
            (StdLabel, MINUTE, "%H:%M"),
            (BigLabel, HOUR, "%H:%M"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 15.0, ""),
            (StdTick, MINUTE, ""),
            (StdLabel, 5.0 * MINUTE, "%H:%M"),
            (BigLabel, HOUR, "%H:%M"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, MINUTE, ""),
            (StdTick, 5.0 * MINUTE, ""),
            (StdLabel, 15.0 * MINUTE, "%H:%M"),
            (BigLabel, HOUR, "%H:%M"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, MINUTE, ""),
            (StdTick, 5.0 * MINUTE, ""),
            (BigTick, 15.0 * MINUTE, ""),
            (StdLabel, 30.0 * MINUTE, "%H:%M"),
            (BigLabel, DAY, "%d %b"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 5.0 * MINUTE, ""),
            (StdTick, 15.0 * MINUTE, ""),
            (BigTick, 30.0 * MINUTE, ""),
            (StdLabel, HOUR, "%H:%M"),
            (BigLabel, DAY, "%d %b"),
        ],
    },
    // Same spacing with hour-only labels, usable at a tighter scale.
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 0.8,
        tiers: &[
            (Pixel, 5.0 * MINUTE, ""),
            (StdTick, 15.0 * MINUTE, ""),
            (BigTick, 30.0 * MINUTE, ""),
            (StdLabel, HOUR, "%Hh"),
            (BigLabel, DAY, "%d %b"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 15.0 * MINUTE, ""),
            (StdTick, HOUR, ""),
            (StdLabel, 2.0 * HOUR, "%H:%M"),
            (BigLabel, DAY, "%d %b"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_TIME,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 30.0 * MINUTE, ""),
            (StdTick, HOUR, ""),
            (StdLabel, 3.0 * HOUR, "%H:%M"),
            (BigLabel, DAY, "%d %b"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_DAY,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, HOUR, ""),
            (StdTick, 3.0 * HOUR, ""),
            (StdLabel, 6.0 * HOUR, "%H:%M"),
            (BigLabel, DAY, "%d %b"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_DAY,
        initial: MINUTE_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 3.0 * HOUR, ""),
            (StdTick, 6.0 * HOUR, ""),
            (StdLabel, 12.0 * HOUR, "%H:%M"),
            (BigLabel, DAY, "%d %b"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_WEEK,
        initial: DAY_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 3.0 * HOUR, ""),
            (StdTick, 6.0 * HOUR, ""),
            (BigTick, 12.0 * HOUR, ""),
            (StdLabel, DAY, "%d %b"),
            (BigLabel, WEEK, "%d %b"),
        ],
    },
    // Day-of-month only.
    CatalogEntry {
        cycle: CYCLE_WEEK,
        initial: DAY_INITIAL,
        ratio: 0.6,
        tiers: &[
            (Pixel, 3.0 * HOUR, ""),
            (StdTick, 6.0 * HOUR, ""),
            (BigTick, 12.0 * HOUR, ""),
            (StdLabel, DAY, "%d"),
            (BigLabel, WEEK, "%d %b"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_MONTH,
        initial: DAY_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 6.0 * HOUR, ""),
            (StdTick, DAY, ""),
            (StdLabel, 2.0 * DAY, "%d %b"),
            (BigLabel, MONTH, "%b %Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_MONTH,
        initial: DAY_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 12.0 * HOUR, ""),
            (StdTick, DAY, ""),
            (StdLabel, WEEK, "%d %b"),
            (BigLabel, MONTH, "%b %Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_MONTH,
        initial: DAY_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, DAY, ""),
            (StdTick, WEEK, ""),
            (StdLabel, 2.0 * WEEK, "%d %b"),
            (BigLabel, MONTH, "%b %Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: MONTH_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, DAY, ""),
            (StdTick, WEEK, ""),
            (StdLabel, MONTH, "%b"),
            (BigLabel, YEAR, "%Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: MONTH_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, WEEK, ""),
            (StdTick, MONTH, ""),
            (StdLabel, QUARTER, "%b"),
            (BigLabel, YEAR, "%Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: MONTH_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, WEEK, ""),
            (StdTick, MONTH, ""),
            (StdLabel, HALF_YEAR, "%b"),
            (BigLabel, YEAR, "%Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: YEAR_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, MONTH, ""),
            (StdTick, QUARTER, ""),
            (StdLabel, YEAR, "%Y"),
            (BigLabel, 10.0 * YEAR, "%Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: YEAR_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, QUARTER, ""),
            (StdTick, YEAR, ""),
            (StdLabel, 5.0 * YEAR, "%Y"),
            (BigLabel, 10.0 * YEAR, "%Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: YEAR_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, YEAR, ""),
            (StdTick, 5.0 * YEAR, ""),
            (StdLabel, 10.0 * YEAR, "%Y"),
            (BigLabel, 100.0 * YEAR, "%Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: YEAR_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, YEAR, ""),
            (StdTick, 10.0 * YEAR, ""),
            (StdLabel, 50.0 * YEAR, "%Y"),
            (BigLabel, 100.0 * YEAR, "%Y"),
        ],
    },
    CatalogEntry {
        cycle: CYCLE_YEAR,
        initial: YEAR_INITIAL,
        ratio: 1.0,
        tiers: &[
            (Pixel, 10.0 * YEAR, ""),
            (StdTick, 50.0 * YEAR, ""),
            (StdLabel, 100.0 * YEAR, "%Y"),
            (BigLabel, 1_000.0 * YEAR, "%Y"),
        ],
    },
];

/// Time catalog in declarative form, finest band first.
#[must_use]
pub fn time_arrangement_records() -> Vec<ArrangementRecord> {
    TIME_ARRANGEMENTS
        .iter()
        .map(|entry| ArrangementRecord {
            cycle: entry.cycle.to_owned(),
            initial_label_format: entry.initial.to_owned(),
            select_distance_ratio: entry.ratio,
            tiers: entry
                .tiers
                .iter()
                .map(|&(tick_type, interval_units, format)| TierRecord {
                    tick_type,
                    interval_units,
                    format: format.to_owned(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::time_arrangement_records;
    use crate::core::arrangement::ArrangementSet;
    use crate::core::domain::AxisDomain;
    use crate::core::time_domain::TimeDomain;

    #[test]
    fn built_in_catalog_is_well_formed() {
        let records = time_arrangement_records();
        ArrangementSet::<DateTime<Utc>>::from_records(&records, 65.0).expect("catalog validates");

        let domain = TimeDomain::default();
        for record in &records {
            assert!(domain.supports_cycle(&record.cycle));
            assert!(domain.validate_format(&record.initial_label_format));
            for tier in &record.tiers {
                assert!(domain.validate_format(&tier.format), "{}", tier.format);
            }
        }
    }
}
