use serde::{Deserialize, Serialize};

use crate::core::arrangement::{ArrangementRecord, TierRecord};
use crate::core::domain::{AxisDomain, CycleRounding, nearest_step_by_ratio};
use crate::core::tick::TickType;

/// Plain multiples of the tier interval.
pub const CYCLE_DECIMAL: &str = "decimal";

const MIN_DECADE: i32 = -6;
const MAX_DECADE: i32 = 8;
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Axis domain for plain `f64` quantities (lengths, indices, samples).
///
/// Label formats are `%.Nf` with optional literal text around it,
/// e.g. `"%.1f m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumericDomain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DecimalFormat<'a> {
    prefix: &'a str,
    precision: usize,
    suffix: &'a str,
}

fn parse_decimal_format(format: &str) -> Option<DecimalFormat<'_>> {
    let start = format.find("%.")?;
    let rest = &format[start + 2..];
    let digits_len = rest.find(|c: char| !c.is_ascii_digit())?;
    if digits_len == 0 || rest.as_bytes()[digits_len] != b'f' {
        return None;
    }
    let precision: usize = rest[..digits_len].parse().ok()?;
    if precision > 17 {
        return None;
    }
    let suffix = &rest[digits_len + 1..];
    if suffix.contains("%.") {
        return None;
    }
    Some(DecimalFormat {
        prefix: &format[..start],
        precision,
        suffix,
    })
}

fn round_to_multiple(value: f64, interval: f64, rounding: CycleRounding) -> Option<f64> {
    if !value.is_finite() || !interval.is_finite() || interval <= 0.0 {
        return None;
    }
    let quotient = value / interval;
    let nearest = quotient.round();
    let steps = match rounding {
        CycleRounding::Nearest => nearest,
        CycleRounding::Up if (quotient - nearest).abs() <= BOUNDARY_TOLERANCE => nearest,
        CycleRounding::Up => quotient.ceil(),
    };
    let rounded = steps * interval;
    // Avoid "-0" labels.
    Some(if rounded == 0.0 { 0.0 } else { rounded })
}

/// 1-2-5 steps: `(label, std tick, pixel)` per mantissa.
const DECIMAL_MANTISSAS: [(f64, f64, f64); 3] =
    [(1.0, 0.2, 0.1), (2.0, 0.5, 0.1), (5.0, 1.0, 0.5)];

impl AxisDomain for NumericDomain {
    type Value = f64;

    fn supports_cycle(&self, cycle: &str) -> bool {
        cycle == CYCLE_DECIMAL
    }

    fn round_to_cycle(
        &self,
        value: f64,
        interval: f64,
        cycle: &str,
        rounding: CycleRounding,
    ) -> Option<f64> {
        if !self.supports_cycle(cycle) {
            return None;
        }
        round_to_multiple(value, interval, rounding)
    }

    fn validate_format(&self, format: &str) -> bool {
        format.is_empty() || parse_decimal_format(format).is_some()
    }

    fn format_tick(&self, value: f64, format: &str) -> String {
        let Some(parsed) = parse_decimal_format(format) else {
            return String::new();
        };
        let value = if value == 0.0 { 0.0 } else { value };
        format!(
            "{}{:.*}{}",
            parsed.prefix, parsed.precision, value, parsed.suffix
        )
    }

    fn snap_origin(&self) -> f64 {
        0.0
    }

    fn snap_step_units(&self, half_pixel_units: f64) -> f64 {
        if !half_pixel_units.is_finite() || half_pixel_units <= 0.0 {
            return 0.0;
        }
        let decade = 10f64.powi(half_pixel_units.log10().floor() as i32);
        let steps = [decade, 2.0 * decade, 5.0 * decade, 10.0 * decade];
        nearest_step_by_ratio(half_pixel_units, &steps)
    }

    fn coarse_snap_units(&self) -> Option<f64> {
        None
    }

    fn init_axis_arrangement(&self) -> Vec<ArrangementRecord> {
        let mut records = Vec::new();
        for decade in MIN_DECADE..=MAX_DECADE {
            let unit = 10f64.powi(decade);
            let precision = (-decade).max(0);
            let format = format!("%.{precision}f");
            for (mantissa, tick, pixel) in DECIMAL_MANTISSAS {
                let label = mantissa * unit;
                records.push(ArrangementRecord {
                    cycle: CYCLE_DECIMAL.to_owned(),
                    initial_label_format: format.clone(),
                    select_distance_ratio: 1.0,
                    tiers: vec![
                        TierRecord {
                            tick_type: TickType::Pixel,
                            interval_units: pixel * unit,
                            format: String::new(),
                        },
                        TierRecord {
                            tick_type: TickType::StdTick,
                            interval_units: tick * unit,
                            format: String::new(),
                        },
                        TierRecord {
                            tick_type: TickType::StdLabel,
                            interval_units: label,
                            format: format.clone(),
                        },
                        TierRecord {
                            tick_type: TickType::BigLabel,
                            interval_units: 10.0 * unit,
                            format: format.clone(),
                        },
                    ],
                });
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::{CYCLE_DECIMAL, NumericDomain};
    use crate::core::domain::{AxisDomain, CycleRounding};

    #[test]
    fn first_tick_rounding_tolerates_float_noise() {
        let domain = NumericDomain;
        let value = 0.1 + 0.2;
        let up = domain
            .round_to_cycle(value, 0.1, CYCLE_DECIMAL, CycleRounding::Up)
            .expect("known cycle");
        assert!((up - 0.3).abs() < 1e-12);
        let up = domain
            .round_to_cycle(0.31, 0.1, CYCLE_DECIMAL, CycleRounding::Up)
            .expect("known cycle");
        assert!((up - 0.4).abs() < 1e-12);
    }

    #[test]
    fn unknown_cycle_has_no_rule() {
        assert_eq!(
            NumericDomain.round_to_cycle(1.0, 1.0, "month", CycleRounding::Up),
            None
        );
    }

    #[test]
    fn decimal_format_keeps_literal_text() {
        let domain = NumericDomain;
        assert!(domain.validate_format("%.1f m"));
        assert!(domain.validate_format(""));
        assert!(!domain.validate_format("%d"));
        assert!(!domain.validate_format("%.f"));
        assert_eq!(domain.format_tick(12.345, "%.1f m"), "12.3 m");
        assert_eq!(domain.format_tick(-0.0, "x=%.0f"), "x=0");
    }

    #[test]
    fn snap_step_follows_one_two_five_series() {
        let domain = NumericDomain;
        assert_eq!(domain.snap_step_units(0.13), 0.1);
        assert_eq!(domain.snap_step_units(0.16), 0.2);
        assert_eq!(domain.snap_step_units(40.0), 50.0);
        assert_eq!(domain.snap_step_units(0.0), 0.0);
    }
}
