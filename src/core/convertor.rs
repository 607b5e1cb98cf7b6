//! Value/pixel projections.
//!
//! Two independent transforms are provided, each with a forward
//! (`*_to_pixel`) and inverse (`*_to_value`) operation parameterized by a
//! target pixel size:
//!
//! - proportional: plain linear mapping of the range onto `[0, target]`;
//! - logarithmic: the range occupies a central linear band of
//!   `ratio * target` pixels, values outside it are compressed with a
//!   reciprocal falloff so every finite value lands strictly inside
//!   `(0, target)`.
//!
//! Degenerate input (unfilled or empty range, non-positive target size,
//! non-finite pixel) never fails: forward transforms return `0.0`, inverse
//! transforms return `None`.
//!
//! The logarithmic inverse is exact only inside the central band. Outside it
//! one pixel covers more and more domain units the farther it sits from the
//! band, so round trips lose precision monotonically with distance.

use serde::{Deserialize, Serialize};

use crate::core::domain::{AxisDomain, snap_value};
use crate::core::range::Range;
use crate::core::value::AxisValue;
use crate::error::{AxisError, AxisResult};

pub const MIN_PROPORTIONAL_RATIO: f64 = 0.4;
pub const MAX_PROPORTIONAL_RATIO: f64 = 0.9;
pub const DEFAULT_PROPORTIONAL_RATIO: f64 = 0.8;

/// Share of the target size rendered linearly by the logarithmic projection.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ProportionalRatio(f64);

impl ProportionalRatio {
    pub fn new(ratio: f64) -> AxisResult<Self> {
        if !ratio.is_finite() || !(MIN_PROPORTIONAL_RATIO..=MAX_PROPORTIONAL_RATIO).contains(&ratio)
        {
            return Err(AxisError::InvalidData(format!(
                "proportional ratio must be within {MIN_PROPORTIONAL_RATIO}..={MAX_PROPORTIONAL_RATIO}, got {ratio}"
            )));
        }
        Ok(Self(ratio))
    }

    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for ProportionalRatio {
    fn default() -> Self {
        Self(DEFAULT_PROPORTIONAL_RATIO)
    }
}

impl TryFrom<f64> for ProportionalRatio {
    type Error = AxisError;

    fn try_from(value: f64) -> AxisResult<Self> {
        Self::new(value)
    }
}

impl From<ProportionalRatio> for f64 {
    fn from(value: ProportionalRatio) -> Self {
        value.0
    }
}

fn is_valid_target(target_size: f64) -> bool {
    target_size.is_finite() && target_size > 0.0
}

/// `(value - begin) / size`, or `None` for a degenerate range.
pub fn linear_ratio<V: AxisValue>(range: &Range<V>, value: V) -> Option<f64> {
    let begin = range.begin()?;
    let size = range.size_units().filter(|size| size.is_finite() && *size > 0.0)?;
    Some(V::size_to_units(begin.distance_to(value)) / size)
}

#[must_use]
pub fn proportional_to_pixel<V: AxisValue>(range: &Range<V>, value: V, target_size: f64) -> f64 {
    if !is_valid_target(target_size) {
        return 0.0;
    }
    match linear_ratio(range, value) {
        Some(ratio) if !ratio.is_nan() => target_size * ratio,
        _ => 0.0,
    }
}

/// Inverse of [`proportional_to_pixel`].
///
/// The raw value is snapped to the domain's round step for half a pixel, so
/// whole-pixel moves land on clean values.
#[must_use]
pub fn proportional_to_value<D: AxisDomain>(
    domain: &D,
    range: &Range<D::Value>,
    pixel: f64,
    target_size: f64,
) -> Option<D::Value> {
    if !is_valid_target(target_size) || !pixel.is_finite() {
        return None;
    }
    let begin = range.begin()?;
    let size = range.size_units().filter(|size| size.is_finite() && *size > 0.0)?;

    let raw = begin.add_interval(<D::Value as AxisValue>::size_from_units(
        size * (pixel / target_size),
    ));
    let step = domain.snap_step_units(size / target_size / 2.0);
    Some(snap_value(domain, raw, step))
}

/// Keeps far-away values off the exact edges despite float saturation.
fn strictly_inside(pixel: f64, target_size: f64) -> f64 {
    let margin = target_size * f64::EPSILON;
    pixel.clamp(margin, target_size - margin)
}

#[must_use]
pub fn logarithmic_to_pixel<V: AxisValue>(
    range: &Range<V>,
    value: V,
    target_size: f64,
    ratio: ProportionalRatio,
) -> f64 {
    if !is_valid_target(target_size) {
        return 0.0;
    }
    let Some(linear) = linear_ratio(range, value) else {
        return 0.0;
    };
    if linear.is_nan() {
        return 0.0;
    }

    let ratio = ratio.get();
    let outer = target_size * (1.0 - ratio) / 2.0;
    let pixel = if (0.0..=1.0).contains(&linear) {
        target_size / 2.0 + (linear - 0.5) * ratio * target_size
    } else if linear > 1.0 {
        let distance = linear - 1.0;
        target_size - outer / (1.0 + distance)
    } else {
        let distance = -linear;
        outer / (1.0 + distance)
    };
    strictly_inside(pixel, target_size)
}

/// Inverse of [`logarithmic_to_pixel`], snapped to the domain's coarse step.
///
/// Pixels at or beyond the edges map to infinitely distant values and yield
/// `None`.
#[must_use]
pub fn logarithmic_to_value<D: AxisDomain>(
    domain: &D,
    range: &Range<D::Value>,
    pixel: f64,
    target_size: f64,
    ratio: ProportionalRatio,
) -> Option<D::Value> {
    if !is_valid_target(target_size) || !pixel.is_finite() {
        return None;
    }
    let begin = range.begin()?;
    let size = range.size_units().filter(|size| size.is_finite() && *size > 0.0)?;

    let ratio = ratio.get();
    let outer = target_size * (1.0 - ratio) / 2.0;
    let linear = if pixel < outer {
        if pixel <= 0.0 {
            return None;
        }
        -(outer / pixel - 1.0)
    } else if pixel > target_size - outer {
        let rest = target_size - pixel;
        if rest <= 0.0 {
            return None;
        }
        1.0 + (outer / rest - 1.0)
    } else {
        0.5 + (pixel - target_size / 2.0) / (ratio * target_size)
    };

    let raw = begin.add_interval(<D::Value as AxisValue>::size_from_units(size * linear));
    Some(match domain.coarse_snap_units() {
        Some(step) => snap_value(domain, raw, step),
        None => raw,
    })
}

#[cfg(test)]
mod tests {
    use super::{
        ProportionalRatio, logarithmic_to_pixel, logarithmic_to_value, proportional_to_pixel,
        proportional_to_value,
    };
    use crate::core::numeric_domain::NumericDomain;
    use crate::core::range::Range;

    #[test]
    fn ratio_outside_bounds_is_rejected() {
        assert!(ProportionalRatio::new(0.39).is_err());
        assert!(ProportionalRatio::new(0.91).is_err());
        assert!(ProportionalRatio::new(f64::NAN).is_err());
        assert!(ProportionalRatio::new(0.4).is_ok());
        assert!(ProportionalRatio::new(0.9).is_ok());
    }

    #[test]
    fn proportional_edges_are_exact() {
        let range = Range::new(-3.0, 17.5).expect("range");
        assert_eq!(proportional_to_pixel(&range, -3.0, 731.0), 0.0);
        assert_eq!(proportional_to_pixel(&range, 17.5, 731.0), 731.0);
    }

    #[test]
    fn proportional_degenerate_inputs_are_neutral() {
        let domain = NumericDomain;
        let range = Range::new(0.0, 10.0).expect("range");
        assert_eq!(proportional_to_pixel(&range, 5.0, 0.0), 0.0);
        assert_eq!(proportional_to_pixel(&Range::empty(), 5.0, 100.0), 0.0);
        let point = Range::new(3.0, 3.0).expect("point");
        assert_eq!(proportional_to_pixel(&point, 3.0, 100.0), 0.0);
        assert_eq!(proportional_to_value(&domain, &range, 5.0, -1.0), None);
        assert_eq!(proportional_to_value(&domain, &point, 5.0, 100.0), None);
        assert_eq!(proportional_to_value(&domain, &range, f64::NAN, 100.0), None);
    }

    #[test]
    fn logarithmic_center_maps_to_half_target() {
        let range = Range::new(0.0, 100.0).expect("range");
        for ratio in [0.4, 0.55, 0.8, 0.9] {
            let ratio = ProportionalRatio::new(ratio).expect("ratio");
            assert_eq!(logarithmic_to_pixel(&range, 50.0, 640.0, ratio), 320.0);
        }
    }

    #[test]
    fn logarithmic_extreme_values_stay_inside_bounds() {
        let range = Range::new(0.0, 1.0).expect("range");
        let ratio = ProportionalRatio::default();
        for value in [1e300, -1e300, f64::MAX, f64::MIN, f64::INFINITY] {
            let px = logarithmic_to_pixel(&range, value, 500.0, ratio);
            assert!(px > 0.0 && px < 500.0, "value={value}, px={px}");
        }
    }

    #[test]
    fn logarithmic_inverse_rejects_edge_pixels() {
        let domain = NumericDomain;
        let range = Range::new(0.0, 1.0).expect("range");
        let ratio = ProportionalRatio::default();
        assert_eq!(logarithmic_to_value(&domain, &range, 0.0, 500.0, ratio), None);
        assert_eq!(logarithmic_to_value(&domain, &range, 500.0, 500.0, ratio), None);
    }
}
