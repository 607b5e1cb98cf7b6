use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::arrangement::ArrangementRecord;
use crate::core::value::AxisValue;

/// Difference type of a domain's values.
pub type DomainSize<D> = <<D as AxisDomain>::Value as AxisValue>::Size;

/// How a raw value is moved onto a cycle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CycleRounding {
    /// Smallest boundary `>= value`. Used for the first tick of a tier.
    Up,
    /// Closest boundary. Used for every following tick and for snapping.
    Nearest,
}

/// Domain-specific capabilities injected into the generic axis engine.
///
/// The engine never inspects values directly: calendar-aware rounding and label
/// formatting come through this trait, as does inverse snapping.
pub trait AxisDomain: Clone + fmt::Debug {
    type Value: AxisValue;

    /// Whether a rounding rule exists for `cycle`.
    fn supports_cycle(&self, cycle: &str) -> bool;

    /// Moves `value` onto a boundary of `interval` under the rules of `cycle`.
    ///
    /// Returns `None` for an unknown cycle or when the boundary is not
    /// representable.
    fn round_to_cycle(
        &self,
        value: Self::Value,
        interval: DomainSize<Self>,
        cycle: &str,
        rounding: CycleRounding,
    ) -> Option<Self::Value>;

    /// Whether `format` can be rendered by [`AxisDomain::format_tick`].
    /// The empty format is always valid and renders no text.
    fn validate_format(&self, format: &str) -> bool;

    fn format_tick(&self, value: Self::Value, format: &str) -> String;

    /// Anchor that snapped values are multiples of a step away from.
    fn snap_origin(&self) -> Self::Value;

    /// Round step used by the proportional inverse, given half a pixel's
    /// worth of units.
    fn snap_step_units(&self, half_pixel_units: f64) -> f64;

    /// Fixed step used by the logarithmic inverse; `None` disables snapping.
    fn coarse_snap_units(&self) -> Option<f64>;

    /// Built-in arrangement catalog, finest band first.
    fn init_axis_arrangement(&self) -> Vec<ArrangementRecord>;
}

/// Snaps `value` to the nearest multiple of `step_units` from the domain origin.
pub fn snap_value<D: AxisDomain>(domain: &D, value: D::Value, step_units: f64) -> D::Value {
    if !step_units.is_finite() || step_units <= 0.0 {
        return value;
    }

    let origin = domain.snap_origin();
    let offset = <D::Value as AxisValue>::size_to_units(origin.distance_to(value));
    if !offset.is_finite() {
        return value;
    }
    let snapped = (offset / step_units).round() * step_units;
    origin.add_interval(<D::Value as AxisValue>::size_from_units(snapped))
}

/// Picks the step closest to `target` on a logarithmic scale.
///
/// `steps` must be sorted ascending and non-empty; the boundary steps are
/// used outside their span.
pub(crate) fn nearest_step_by_ratio(target: f64, steps: &[f64]) -> f64 {
    let (Some(&first), Some(&last)) = (steps.first(), steps.last()) else {
        return 0.0;
    };
    if !target.is_finite() || target <= first {
        return first;
    }
    if target >= last {
        return last;
    }

    steps
        .windows(2)
        .find(|pair| pair[0] <= target && target <= pair[1])
        .map(|pair| {
            if (target / pair[0]) <= (pair[1] / target) {
                pair[0]
            } else {
                pair[1]
            }
        })
        .unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::nearest_step_by_ratio;

    const STEPS: &[f64] = &[1.0, 5.0, 60.0, 300.0];

    #[test]
    fn nearest_step_uses_ratio_distance() {
        assert_eq!(nearest_step_by_ratio(209.0, STEPS), 300.0);
        assert_eq!(nearest_step_by_ratio(2.0, STEPS), 1.0);
        assert_eq!(nearest_step_by_ratio(3.0, STEPS), 5.0);
    }

    #[test]
    fn nearest_step_clamps_to_boundaries() {
        assert_eq!(nearest_step_by_ratio(0.01, STEPS), 1.0);
        assert_eq!(nearest_step_by_ratio(1e9, STEPS), 300.0);
        assert_eq!(nearest_step_by_ratio(f64::NAN, STEPS), 1.0);
        assert_eq!(nearest_step_by_ratio(4.0, &[]), 0.0);
    }
}
