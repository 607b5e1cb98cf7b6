use tracing::{debug, trace};

use crate::core::{AxisDomain, AxisValue, Range};
use crate::error::{AxisError, AxisResult};

use super::AxisEngine;

impl<D: AxisDomain> AxisEngine<D> {
    /// Scales the visible span by `factor` around the pixel `anchor_px`.
    ///
    /// `factor > 1` zooms out. The value under the anchor keeps its pixel
    /// position and the resulting scale is clamped to the scale limit.
    /// Degenerate geometry is left untouched.
    pub fn zoom_by_factor(&mut self, anchor_px: f64, factor: f64) -> AxisResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(AxisError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_px.is_finite() {
            return Err(AxisError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        let (Some(scale), Some(begin)) = (self.raw_scale(), self.value.begin()) else {
            trace!("zoom ignored on degenerate axis geometry");
            return Ok(());
        };

        let target_scale = self.scale_limit.clamp(scale * factor);
        let anchor_ratio = (anchor_px - self.pixel_first) / self.pixel_size;
        let anchor_offset = anchor_ratio * self.pixel_size * scale;
        let new_size = self.pixel_size * target_scale;
        let new_begin = begin.add_interval(<D::Value as AxisValue>::size_from_units(
            anchor_offset - anchor_ratio * new_size,
        ));
        let new_end = new_begin.add_interval(<D::Value as AxisValue>::size_from_units(new_size));

        debug!(factor, from_scale = scale, to_scale = target_scale, "zoom axis");
        self.value = Range::new(new_begin, new_end)?;
        Ok(())
    }

    /// Shifts the visible range by `delta_px` pixels worth of units.
    ///
    /// Positive deltas move the range towards larger values.
    pub fn pan_by_pixels(&mut self, delta_px: f64) -> AxisResult<()> {
        if !delta_px.is_finite() {
            return Err(AxisError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let (Some(scale), Some(begin), Some(end)) =
            (self.raw_scale(), self.value.begin(), self.value.end())
        else {
            trace!("pan ignored on degenerate axis geometry");
            return Ok(());
        };

        let shift = <D::Value as AxisValue>::size_from_units(delta_px * scale);
        trace!(delta_px, "pan axis");
        self.value = Range::new(begin.add_interval(shift), end.add_interval(shift))?;
        Ok(())
    }
}
