use crate::core::{
    AxisDomain, CoordinateConvertor, Range, ValueSink, ValueSource, logarithmic_to_pixel,
    logarithmic_to_value, proportional_to_pixel, proportional_to_value,
};

use super::AxisEngine;

impl<D: AxisDomain> AxisEngine<D> {
    /// Linear projection of `value` onto `[0, target_size]`.
    #[must_use]
    pub fn to_pixel(&self, value: D::Value, target_size: f64) -> f64 {
        proportional_to_pixel(&self.value, value, target_size)
    }

    /// Inverse of [`AxisEngine::to_pixel`], snapped to a round step.
    #[must_use]
    pub fn to_value(&self, pixel: f64, target_size: f64) -> Option<D::Value> {
        proportional_to_value(&self.domain, &self.value, pixel, target_size)
    }

    #[must_use]
    pub fn to_pixel_logarithmic(&self, value: D::Value, target_size: f64) -> f64 {
        logarithmic_to_pixel(
            &self.value,
            value,
            target_size,
            self.config.proportional_ratio,
        )
    }

    #[must_use]
    pub fn to_value_logarithmic(&self, pixel: f64, target_size: f64) -> Option<D::Value> {
        logarithmic_to_value(
            &self.domain,
            &self.value,
            pixel,
            target_size,
            self.config.proportional_ratio,
        )
    }

    /// Position of `value` in the engine's own geometry, `pixel_first`
    /// included.
    #[must_use]
    pub fn value_to_pixel(&self, value: D::Value) -> f64 {
        self.pixel_first + self.to_pixel(value, self.pixel_size)
    }

    #[must_use]
    pub fn pixel_to_value(&self, pixel: f64) -> Option<D::Value> {
        self.to_value(pixel - self.pixel_first, self.pixel_size)
    }

    /// Convertor reading the engine's live range.
    #[must_use]
    pub fn convertor(&self) -> CoordinateConvertor<D, &Self> {
        CoordinateConvertor::new(self.domain.clone(), self)
            .with_proportional_ratio(self.config.proportional_ratio)
    }
}

impl<D: AxisDomain> ValueSource<D::Value> for AxisEngine<D> {
    fn current_value(&self) -> Range<D::Value> {
        self.value
    }
}

impl<D: AxisDomain> ValueSink<D::Value> for AxisEngine<D> {
    fn store_value(&mut self, value: Range<D::Value>) {
        self.set_value(value);
    }
}
