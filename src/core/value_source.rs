use std::cell::RefCell;
use std::rc::Rc;

use crate::core::convertor::{
    ProportionalRatio, logarithmic_to_pixel, logarithmic_to_value, proportional_to_pixel,
    proportional_to_value,
};
use crate::core::domain::AxisDomain;
use crate::core::range::Range;
use crate::core::value::AxisValue;

/// Where a [`CoordinateConvertor`] reads its visible range from.
pub trait ValueSource<V> {
    fn current_value(&self) -> Range<V>;
}

/// A [`ValueSource`] the convertor may also write back to.
pub trait ValueSink<V>: ValueSource<V> {
    fn store_value(&mut self, value: Range<V>);
}

impl<V: AxisValue> ValueSource<V> for Range<V> {
    fn current_value(&self) -> Range<V> {
        *self
    }
}

impl<V: AxisValue> ValueSink<V> for Range<V> {
    fn store_value(&mut self, value: Range<V>) {
        *self = value;
    }
}

impl<V, T: ValueSource<V> + ?Sized> ValueSource<V> for &T {
    fn current_value(&self) -> Range<V> {
        (**self).current_value()
    }
}

impl<V, T: ValueSource<V> + ?Sized> ValueSource<V> for &mut T {
    fn current_value(&self) -> Range<V> {
        (**self).current_value()
    }
}

impl<V, T: ValueSink<V> + ?Sized> ValueSink<V> for &mut T {
    fn store_value(&mut self, value: Range<V>) {
        (**self).store_value(value);
    }
}

/// Shared, single-threaded range holder.
///
/// Clones observe each other's writes. No locking is performed; the holder is
/// `!Send` so it cannot leak across threads.
#[derive(Debug, Clone, Default)]
pub struct ValueSynchronizer<V> {
    inner: Rc<RefCell<Range<V>>>,
}

impl<V: AxisValue> ValueSynchronizer<V> {
    #[must_use]
    pub fn new(value: Range<V>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    #[must_use]
    pub fn get(&self) -> Range<V> {
        *self.inner.borrow()
    }

    pub fn set(&self, value: Range<V>) {
        *self.inner.borrow_mut() = value;
    }

    /// Whether both handles point at the same holder.
    #[must_use]
    pub fn shares_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<V: AxisValue> ValueSource<V> for ValueSynchronizer<V> {
    fn current_value(&self) -> Range<V> {
        self.get()
    }
}

impl<V: AxisValue> ValueSink<V> for ValueSynchronizer<V> {
    fn store_value(&mut self, value: Range<V>) {
        self.set(value);
    }
}

/// Value/pixel projections bound to a range source.
///
/// The source decides ownership: an owned [`Range`], a borrowed axis engine,
/// or a [`ValueSynchronizer`] shared with other views.
#[derive(Debug, Clone)]
pub struct CoordinateConvertor<D, S> {
    domain: D,
    source: S,
    ratio: ProportionalRatio,
}

impl<D: AxisDomain, S: ValueSource<D::Value>> CoordinateConvertor<D, S> {
    #[must_use]
    pub fn new(domain: D, source: S) -> Self {
        Self {
            domain,
            source,
            ratio: ProportionalRatio::default(),
        }
    }

    #[must_use]
    pub fn with_proportional_ratio(mut self, ratio: ProportionalRatio) -> Self {
        self.ratio = ratio;
        self
    }

    #[must_use]
    pub fn proportional_ratio(&self) -> ProportionalRatio {
        self.ratio
    }

    #[must_use]
    pub fn domain(&self) -> &D {
        &self.domain
    }

    #[must_use]
    pub fn value(&self) -> Range<D::Value> {
        self.source.current_value()
    }

    #[must_use]
    pub fn to_pixel(&self, value: D::Value, target_size: f64) -> f64 {
        proportional_to_pixel(&self.value(), value, target_size)
    }

    #[must_use]
    pub fn to_value(&self, pixel: f64, target_size: f64) -> Option<D::Value> {
        proportional_to_value(&self.domain, &self.value(), pixel, target_size)
    }

    #[must_use]
    pub fn to_pixel_logarithmic(&self, value: D::Value, target_size: f64) -> f64 {
        logarithmic_to_pixel(&self.value(), value, target_size, self.ratio)
    }

    #[must_use]
    pub fn to_value_logarithmic(&self, pixel: f64, target_size: f64) -> Option<D::Value> {
        logarithmic_to_value(&self.domain, &self.value(), pixel, target_size, self.ratio)
    }

    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<D: AxisDomain, S: ValueSink<D::Value>> CoordinateConvertor<D, S> {
    pub fn set_value(&mut self, value: Range<D::Value>) {
        self.source.store_value(value);
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateConvertor, ValueSynchronizer};
    use crate::core::numeric_domain::NumericDomain;
    use crate::core::range::Range;

    #[test]
    fn owned_range_is_updated_in_place() {
        let range = Range::new(0.0, 10.0).expect("range");
        let mut convertor = CoordinateConvertor::new(NumericDomain, range);
        assert_eq!(convertor.to_pixel(5.0, 100.0), 50.0);

        convertor.set_value(Range::new(0.0, 20.0).expect("range"));
        assert_eq!(convertor.to_pixel(5.0, 100.0), 25.0);
    }

    #[test]
    fn synchronized_convertors_observe_each_other() {
        let shared = ValueSynchronizer::new(Range::new(0.0, 10.0).expect("range"));
        let reader = CoordinateConvertor::new(NumericDomain, shared.clone());
        let mut writer = CoordinateConvertor::new(NumericDomain, shared.clone());

        writer.set_value(Range::new(10.0, 30.0).expect("range"));
        assert_eq!(reader.to_pixel(20.0, 200.0), 100.0);
        assert!(shared.shares_with(&reader.into_source()));
    }

    #[test]
    fn borrowed_range_is_read_only_view() {
        let range = Range::new(-5.0, 5.0).expect("range");
        let convertor = CoordinateConvertor::new(NumericDomain, &range);
        assert_eq!(convertor.to_pixel(0.0, 64.0), 32.0);
        assert_eq!(convertor.to_value(32.0, 64.0), Some(0.0));
    }
}
