use std::cmp::Ordering;

use crate::core::value::AxisValue;
use crate::error::{AxisError, AxisResult};

/// Immutable `[begin, end]` interval over an axis value type.
///
/// Either bound may be missing. A missing bound is treated as open by
/// [`Range::contains`] and [`Range::clamp`], while [`Range::size`] requires
/// both. When both bounds are set `end >= begin` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<V> {
    begin: Option<V>,
    end: Option<V>,
}

impl<V> Default for Range<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V> Range<V> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            begin: None,
            end: None,
        }
    }
}

impl<V: AxisValue> Range<V> {
    /// Creates a filled range, rejecting `end < begin` and incomparable bounds.
    pub fn new(begin: V, end: V) -> AxisResult<Self> {
        Self::from_bounds(Some(begin), Some(end))
    }

    /// Creates a range with optional bounds.
    pub fn from_bounds(begin: Option<V>, end: Option<V>) -> AxisResult<Self> {
        if let (Some(b), Some(e)) = (begin, end) {
            match b.partial_cmp(&e) {
                Some(Ordering::Less | Ordering::Equal) => {}
                Some(Ordering::Greater) => {
                    return Err(AxisError::InvalidRange {
                        begin: format!("{b:?}"),
                        end: format!("{e:?}"),
                    });
                }
                None => {
                    return Err(AxisError::InvalidData(
                        "range bounds must be comparable".to_owned(),
                    ));
                }
            }
        }
        for bound in [begin, end].into_iter().flatten() {
            if bound.partial_cmp(&bound).is_none() {
                return Err(AxisError::InvalidData(
                    "range bounds must be comparable".to_owned(),
                ));
            }
        }
        Ok(Self { begin, end })
    }

    /// Builds `[begin, begin + size]`.
    pub fn from_begin_and_size(begin: V, size: V::Size) -> AxisResult<Self> {
        Self::new(begin, begin.add_interval(size))
    }

    #[must_use]
    pub fn begin(&self) -> Option<V> {
        self.begin
    }

    #[must_use]
    pub fn end(&self) -> Option<V> {
        self.end
    }

    /// Both bounds are present.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.begin.is_some() && self.end.is_some()
    }

    #[must_use]
    pub fn size(&self) -> Option<V::Size> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) => Some(begin.distance_to(end)),
            _ => None,
        }
    }

    #[must_use]
    pub fn size_units(&self) -> Option<f64> {
        self.size().map(V::size_to_units)
    }

    /// Filled and spanning a finite, strictly positive size.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.size_units()
            .is_some_and(|size| size.is_finite() && size > 0.0)
    }

    #[must_use]
    pub fn contains(&self, value: V) -> bool {
        let after_begin = self.begin.is_none_or(|begin| begin <= value);
        let before_end = self.end.is_none_or(|end| value <= end);
        after_begin && before_end
    }

    /// Clamps `value` into the range, leaving it untouched on open sides.
    #[must_use]
    pub fn clamp(&self, value: V) -> V {
        match (self.begin, self.end) {
            (Some(begin), _) if value < begin => begin,
            (_, Some(end)) if value > end => end,
            _ => value,
        }
    }

    pub fn with_begin(self, begin: Option<V>) -> AxisResult<Self> {
        Self::from_bounds(begin, self.end)
    }

    pub fn with_end(self, end: Option<V>) -> AxisResult<Self> {
        Self::from_bounds(self.begin, end)
    }
}
