use std::fmt;

use ordered_float::OrderedFloat;

/// Structural cache key for everything tick generation depends on.
///
/// Two engines (or two states of one engine) with equal identities produce
/// the same tick list. Hosts can key their own drawing caches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisIdentity<V> {
    pub begin: Option<V>,
    pub end: Option<V>,
    pub pixel_size: OrderedFloat<f64>,
    pub pixel_first: OrderedFloat<f64>,
}

/// `begin;end;pixel_size;pixel_first`, with `-` for a missing bound.
impl<V: fmt::Display> fmt::Display for AxisIdentity<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.begin {
            Some(begin) => write!(f, "{begin};")?,
            None => f.write_str("-;")?,
        }
        match &self.end {
            Some(end) => write!(f, "{end};")?,
            None => f.write_str("-;")?,
        }
        write!(f, "{};{}", self.pixel_size, self.pixel_first)
    }
}
