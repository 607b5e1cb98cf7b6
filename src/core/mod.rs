pub mod arrangement;
pub mod convertor;
pub mod domain;
pub mod numeric_domain;
pub mod range;
pub mod tick;
pub mod time_catalog;
pub mod time_domain;
pub mod value;
pub mod value_source;

pub use arrangement::{
    ArrangementItem, ArrangementOne, ArrangementRecord, ArrangementSet, TierRecord,
};
pub use convertor::{
    ProportionalRatio, logarithmic_to_pixel, logarithmic_to_value, proportional_to_pixel,
    proportional_to_value,
};
pub use domain::{AxisDomain, CycleRounding, DomainSize};
pub use numeric_domain::NumericDomain;
pub use range::Range;
pub use tick::{TickType, VisualTick};
pub use time_domain::{TimeAxisTimeZone, TimeDomain};
pub use value::AxisValue;
pub use value_source::{CoordinateConvertor, ValueSink, ValueSource, ValueSynchronizer};
