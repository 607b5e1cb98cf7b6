//! axis-rs: axis scaling, tick arrangement and value/pixel conversion.
//!
//! The crate keeps a strict split between the pure model in [`core`]
//! (ranges, arrangement catalogs, calendar rounding, projections) and the
//! stateful [`api::AxisEngine`] that turns a visible range and a pixel budget
//! into a ruler.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisEngine, AxisEngineConfig, AxisIdentity, NumericAxis, TimeAxis};
pub use error::{AxisError, AxisResult};
