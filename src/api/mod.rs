mod coordinate_access;
mod engine;
mod engine_config;
mod identity;
mod json_contract;
mod scale_navigation;
mod tick_cache;
mod tick_generation;

pub use engine::{AxisEngine, NumericAxis, TimeAxis};
pub use engine_config::{
    AxisEngineConfig, DEFAULT_MAX_TICKS_PER_TIER, DEFAULT_MIN_LABEL_DISTANCE_PX,
    DEFAULT_MIN_LABELED_TICK_DISTANCE_PX, DEFAULT_MIN_TICK_DISTANCE_PX,
};
pub use identity::AxisIdentity;
pub use json_contract::{
    ARRANGEMENT_CATALOG_JSON_SCHEMA_V1, ArrangementCatalog, ArrangementCatalogJsonContractV1,
};
pub use tick_cache::TickCacheStats;
