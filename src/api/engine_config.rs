use serde::{Deserialize, Serialize};

use crate::core::ProportionalRatio;
use crate::error::{AxisError, AxisResult};

pub const DEFAULT_MIN_LABEL_DISTANCE_PX: f64 = 65.0;
pub const DEFAULT_MIN_TICK_DISTANCE_PX: f64 = 1.0;
pub const DEFAULT_MIN_LABELED_TICK_DISTANCE_PX: f64 = 2.0;
pub const DEFAULT_MAX_TICKS_PER_TIER: usize = 10_000;

/// Public axis engine configuration.
///
/// This type is serializable so host applications can persist/load axis setup
/// alongside their own layout state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisEngineConfig {
    /// Minimum on-screen distance between StdLabel ticks used by arrangement
    /// selection.
    #[serde(default = "default_min_label_distance_px")]
    pub min_label_distance_px: f64,
    /// Tiers denser than this are not generated at all.
    #[serde(default = "default_min_tick_distance_px")]
    pub min_tick_distance_px: f64,
    /// Tiers denser than this are generated without label text.
    #[serde(default = "default_min_labeled_tick_distance_px")]
    pub min_labeled_tick_distance_px: f64,
    #[serde(default)]
    pub proportional_ratio: ProportionalRatio,
    #[serde(default = "default_max_ticks_per_tier")]
    pub max_ticks_per_tier: usize,
}

impl Default for AxisEngineConfig {
    fn default() -> Self {
        Self {
            min_label_distance_px: default_min_label_distance_px(),
            min_tick_distance_px: default_min_tick_distance_px(),
            min_labeled_tick_distance_px: default_min_labeled_tick_distance_px(),
            proportional_ratio: ProportionalRatio::default(),
            max_ticks_per_tier: default_max_ticks_per_tier(),
        }
    }
}

impl AxisEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_label_distance_px(mut self, distance_px: f64) -> Self {
        self.min_label_distance_px = distance_px;
        self
    }

    #[must_use]
    pub fn with_min_tick_distance_px(mut self, distance_px: f64) -> Self {
        self.min_tick_distance_px = distance_px;
        self
    }

    #[must_use]
    pub fn with_min_labeled_tick_distance_px(mut self, distance_px: f64) -> Self {
        self.min_labeled_tick_distance_px = distance_px;
        self
    }

    #[must_use]
    pub fn with_proportional_ratio(mut self, ratio: ProportionalRatio) -> Self {
        self.proportional_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_max_ticks_per_tier(mut self, max_ticks: usize) -> Self {
        self.max_ticks_per_tier = max_ticks;
        self
    }

    pub fn validate(&self) -> AxisResult<()> {
        if !self.min_label_distance_px.is_finite() || self.min_label_distance_px <= 0.0 {
            return Err(AxisError::InvalidData(
                "min label distance must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("min tick distance", self.min_tick_distance_px),
            ("min labeled tick distance", self.min_labeled_tick_distance_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AxisError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.max_ticks_per_tier == 0 {
            return Err(AxisError::InvalidData(
                "max ticks per tier must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| AxisError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_min_label_distance_px() -> f64 {
    DEFAULT_MIN_LABEL_DISTANCE_PX
}

fn default_min_tick_distance_px() -> f64 {
    DEFAULT_MIN_TICK_DISTANCE_PX
}

fn default_min_labeled_tick_distance_px() -> f64 {
    DEFAULT_MIN_LABELED_TICK_DISTANCE_PX
}

fn default_max_ticks_per_tier() -> usize {
    DEFAULT_MAX_TICKS_PER_TIER
}
