use ordered_float::OrderedFloat;
use tracing::debug;

use crate::core::{
    ArrangementOne, ArrangementRecord, ArrangementSet, AxisDomain, CycleRounding, DomainSize,
    NumericDomain, Range, TickType, TimeDomain,
};
use crate::error::{AxisError, AxisResult};

use super::{AxisEngineConfig, AxisIdentity, TickCacheStats, tick_cache::TickCache};

/// Axis engine over calendar time.
pub type TimeAxis = AxisEngine<TimeDomain>;

/// Axis engine over plain `f64` quantities.
pub type NumericAxis = AxisEngine<NumericDomain>;

/// Stateful ruler for one axis.
///
/// `AxisEngine` owns the visible range and pixel geometry, selects the
/// arrangement matching the current scale and produces the tick list. Rounding
/// and label text come from the injected [`AxisDomain`].
#[derive(Debug, Clone)]
pub struct AxisEngine<D: AxisDomain> {
    pub(super) domain: D,
    pub(super) config: AxisEngineConfig,
    pub(super) arrangements: ArrangementSet<D::Value>,
    pub(super) value: Range<D::Value>,
    pub(super) pixel_size: f64,
    pub(super) pixel_first: f64,
    pub(super) scale_limit: Range<f64>,
    pub(super) tick_cache: TickCache<D::Value>,
}

impl<D: AxisDomain> AxisEngine<D> {
    /// Creates an engine over the domain's built-in catalog.
    pub fn new(domain: D, config: AxisEngineConfig) -> AxisResult<Self> {
        let records = domain.init_axis_arrangement();
        Self::with_arrangement_records(domain, config, &records)
    }

    pub fn with_arrangement_records(
        domain: D,
        config: AxisEngineConfig,
        records: &[ArrangementRecord],
    ) -> AxisResult<Self> {
        config.validate()?;
        let arrangements = ArrangementSet::from_records(records, config.min_label_distance_px)?;
        Self::with_arrangement_set(domain, config, arrangements)
    }

    /// Creates an engine over a prebuilt catalog.
    ///
    /// Every cycle and label format in the catalog must be supported by the
    /// domain; scale bands are re-derived for the configured label distance.
    pub fn with_arrangement_set(
        domain: D,
        config: AxisEngineConfig,
        arrangements: ArrangementSet<D::Value>,
    ) -> AxisResult<Self> {
        config.validate()?;
        validate_catalog(&domain, &arrangements)?;
        let arrangements = if arrangements.min_label_distance_px() == config.min_label_distance_px {
            arrangements
        } else {
            arrangements.with_min_label_distance(config.min_label_distance_px)?
        };
        debug!(
            entries = arrangements.len(),
            min_label_distance_px = config.min_label_distance_px,
            "loaded arrangement catalog"
        );

        Ok(Self {
            domain,
            config,
            arrangements,
            value: Range::empty(),
            pixel_size: 0.0,
            pixel_first: 0.0,
            scale_limit: Range::empty(),
            tick_cache: TickCache::default(),
        })
    }

    #[must_use]
    pub fn domain(&self) -> &D {
        &self.domain
    }

    #[must_use]
    pub fn config(&self) -> AxisEngineConfig {
        self.config
    }

    /// Replaces the configuration, re-deriving scale bands when the label
    /// distance changes.
    pub fn set_config(&mut self, config: AxisEngineConfig) -> AxisResult<()> {
        config.validate()?;
        if config.min_label_distance_px != self.config.min_label_distance_px {
            self.arrangements = self
                .arrangements
                .with_min_label_distance(config.min_label_distance_px)?;
        }
        debug!(
            min_label_distance_px = config.min_label_distance_px,
            min_tick_distance_px = config.min_tick_distance_px,
            proportional_ratio = config.proportional_ratio.get(),
            "set axis config"
        );
        self.config = config;
        self.tick_cache.invalidate();
        Ok(())
    }

    #[must_use]
    pub fn arrangements(&self) -> &ArrangementSet<D::Value> {
        &self.arrangements
    }

    #[must_use]
    pub fn value(&self) -> Range<D::Value> {
        self.value
    }

    /// Sets the visible range. Unfilled or zero-sized ranges are accepted and
    /// simply produce no ticks.
    pub fn set_value(&mut self, value: Range<D::Value>) {
        debug!(begin = ?value.begin(), end = ?value.end(), "set axis value");
        self.value = value;
    }

    #[must_use]
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Sets the rendered length. Zero is accepted and produces no ticks.
    pub fn set_pixel_size(&mut self, pixel_size: f64) -> AxisResult<()> {
        if !pixel_size.is_finite() || pixel_size < 0.0 {
            return Err(AxisError::InvalidData(
                "pixel size must be finite and >= 0".to_owned(),
            ));
        }
        debug!(pixel_size, "set axis pixel size");
        self.pixel_size = pixel_size;
        Ok(())
    }

    #[must_use]
    pub fn pixel_first(&self) -> f64 {
        self.pixel_first
    }

    /// Sets the pixel offset added to every engine-relative position.
    pub fn set_pixel_first(&mut self, pixel_first: f64) -> AxisResult<()> {
        if !pixel_first.is_finite() {
            return Err(AxisError::InvalidData(
                "pixel first must be finite".to_owned(),
            ));
        }
        debug!(pixel_first, "set axis pixel first");
        self.pixel_first = pixel_first;
        Ok(())
    }

    #[must_use]
    pub fn scale_limit(&self) -> Range<f64> {
        self.scale_limit
    }

    /// Sets the floor/ceiling for the scale in domain units per pixel.
    /// Missing bounds leave that side open.
    pub fn set_scale_limit(&mut self, scale_limit: Range<f64>) -> AxisResult<()> {
        if scale_limit.begin().is_some_and(|floor| floor < 0.0) {
            return Err(AxisError::InvalidData(
                "scale limit floor must be >= 0".to_owned(),
            ));
        }
        debug!(
            floor = ?scale_limit.begin(),
            ceiling = ?scale_limit.end(),
            "set axis scale limit"
        );
        self.scale_limit = scale_limit;
        self.tick_cache.invalidate();
        Ok(())
    }

    /// Domain units per pixel for the current geometry, ignoring the limit.
    pub(super) fn raw_scale(&self) -> Option<f64> {
        if !(self.pixel_size.is_finite() && self.pixel_size > 0.0) || !self.value.is_valid() {
            return None;
        }
        self.value
            .size_units()
            .map(|size| size / self.pixel_size)
            .filter(|scale| scale.is_finite() && *scale > 0.0)
    }

    /// Current scale clamped to the scale limit, or `None` for degenerate
    /// geometry.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        self.raw_scale().map(|scale| self.scale_limit.clamp(scale))
    }

    #[must_use]
    pub fn current_arrangement_index(&self) -> usize {
        self.arrangements
            .select_index(self.scale().unwrap_or(f64::NAN))
    }

    /// Arrangement matching the current scale; the finest one for degenerate
    /// geometry.
    #[must_use]
    pub fn current_arrangement(&self) -> &ArrangementOne<DomainSize<D>> {
        &self.arrangements.entries()[self.current_arrangement_index()]
    }

    #[must_use]
    pub fn identity(&self) -> AxisIdentity<D::Value> {
        AxisIdentity {
            begin: self.value.begin(),
            end: self.value.end(),
            pixel_size: OrderedFloat(self.pixel_size),
            pixel_first: OrderedFloat(self.pixel_first),
        }
    }

    #[must_use]
    pub fn tick_cache_stats(&self) -> TickCacheStats {
        self.tick_cache.stats()
    }

    /// Rounds `value` to the nearest boundary of the current arrangement's
    /// `tick_type` tier. `None` when the arrangement has no such tier.
    #[must_use]
    pub fn round_to_tick_type(&self, value: D::Value, tick_type: TickType) -> Option<D::Value> {
        let arrangement = self.current_arrangement();
        let item = arrangement.item(tick_type)?;
        self.domain.round_to_cycle(
            value,
            item.interval(),
            arrangement.cycle(),
            CycleRounding::Nearest,
        )
    }
}

fn validate_catalog<D: AxisDomain>(
    domain: &D,
    arrangements: &ArrangementSet<D::Value>,
) -> AxisResult<()> {
    if arrangements.is_empty() {
        return Err(AxisError::EmptyArrangementSet);
    }
    for entry in arrangements.entries() {
        if !domain.supports_cycle(entry.cycle()) {
            return Err(AxisError::UnknownCycle {
                cycle: entry.cycle().to_owned(),
            });
        }
        let formats = std::iter::once(entry.initial_label_format())
            .chain(entry.items().iter().map(|item| item.format()));
        for format in formats {
            if !domain.validate_format(format) {
                return Err(AxisError::InvalidFormat {
                    format: format.to_owned(),
                });
            }
        }
    }
    Ok(())
}
