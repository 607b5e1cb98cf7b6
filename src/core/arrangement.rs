use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::tick::TickType;
use crate::core::value::AxisValue;
use crate::error::{AxisError, AxisResult};

pub const DEFAULT_SELECT_DISTANCE_RATIO: f64 = 1.0;

fn default_select_distance_ratio() -> f64 {
    DEFAULT_SELECT_DISTANCE_RATIO
}

/// Declarative description of one tick tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRecord {
    pub tick_type: TickType,
    /// Spacing between ticks expressed in domain units (seconds for time).
    pub interval_units: f64,
    #[serde(default)]
    pub format: String,
}

/// Declarative description of one arrangement, as stored in catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementRecord {
    pub cycle: String,
    #[serde(default)]
    pub initial_label_format: String,
    #[serde(default = "default_select_distance_ratio")]
    pub select_distance_ratio: f64,
    pub tiers: Vec<TierRecord>,
}

/// One tier of an arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementItem<S> {
    tick_type: TickType,
    interval: S,
    format: String,
}

impl<S: Copy> ArrangementItem<S> {
    #[must_use]
    pub fn tick_type(&self) -> TickType {
        self.tick_type
    }

    #[must_use]
    pub fn interval(&self) -> S {
        self.interval
    }

    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

/// Complete ruler configuration for one scale band.
///
/// `scale_from..=scale_to` is the band of scales (domain units per pixel) in
/// which this entry is the one selected by its [`ArrangementSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementOne<S> {
    scale_from: f64,
    scale_to: f64,
    items: SmallVec<[ArrangementItem<S>; 5]>,
    initial_label_format: String,
    cycle: String,
    select_distance_ratio: f64,
}

impl<S: Copy> ArrangementOne<S> {
    #[must_use]
    pub fn scale_from(&self) -> f64 {
        self.scale_from
    }

    #[must_use]
    pub fn scale_to(&self) -> f64 {
        self.scale_to
    }

    /// Tiers ordered from lightest to heaviest tick type.
    #[must_use]
    pub fn items(&self) -> &[ArrangementItem<S>] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, tick_type: TickType) -> Option<&ArrangementItem<S>> {
        self.items.iter().find(|item| item.tick_type == tick_type)
    }

    /// The StdLabel tier, present in every validated arrangement.
    #[must_use]
    pub fn std_label(&self) -> &ArrangementItem<S> {
        self.items
            .iter()
            .find(|item| item.tick_type == TickType::StdLabel)
            .unwrap_or(&self.items[0])
    }

    #[must_use]
    pub fn initial_label_format(&self) -> &str {
        &self.initial_label_format
    }

    #[must_use]
    pub fn cycle(&self) -> &str {
        &self.cycle
    }

    #[must_use]
    pub fn select_distance_ratio(&self) -> f64 {
        self.select_distance_ratio
    }

    #[must_use]
    pub fn contains_scale(&self, scale: f64) -> bool {
        self.scale_from <= scale && scale <= self.scale_to
    }
}

/// Ordered catalog of arrangements, finest scale band first.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementSet<V: AxisValue> {
    entries: Vec<ArrangementOne<V::Size>>,
    min_label_distance_px: f64,
}

impl<V: AxisValue> ArrangementSet<V> {
    /// Builds and validates a catalog.
    ///
    /// Entries must be ordered by non-decreasing StdLabel interval and every
    /// entry must own a band of scales no earlier entry already covers.
    pub fn from_records(
        records: &[ArrangementRecord],
        min_label_distance_px: f64,
    ) -> AxisResult<Self> {
        if records.is_empty() {
            return Err(AxisError::EmptyArrangementSet);
        }
        validate_min_label_distance(min_label_distance_px)?;

        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            entries.push(arrangement_from_record::<V>(index, record)?);
        }
        derive_scale_bands::<V>(&mut entries, min_label_distance_px)?;

        Ok(Self {
            entries,
            min_label_distance_px,
        })
    }

    /// Re-derives scale bands for a different minimum label distance.
    pub fn with_min_label_distance(&self, min_label_distance_px: f64) -> AxisResult<Self> {
        validate_min_label_distance(min_label_distance_px)?;
        let mut entries = self.entries.clone();
        derive_scale_bands::<V>(&mut entries, min_label_distance_px)?;
        Ok(Self {
            entries,
            min_label_distance_px,
        })
    }

    #[must_use]
    pub fn entries(&self) -> &[ArrangementOne<V::Size>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn min_label_distance_px(&self) -> f64 {
        self.min_label_distance_px
    }

    /// On-screen StdLabel spacing the entry would produce at `scale`.
    #[must_use]
    pub fn label_spacing_px(entry: &ArrangementOne<V::Size>, scale: f64) -> f64 {
        V::size_to_units(entry.std_label().interval()) / scale
    }

    /// Index of the entry to use at `scale` (domain units per pixel).
    ///
    /// The first entry whose StdLabel spacing reaches
    /// `min_label_distance * select_distance_ratio` wins. Scales finer than
    /// the catalog resolve to the finest entry, coarser ones to the coarsest.
    #[must_use]
    pub fn select_index(&self, scale: f64) -> usize {
        if scale.is_nan() || scale <= 0.0 {
            return 0;
        }
        self.first_fitting(scale).unwrap_or(self.entries.len().saturating_sub(1))
    }

    /// True when even the coarsest entry packs labels tighter than allowed
    /// at `scale`, so selection falls back to it.
    #[must_use]
    pub fn exceeds_catalog(&self, scale: f64) -> bool {
        scale > 0.0 && self.first_fitting(scale).is_none()
    }

    fn first_fitting(&self, scale: f64) -> Option<usize> {
        self.entries.iter().position(|entry| {
            let required = self.min_label_distance_px * entry.select_distance_ratio;
            Self::label_spacing_px(entry, scale) >= required
        })
    }

    #[must_use]
    pub fn select_arrangement(&self, scale: f64) -> &ArrangementOne<V::Size> {
        &self.entries[self.select_index(scale)]
    }

    /// Catalog back in declarative form.
    #[must_use]
    pub fn to_records(&self) -> Vec<ArrangementRecord> {
        self.entries
            .iter()
            .map(|entry| ArrangementRecord {
                cycle: entry.cycle.clone(),
                initial_label_format: entry.initial_label_format.clone(),
                select_distance_ratio: entry.select_distance_ratio,
                tiers: entry
                    .items
                    .iter()
                    .map(|item| TierRecord {
                        tick_type: item.tick_type,
                        interval_units: V::size_to_units(item.interval),
                        format: item.format.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

fn validate_min_label_distance(min_label_distance_px: f64) -> AxisResult<()> {
    if !min_label_distance_px.is_finite() || min_label_distance_px <= 0.0 {
        return Err(AxisError::InvalidData(
            "minimum label distance must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn arrangement_from_record<V: AxisValue>(
    index: usize,
    record: &ArrangementRecord,
) -> AxisResult<ArrangementOne<V::Size>> {
    let ratio = record.select_distance_ratio;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(AxisError::InvalidArrangement(format!(
            "entry {index}: select distance ratio must be finite and > 0"
        )));
    }

    let mut items: SmallVec<[ArrangementItem<V::Size>; 5]> = SmallVec::new();
    for tier in &record.tiers {
        if !tier.interval_units.is_finite() || tier.interval_units <= 0.0 {
            return Err(AxisError::InvalidArrangement(format!(
                "entry {index}: {:?} interval must be finite and > 0",
                tier.tick_type
            )));
        }
        if items.iter().any(|item| item.tick_type == tier.tick_type) {
            return Err(AxisError::InvalidArrangement(format!(
                "entry {index}: duplicated {:?} tier",
                tier.tick_type
            )));
        }
        items.push(ArrangementItem {
            tick_type: tier.tick_type,
            interval: V::size_from_units(tier.interval_units),
            format: tier.format.clone(),
        });
    }
    if !items
        .iter()
        .any(|item| item.tick_type == TickType::StdLabel)
    {
        return Err(AxisError::InvalidArrangement(format!(
            "entry {index}: StdLabel tier is required"
        )));
    }
    items.sort_by_key(|item| item.tick_type);

    Ok(ArrangementOne {
        scale_from: 0.0,
        scale_to: 0.0,
        items,
        initial_label_format: record.initial_label_format.clone(),
        cycle: record.cycle.clone(),
        select_distance_ratio: ratio,
    })
}

fn derive_scale_bands<V: AxisValue>(
    entries: &mut [ArrangementOne<V::Size>],
    min_label_distance_px: f64,
) -> AxisResult<()> {
    let mut previous_interval = 0.0;
    let mut previous_scale_to = 0.0;
    for (index, entry) in entries.iter_mut().enumerate() {
        let interval = V::size_to_units(entry.std_label().interval());
        if interval < previous_interval {
            return Err(AxisError::InvalidArrangement(format!(
                "entry {index}: StdLabel interval {interval} is finer than the previous entry"
            )));
        }

        let scale_to = interval / (min_label_distance_px * entry.select_distance_ratio);
        if scale_to < previous_scale_to {
            return Err(AxisError::InvalidArrangement(format!(
                "entry {index}: scale band is shadowed by an earlier entry"
            )));
        }

        entry.scale_from = previous_scale_to;
        entry.scale_to = scale_to;
        previous_interval = interval;
        previous_scale_to = scale_to;
    }
    Ok(())
}
