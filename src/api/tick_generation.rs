use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::core::{
    ArrangementItem, AxisDomain, AxisValue, CycleRounding, DomainSize, VisualTick,
    proportional_to_pixel,
};

use super::AxisEngine;

impl<D: AxisDomain> AxisEngine<D> {
    /// Tick list for the current geometry.
    ///
    /// The list is regenerated only when the engine identity changed since
    /// the last call; otherwise the cached list is returned as is.
    pub fn ticks(&mut self) -> &[VisualTick<D::Value>] {
        let identity = self.identity();
        if self.tick_cache.is_fresh(&identity) {
            self.tick_cache.record_hit();
            trace!(count = self.tick_cache.ticks().len(), "tick cache hit");
        } else {
            let ticks = self.generate_ticks();
            trace!(count = ticks.len(), "regenerated ticks");
            self.tick_cache.store(identity, ticks);
            let index = self.scale().map(|_| self.current_arrangement_index());
            let previous = self.tick_cache.swap_arrangement_index(index);
            if index.is_some() && previous != index {
                let scale = self.scale().unwrap_or(f64::NAN);
                if self.arrangements.exceeds_catalog(scale) {
                    warn!(scale, "scale exceeds arrangement catalog; using coarsest entry");
                }
                debug!(from = ?previous, to = ?index, "switched axis arrangement");
            }
        }
        self.tick_cache.ticks()
    }

    /// Generates the tick list without touching the cache.
    ///
    /// Ticks of all enabled tiers are merged, ordered by pixel position with
    /// the heavier tick first on ties. Degenerate geometry yields an empty
    /// list.
    #[must_use]
    pub fn generate_ticks(&self) -> Vec<VisualTick<D::Value>> {
        let (Some(scale), Some(raw_scale)) = (self.scale(), self.raw_scale()) else {
            return Vec::new();
        };
        let (Some(begin), Some(end)) = (self.value.begin(), self.value.end()) else {
            return Vec::new();
        };

        let arrangement = self.arrangements.select_arrangement(scale);
        let mut ticks = Vec::new();
        for item in arrangement.items() {
            let spacing_px = <D::Value as AxisValue>::size_to_units(item.interval()) / raw_scale;
            if spacing_px < self.config.min_tick_distance_px {
                trace!(
                    tick_type = ?item.tick_type(),
                    spacing_px,
                    "skipping tier below minimum tick distance"
                );
                continue;
            }
            let labeled = !item.format().is_empty()
                && spacing_px >= self.config.min_labeled_tick_distance_px;
            self.push_tier_ticks(&mut ticks, arrangement.cycle(), item, labeled, begin, end);
        }

        ticks.sort_by(|left, right| {
            left.pixel_position
                .partial_cmp(&right.pixel_position)
                .unwrap_or(Ordering::Equal)
                .then_with(|| right.tick_type.cmp(&left.tick_type))
        });

        let initial_format = arrangement.initial_label_format();
        if !initial_format.is_empty() {
            if let Some(first) = ticks
                .iter_mut()
                .find(|tick| tick.tick_type.is_label() && tick.has_label())
            {
                first.text = self.domain.format_tick(first.value, initial_format);
            }
        }
        ticks
    }

    /// Walks one tier: the first tick rounds up onto the cycle, every
    /// following tick adds the interval and rounds to the nearest boundary.
    fn push_tier_ticks(
        &self,
        ticks: &mut Vec<VisualTick<D::Value>>,
        cycle: &str,
        item: &ArrangementItem<DomainSize<D>>,
        labeled: bool,
        begin: D::Value,
        end: D::Value,
    ) {
        let interval = item.interval();
        let Some(mut tick) = self
            .domain
            .round_to_cycle(begin, interval, cycle, CycleRounding::Up)
        else {
            return;
        };

        let mut count = 0_usize;
        while tick <= end {
            if count >= self.config.max_ticks_per_tier {
                warn!(
                    tick_type = ?item.tick_type(),
                    max_ticks = self.config.max_ticks_per_tier,
                    "tick tier truncated at cap"
                );
                break;
            }
            let text = if labeled {
                self.domain.format_tick(tick, item.format())
            } else {
                String::new()
            };
            ticks.push(VisualTick {
                value: tick,
                pixel_position: self.pixel_first
                    + proportional_to_pixel(&self.value, tick, self.pixel_size),
                tick_type: item.tick_type(),
                text,
            });
            count += 1;

            let Some(next) = self.domain.round_to_cycle(
                tick.add_interval(interval),
                interval,
                cycle,
                CycleRounding::Nearest,
            ) else {
                break;
            };
            if next <= tick {
                warn!(
                    tick_type = ?item.tick_type(),
                    tick = ?tick,
                    "tick tier made no forward progress"
                );
                break;
            }
            tick = next;
        }
    }
}
