use crate::core::VisualTick;

use super::AxisIdentity;

/// Runtime metrics exposed by the in-engine tick cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickCacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Ticks held for the current identity.
    pub size: usize,
}

/// Last generated tick list, keyed by the geometry it was generated for.
#[derive(Debug, Clone)]
pub(super) struct TickCache<V> {
    identity: Option<AxisIdentity<V>>,
    arrangement_index: Option<usize>,
    ticks: Vec<VisualTick<V>>,
    hits: u64,
    misses: u64,
}

impl<V> Default for TickCache<V> {
    fn default() -> Self {
        Self {
            identity: None,
            arrangement_index: None,
            ticks: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<V: PartialEq> TickCache<V> {
    pub(super) fn is_fresh(&self, identity: &AxisIdentity<V>) -> bool {
        self.identity.as_ref() == Some(identity)
    }

    pub(super) fn record_hit(&mut self) {
        self.hits = self.hits.saturating_add(1);
    }

    pub(super) fn store(&mut self, identity: AxisIdentity<V>, ticks: Vec<VisualTick<V>>) {
        self.misses = self.misses.saturating_add(1);
        self.identity = Some(identity);
        self.ticks = ticks;
    }

    pub(super) fn ticks(&self) -> &[VisualTick<V>] {
        &self.ticks
    }

    /// Records the arrangement used for the latest generation and returns the
    /// previous one.
    pub(super) fn swap_arrangement_index(&mut self, index: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.arrangement_index, index)
    }

    /// Drops cached ticks so the next read regenerates them.
    pub(super) fn invalidate(&mut self) {
        self.identity = None;
        self.ticks.clear();
    }

    pub(super) fn stats(&self) -> TickCacheStats {
        TickCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.ticks.len(),
        }
    }
}
