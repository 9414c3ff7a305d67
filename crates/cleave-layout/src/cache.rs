#![forbid(unsafe_code)]

//! Memoization of layout results.
//!
//! Hit-testing consumers map pointer events against the rects that were
//! actually painted, so solver output has to be cached between frames
//! rather than recomputed from live state. [`LayoutCache`] keys results on
//! the full solve input; identical frames cost one hash lookup.

use std::collections::HashMap;

use crate::{Constraint, Direction, Flex, FlexMode, Rect, Sides};

/// Complete identity of one solve: every input that can change the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutCacheKey {
    area: Rect,
    direction: Direction,
    flex: FlexMode,
    margin: Sides,
    gap: u16,
    constraints: Vec<Constraint>,
}

impl LayoutCacheKey {
    /// Build the key for splitting `area` with `flex`.
    pub fn new(flex: &Flex, area: Rect) -> Self {
        Self {
            area,
            direction: flex.direction,
            flex: flex.flex,
            margin: flex.margin,
            gap: flex.gap,
            constraints: flex.constraints.clone(),
        }
    }
}

/// Hit/miss counters for cache tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutCacheStats {
    /// Solves answered from the map.
    pub hits: u64,
    /// Solves that had to run the solver.
    pub misses: u64,
    /// Entries currently stored.
    pub entries: usize,
}

/// A bounded memo table over [`Flex::split`].
///
/// When the table reaches capacity it is cleared wholesale; frame-oriented
/// workloads re-warm the handful of live layouts within one frame, which
/// keeps the policy trivial and the worst case bounded.
#[derive(Debug)]
pub struct LayoutCache {
    entries: HashMap<LayoutCacheKey, Vec<Rect>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl LayoutCache {
    /// Create a cache holding at most `capacity` distinct layouts.
    ///
    /// A capacity of zero is bumped to one so the cache stays usable.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Split `area` with `flex`, reusing a previous result when the
    /// inputs match exactly.
    pub fn split(&mut self, flex: &Flex, area: Rect) -> Vec<Rect> {
        let key = LayoutCacheKey::new(flex, area);
        if let Some(rects) = self.entries.get(&key) {
            self.hits += 1;
            return rects.clone();
        }
        self.misses += 1;
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        let rects = flex.split(area);
        self.entries.insert(key, rects.clone());
        rects
    }

    /// Current counters.
    pub fn stats(&self) -> LayoutCacheStats {
        LayoutCacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }

    /// Drop all stored layouts and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(64)
    }
}
