//! Per-network memoization of maximum-flow results

use crate::model::{FlowKey, FlowResult, FlowValue};
use std::collections::HashSet;

/// Set of computed flow results, unique by `(source, target)`.
#[derive(Debug, Clone, Default)]
pub struct FlowCache {
    entries: HashSet<FlowResult>,
}

impl FlowCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for a vertex pair, if one was computed since the last invalidation.
    pub fn lookup(&self, key: &FlowKey) -> Option<FlowValue> {
        self.entries.get(key).map(FlowResult::value)
    }

    pub fn contains(&self, key: &FlowKey) -> bool {
        self.entries.contains(key)
    }

    /// Store a result, replacing any entry with the same key.
    pub fn insert(&mut self, result: FlowResult) {
        self.entries.replace(result);
    }

    /// Drop every entry. Returns how many were discarded.
    ///
    /// Clears the whole set, not just the pairs touching the changed section.
    pub fn invalidate(&mut self) -> usize {
        let cleared = self.entries.len();
        self.entries.clear();
        cleared
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &FlowResult> {
        self.entries.iter()
    }

    /// All entries by value, then source, then target.
    pub fn sorted(&self) -> Vec<FlowResult> {
        let mut results: Vec<FlowResult> = self.entries.iter().cloned().collect();
        results.sort_by(FlowResult::cmp_listing);
        results
    }
}
