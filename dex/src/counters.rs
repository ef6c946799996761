//! Counter search
//!
//! A counter here is any entity that carries a type the target is weak to.
//! This is an approximation, not an inversion of the effectiveness chart:
//! the target's own resolved weaknesses are matched against each candidate's
//! types, so the candidate's own relation never enters into it (and the
//! target itself may appear).

use typedex_chart::{TypeChart, TypeSet, resolve};

use crate::entity::Entity;
use crate::index::EntityIndex;

/// Maximum number of counters returned per target
pub const COUNTER_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct CounterFinder<'a> {
    chart: &'a TypeChart,
    index: &'a EntityIndex,
}

impl<'a> CounterFinder<'a> {
    pub fn new(chart: &'a TypeChart, index: &'a EntityIndex) -> Self {
        Self { chart, index }
    }

    /// Names of up to [`COUNTER_LIMIT`] entities sharing a type `target` is weak to
    pub fn find_counters(&self, target: &Entity) -> Vec<String> {
        let resolved = resolve(self.chart, target.type1, target.type2);
        self.counters_for(resolved.weaknesses)
    }

    /// Names of the first [`COUNTER_LIMIT`] entities with a type in `weaknesses`
    pub fn counters_for(&self, weaknesses: TypeSet) -> Vec<String> {
        self.index
            .find_by_any_type(weaknesses)
            .take(COUNTER_LIMIT)
            .map(|e| e.name.clone())
            .collect()
    }
}
