//! Matchup info entry point for presentation layers

use serde::Serialize;
use typedex_chart::{TypeChart, TypeSet, resolve};

use crate::NotFoundError;
use crate::counters::CounterFinder;
use crate::index::EntityIndex;

/// Everything known about one queried entity.
///
/// `weaknesses` and `strengths` iterate in type declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchupResult {
    /// Stored name of the matched entity
    pub name: String,
    pub weaknesses: TypeSet,
    pub strengths: TypeSet,
    pub counters: Vec<String>,
}

/// Owns the chart and dataset, both loaded once at startup.
///
/// Queries only read, so one service can be shared across threads by
/// reference or behind an `Arc`.
#[derive(Debug, Clone)]
pub struct InfoService {
    chart: TypeChart,
    index: EntityIndex,
}

impl InfoService {
    pub fn new(chart: TypeChart, index: EntityIndex) -> Self {
        Self { chart, index }
    }

    pub fn chart(&self) -> &TypeChart {
        &self.chart
    }

    pub fn index(&self) -> &EntityIndex {
        &self.index
    }

    /// Look up `name` (case-insensitive) and resolve its matchups
    pub fn get_info(&self, name: &str) -> Result<MatchupResult, NotFoundError> {
        let entity = self.index.find_by_name(name).ok_or_else(|| NotFoundError {
            name: name.to_string(),
        })?;

        let resolved = resolve(&self.chart, entity.type1, entity.type2);
        let counters =
            CounterFinder::new(&self.chart, &self.index).counters_for(resolved.weaknesses);

        tracing::debug!(
            query = name,
            entity = %entity.name,
            weaknesses = ?resolved.weaknesses,
            counters = counters.len(),
            "Resolved matchup info"
        );

        Ok(MatchupResult {
            name: entity.name.clone(),
            weaknesses: resolved.weaknesses,
            strengths: resolved.strengths,
            counters,
        })
    }
}
