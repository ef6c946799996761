//! Type effectiveness chart and matchup resolution.
//!
//! # Overview
//!
//! `typedex-chart` is the leaf of the workspace:
//!
//! ```text
//! typedex-chart (types + chart + resolver) ← THIS CRATE
//!        │
//!        ▼
//! typedex-dex (entity index, counters, info service)
//!        │
//!        ▼
//! typedex-cli (presentation)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 elemental types
//! - [`TypeSet`] - Bitset of types, iterated in declaration order
//! - [`TypeRelation`] - Weak/strong/immune sets for one type
//! - [`TypeChart`] - Validated, read-only table of relations
//! - [`query::resolve`] - Combine one or two types into weaknesses and strengths
//!
//! # Example Usage
//!
//! ```
//! use typedex_chart::{query, Type, TypeChart};
//!
//! let chart = TypeChart::standard();
//! let resolved = query::resolve(&chart, Type::Fire, Some(Type::Flying));
//!
//! assert!(resolved.weaknesses.contains(Type::Rock));
//! assert!(!resolved.weaknesses.contains(Type::Ground));
//! ```

use thiserror::Error;

mod chart;
pub mod query;
pub mod types;

pub use chart::{RawRelation, TypeChart, TypeRelation};
pub use query::{Resolved, resolve, resolve_names};
pub use types::{Type, TypeSet};

/// A type name outside the fixed set of 18
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown type: {0:?}")]
pub struct UnknownTypeError(pub String);

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart entry {entry:?} references an unknown type: {source}")]
    UnknownType {
        entry: String,
        source: UnknownTypeError,
    },

    #[error("Duplicate chart entry for {0}")]
    DuplicateEntry(Type),

    #[error("Missing chart entry for {0}")]
    MissingEntry(Type),

    #[error("Chart entry {entry} lists {other} as both a weakness and an immunity")]
    OverlappingRelation { entry: Type, other: Type },

    #[cfg(feature = "serde")]
    #[error("Invalid chart JSON: {0}")]
    Json(#[from] serde_json::Error),
}
