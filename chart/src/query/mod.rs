//! Matchup queries over a [`TypeChart`](crate::TypeChart)
//!
//! Resolves the combined weaknesses and strengths of a single- or dual-typed
//! creature from the individual chart entries.

mod matchup;

pub use matchup::{Resolved, resolve, resolve_names};
