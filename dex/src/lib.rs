//! Entity index, counter search and matchup info service.
//!
//! This crate loads a dataset of named entities tagged with one or two
//! types and answers "what is this weak to, what does it hit, and what
//! counters it" using a [`TypeChart`](typedex_chart::TypeChart).
//!
//! # Main Types
//!
//! - [`Entity`] - A named record with one or two types
//! - [`EntityIndex`] - Read-only collection with name and type lookups
//! - [`CounterFinder`] - Sample of entities exploiting a target's weaknesses
//! - [`InfoService`] - The single query entry point for presentation layers
//!
//! # Example Usage
//!
//! ```
//! use typedex_chart::TypeChart;
//! use typedex_dex::{EntityIndex, InfoService};
//!
//! let csv = "Name,Type1,Type2\nCharizard,Fire,Flying\nSquirtle,Water,\n";
//! let index = EntityIndex::from_reader(csv.as_bytes())?;
//! let service = InfoService::new(TypeChart::standard(), index);
//!
//! let info = service.get_info("charizard")?;
//! assert_eq!(info.counters, vec!["Squirtle"]);
//! assert!(service.get_info("Mew").is_err());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::PathBuf;

use thiserror::Error;
use typedex_chart::UnknownTypeError;

mod counters;
mod entity;
mod index;
mod load;
mod service;

#[cfg(test)]
mod fixtures;

pub use counters::{COUNTER_LIMIT, CounterFinder};
pub use entity::Entity;
pub use index::{ByAnyType, EntityIndex};
pub use service::{InfoService, MatchupResult};

/// The dataset could not be turned into valid entities
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to open dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("Malformed CSV at row {row}: {source}")]
    Csv { row: usize, source: csv::Error },

    #[error("Dataset has no {0:?} column")]
    MissingColumn(&'static str),

    #[error("Row {row}: {field} is empty")]
    MissingField { row: usize, field: &'static str },

    #[error("Row {row} ({name}): {source}")]
    UnknownType {
        row: usize,
        name: String,
        source: UnknownTypeError,
    },
}

/// No entity matched the queried name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No entity named {name:?}")]
pub struct NotFoundError {
    pub name: String,
}
