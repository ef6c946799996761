//! Type enumeration and type sets

mod pokemon_type;
mod type_set;

pub use pokemon_type::Type;
pub use type_set::{Iter, TypeSet};
