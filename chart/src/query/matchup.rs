//! Dual-type matchup resolution

use crate::types::{Type, TypeSet};
use crate::{TypeChart, UnknownTypeError};

/// Combined weaknesses and strengths of a one- or two-typed creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resolved {
    pub weaknesses: TypeSet,
    pub strengths: TypeSet,
}

/// Combine the chart entries of `type1` and optional `type2`.
///
/// Weaknesses and strengths are the unions of both entries. Any type either
/// entry is immune to is dropped from the weaknesses. With two types, a
/// weakness contributed by only one of them is also dropped when the pair is
/// strong against that type; a weakness both entries list is always kept.
pub fn resolve(chart: &TypeChart, type1: Type, type2: Option<Type>) -> Resolved {
    let first = chart.relation_of(type1);
    let second = type2.map(|t| chart.relation_of(t));

    let mut weaknesses = first.weak;
    let mut strengths = first.strong;
    let mut immunities = first.immune;

    if let Some(second) = second {
        weaknesses = weaknesses.union(second.weak);
        strengths = strengths.union(second.strong);
        immunities = immunities.union(second.immune);
    }

    weaknesses = weaknesses.difference(immunities);

    if let Some(second) = second {
        let single = first.weak.symmetric_difference(second.weak);
        weaknesses = weaknesses.difference(strengths.intersection(single));
    }

    Resolved {
        weaknesses,
        strengths,
    }
}

/// [`resolve`] for types given by name
pub fn resolve_names(
    chart: &TypeChart,
    type1: &str,
    type2: Option<&str>,
) -> Result<Resolved, UnknownTypeError> {
    let type1: Type = type1.parse()?;
    let type2 = type2.map(str::parse::<Type>).transpose()?;
    Ok(resolve(chart, type1, type2))
}
