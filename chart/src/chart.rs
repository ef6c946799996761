//! Static type relation chart

use crate::types::{Type, TypeSet};
use crate::{ChartError, UnknownTypeError};

/// The weak/strong/immune sets for one type.
///
/// - `weak`: types effective against it
/// - `strong`: types it is effective against
/// - `immune`: types that have no effect on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeRelation {
    pub weak: TypeSet,
    pub strong: TypeSet,
    pub immune: TypeSet,
}

impl TypeRelation {
    pub const fn new(weak: TypeSet, strong: TypeSet, immune: TypeSet) -> Self {
        Self {
            weak,
            strong,
            immune,
        }
    }
}

/// Unvalidated chart entry as authored, with types still spelled as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawRelation {
    pub weak: Vec<String>,
    pub strong: Vec<String>,
    pub immune: Vec<String>,
}

impl RawRelation {
    pub fn new(weak: &[&str], strong: &[&str], immune: &[&str]) -> Self {
        let owned = |names: &[&str]| -> Vec<String> {
            names.iter().map(|n| n.to_string()).collect()
        };
        Self {
            weak: owned(weak),
            strong: owned(strong),
            immune: owned(immune),
        }
    }
}

/// Validated chart, indexed by [`Type::index`].
///
/// Built once and never mutated; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeChart {
    relations: [TypeRelation; Type::COUNT],
}

impl TypeChart {
    /// The built-in reference chart
    pub fn standard() -> Self {
        Self {
            relations: STANDARD_RELATIONS,
        }
    }

    /// Build a chart from authored string data, rejecting bad entries up front.
    ///
    /// Every one of the 18 types must appear exactly once, every referenced
    /// name must be a known type, and no type may be listed as both a
    /// weakness and an immunity of the same entry.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (S, RawRelation)>,
        S: AsRef<str>,
    {
        let mut slots: [Option<TypeRelation>; Type::COUNT] = [None; Type::COUNT];

        for (name, raw) in entries {
            let name = name.as_ref();
            let entry = name.parse::<Type>().map_err(|source| ChartError::UnknownType {
                entry: name.to_string(),
                source,
            })?;

            let parse_set = |names: &[String]| -> Result<TypeSet, ChartError> {
                names
                    .iter()
                    .map(|n| {
                        n.parse::<Type>().map_err(|source| ChartError::UnknownType {
                            entry: name.to_string(),
                            source,
                        })
                    })
                    .collect()
            };

            let relation = TypeRelation::new(
                parse_set(&raw.weak)?,
                parse_set(&raw.strong)?,
                parse_set(&raw.immune)?,
            );

            if let Some(other) = relation.weak.intersection(relation.immune).iter().next() {
                return Err(ChartError::OverlappingRelation { entry, other });
            }

            let slot = &mut slots[entry.index()];
            if slot.is_some() {
                return Err(ChartError::DuplicateEntry(entry));
            }
            *slot = Some(relation);
        }

        let mut relations = [TypeRelation::default(); Type::COUNT];
        for t in Type::all() {
            relations[t.index()] = slots[t.index()].ok_or(ChartError::MissingEntry(*t))?;
        }

        Ok(Self { relations })
    }

    /// Parse the nested per-type grouping:
    /// `{ "Fire": { "weak": [...], "strong": [...], "immune": [...] }, ... }`
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let entries: std::collections::BTreeMap<String, RawRelation> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Relation for a type; total over the type set
    pub fn relation_of(&self, t: Type) -> &TypeRelation {
        &self.relations[t.index()]
    }

    /// Relation for a type given by name
    pub fn relation_of_name(&self, name: &str) -> Result<&TypeRelation, UnknownTypeError> {
        let t: Type = name.parse()?;
        Ok(self.relation_of(t))
    }

    /// All relations in [`Type::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Type, &TypeRelation)> + '_ {
        Type::all().iter().map(move |t| (*t, self.relation_of(*t)))
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeChart {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(t, r)| (t.as_str(), r)))
    }
}

use Type::*;

const fn rel(weak: &[Type], strong: &[Type], immune: &[Type]) -> TypeRelation {
    TypeRelation::new(TypeSet::of(weak), TypeSet::of(strong), TypeSet::of(immune))
}

/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
static STANDARD_RELATIONS: [TypeRelation; Type::COUNT] = [
    // Normal
    rel(&[Fighting], &[], &[Ghost]),
    // Fire
    rel(&[Water, Rock, Ground], &[Bug, Steel, Grass, Ice], &[]),
    // Water
    rel(&[Grass, Electric], &[Fire, Ground, Rock], &[]),
    // Electric
    rel(&[Ground], &[Flying, Water], &[]),
    // Grass
    rel(&[Flying, Poison, Bug, Fire, Ice], &[Water, Ground, Rock], &[]),
    // Ice
    rel(&[Fighting, Rock, Steel, Fire], &[Flying, Ground, Grass, Dragon], &[]),
    // Fighting
    rel(&[Flying, Psychic, Fairy], &[Normal, Rock, Steel, Ice, Dark], &[]),
    // Poison
    rel(&[Ground, Psychic], &[Grass, Fairy], &[]),
    // Ground
    rel(&[Water, Grass, Ice], &[Poison, Rock, Steel, Fire, Electric], &[Electric]),
    // Flying
    rel(&[Rock, Electric, Ice], &[Fighting, Bug, Grass], &[Ground]),
    // Psychic
    rel(&[Bug, Ghost, Dark], &[Fighting, Poison], &[]),
    // Bug
    rel(&[Flying, Rock, Fire], &[Grass, Psychic, Dark], &[]),
    // Rock
    rel(&[Fighting, Ground, Steel, Water, Grass], &[Flying, Bug, Fire, Ice], &[]),
    // Ghost
    rel(&[Ghost, Dark], &[Ghost, Psychic], &[Normal, Fighting]),
    // Dragon
    rel(&[Ice, Dragon, Fairy], &[Dragon], &[]),
    // Dark
    rel(&[Fighting, Bug, Fairy], &[Ghost, Psychic], &[Psychic]),
    // Steel
    rel(&[Fighting, Ground, Fire], &[Rock, Ice, Fairy], &[Poison]),
    // Fairy
    rel(&[Poison, Steel], &[Fighting, Dragon, Dark], &[Dragon]),
];
