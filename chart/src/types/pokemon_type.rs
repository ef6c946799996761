//! The closed set of elemental types

use std::str::FromStr;

use crate::UnknownTypeError;

/// Elemental types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// Number of members in the type set
    pub const COUNT: usize = 18;

    /// All 18 types, in declaration order
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Position of this type in [`Type::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Type::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for Type {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Type::Normal),
            "fire" => Ok(Type::Fire),
            "water" => Ok(Type::Water),
            "electric" => Ok(Type::Electric),
            "grass" => Ok(Type::Grass),
            "ice" => Ok(Type::Ice),
            "fighting" => Ok(Type::Fighting),
            "poison" => Ok(Type::Poison),
            "ground" => Ok(Type::Ground),
            "flying" => Ok(Type::Flying),
            "psychic" => Ok(Type::Psychic),
            "bug" => Ok(Type::Bug),
            "rock" => Ok(Type::Rock),
            "ghost" => Ok(Type::Ghost),
            "dragon" => Ok(Type::Dragon),
            "dark" => Ok(Type::Dark),
            "steel" => Ok(Type::Steel),
            "fairy" => Ok(Type::Fairy),
            _ => Err(UnknownTypeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Type {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Type {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
