//! Shared test data

use crate::EntityIndex;

pub(crate) const SAMPLE_CSV: &str = "\
Name,Type1,Type2
Bulbasaur,Grass,Poison
Charmander,Fire,
Charizard,Fire,Flying
Squirtle,Water,
Pikachu,Electric,
Geodude,Rock,Ground
Gastly,Ghost,Poison
Snorlax,Normal,
Machop,Fighting,
Sableye,Dark,Ghost
Swampert,Water,Ground
";

pub(crate) fn sample_index() -> EntityIndex {
    EntityIndex::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}
