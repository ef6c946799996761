//! Compact set of types

use std::fmt;

use super::pokemon_type::Type;

/// A set of [`Type`]s stored as a bitmask.
///
/// Iteration always yields members in [`Type::ALL`] order, so two equal sets
/// display identically regardless of how they were built.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeSet(u32);

impl TypeSet {
    /// The empty set
    pub const EMPTY: TypeSet = TypeSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from a slice of types (usable in const tables)
    pub const fn of(types: &[Type]) -> Self {
        let mut bits = 0u32;
        let mut i = 0;
        while i < types.len() {
            bits |= 1 << types[i] as u32;
            i += 1;
        }
        TypeSet(bits)
    }

    fn bit(t: Type) -> u32 {
        1 << t as u32
    }

    /// Insert a type, returning whether it was newly added
    pub fn insert(&mut self, t: Type) -> bool {
        let added = !self.contains(t);
        self.0 |= Self::bit(t);
        added
    }

    /// Remove a type, returning whether it was present
    pub fn remove(&mut self, t: Type) -> bool {
        let present = self.contains(t);
        self.0 &= !Self::bit(t);
        present
    }

    pub fn contains(&self, t: Type) -> bool {
        self.0 & Self::bit(t) != 0
    }

    pub fn union(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 | other.0)
    }

    pub fn intersection(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 & other.0)
    }

    pub fn difference(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 & !other.0)
    }

    /// Members present in exactly one of the two sets
    pub fn symmetric_difference(self, other: TypeSet) -> TypeSet {
        TypeSet(self.0 ^ other.0)
    }

    pub fn is_disjoint(self, other: TypeSet) -> bool {
        self.intersection(other).is_empty()
    }

    pub fn is_subset(self, other: TypeSet) -> bool {
        self.difference(other).is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate members in declaration order
    pub fn iter(&self) -> Iter {
        Iter { bits: self.0 }
    }

    /// Members collected into a vector, in declaration order
    pub fn to_vec(&self) -> Vec<Type> {
        self.iter().collect()
    }
}

/// Iterator over a [`TypeSet`]
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u32,
}

impl Iterator for Iter {
    type Item = Type;

    fn next(&mut self) -> Option<Type> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Type::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for TypeSet {
    type Item = Type;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &TypeSet {
    type Item = Type;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<Type> for TypeSet {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Type> for TypeSet {
    fn extend<I: IntoIterator<Item = Type>>(&mut self, iter: I) {
        for t in iter {
            self.insert(t);
        }
    }
}

impl fmt::Debug for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let types = Vec::<Type>::deserialize(deserializer)?;
        Ok(types.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = TypeSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Type::Fire));
        assert!(!set.insert(Type::Fire));
        assert!(set.contains(Type::Fire));
        assert!(!set.contains(Type::Water));
        assert_eq!(set.len(), 1);

        assert!(set.remove(Type::Fire));
        assert!(!set.remove(Type::Fire));
        assert!(set.is_empty());
    }

    #[test]
    fn test_iteration_is_declaration_order() {
        let set: TypeSet = [Type::Fairy, Type::Normal, Type::Ground, Type::Fire]
            .into_iter()
            .collect();
        assert_eq!(
            set.to_vec(),
            vec![Type::Normal, Type::Fire, Type::Ground, Type::Fairy]
        );
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_set_operations() {
        let a = TypeSet::of(&[Type::Water, Type::Rock, Type::Ground]);
        let b = TypeSet::of(&[Type::Rock, Type::Electric, Type::Ice]);

        assert_eq!(a.union(b).len(), 5);
        assert_eq!(a.intersection(b), TypeSet::of(&[Type::Rock]));
        assert_eq!(a.difference(b), TypeSet::of(&[Type::Water, Type::Ground]));
        assert_eq!(
            a.symmetric_difference(b),
            TypeSet::of(&[Type::Water, Type::Ground, Type::Electric, Type::Ice])
        );
        assert!(!a.is_disjoint(b));
        assert!(TypeSet::of(&[Type::Rock]).is_subset(a));
        assert!(TypeSet::EMPTY.is_subset(a));
    }

    #[test]
    fn test_debug_lists_members() {
        let set = TypeSet::of(&[Type::Ice, Type::Fire]);
        assert_eq!(format!("{:?}", set), "{Fire, Ice}");
    }

    #[test]
    fn test_const_of_matches_collect() {
        let types = [Type::Dark, Type::Steel, Type::Bug];
        assert_eq!(TypeSet::of(&types), types.into_iter().collect());
    }
}
