//! Dataset records

use typedex_chart::{Type, TypeSet};

/// A named record tagged with one or two types
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub type1: Type,
    pub type2: Option<Type>,
}

impl Entity {
    pub fn new(name: impl Into<String>, type1: Type, type2: Option<Type>) -> Self {
        Self {
            name: name.into(),
            type1,
            type2,
        }
    }

    /// Both types as a set
    pub fn types(&self) -> TypeSet {
        let mut set = TypeSet::of(&[self.type1]);
        set.extend(self.type2);
        set
    }

    /// Whether `type1` or `type2` is a member of `types`
    pub fn has_any_type(&self, types: TypeSet) -> bool {
        types.contains(self.type1) || self.type2.is_some_and(|t| types.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types() {
        let charizard = Entity::new("Charizard", Type::Fire, Some(Type::Flying));
        assert_eq!(charizard.types(), TypeSet::of(&[Type::Fire, Type::Flying]));

        let snorlax = Entity::new("Snorlax", Type::Normal, None);
        assert_eq!(snorlax.types(), TypeSet::of(&[Type::Normal]));
    }

    #[test]
    fn test_has_any_type() {
        let charizard = Entity::new("Charizard", Type::Fire, Some(Type::Flying));
        assert!(charizard.has_any_type(TypeSet::of(&[Type::Flying, Type::Ice])));
        assert!(charizard.has_any_type(TypeSet::of(&[Type::Fire])));
        assert!(!charizard.has_any_type(TypeSet::of(&[Type::Water])));
        assert!(!charizard.has_any_type(TypeSet::EMPTY));
    }
}
