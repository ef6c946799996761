//! Read-only entity collection

use std::collections::HashSet;

use typedex_chart::TypeSet;

use crate::entity::Entity;

/// Entities in load order.
///
/// Name lookup is case-insensitive and returns the first match, so duplicate
/// names are kept rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    entities: Vec<Entity>,
    /// Lowercased names, parallel to `entities`
    keys: Vec<String>,
}

impl EntityIndex {
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        let keys: Vec<String> = entities.iter().map(|e| e.name.to_lowercase()).collect();

        {
            let mut seen = HashSet::with_capacity(keys.len());
            for (entity, key) in entities.iter().zip(&keys) {
                if !seen.insert(key.as_str()) {
                    tracing::warn!(
                        name = %entity.name,
                        "Duplicate entity name, lookups return the first match"
                    );
                }
            }
        }

        tracing::debug!(entities = entities.len(), "Built entity index");
        Self { entities, keys }
    }

    /// First entity whose name matches `name`, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&Entity> {
        let key = name.to_lowercase();
        self.keys
            .iter()
            .position(|k| *k == key)
            .map(|i| &self.entities[i])
    }

    /// Entities with `type1` or `type2` in `types`, in load order.
    ///
    /// The returned iterator can be cloned to walk the matches again.
    pub fn find_by_any_type(&self, types: TypeSet) -> ByAnyType<'_> {
        ByAnyType {
            entities: self.entities.iter(),
            types,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<Entity> for EntityIndex {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self::from_entities(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EntityIndex {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`EntityIndex::find_by_any_type`]
#[derive(Debug, Clone)]
pub struct ByAnyType<'a> {
    entities: std::slice::Iter<'a, Entity>,
    types: TypeSet,
}

impl<'a> Iterator for ByAnyType<'a> {
    type Item = &'a Entity;

    fn next(&mut self) -> Option<&'a Entity> {
        let types = self.types;
        self.entities.find(|e| e.has_any_type(types))
    }
}
