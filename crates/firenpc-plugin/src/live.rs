//! Live entity bookkeeping
//!
//! Maps NPC names to the entities currently spawned for them. Records and
//! live entities are independent: a record whose world is unloaded simply
//! has no entry here.

use firenpc_core::EntityId;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Resolves a live entity back to the NPC it represents
pub trait InstanceLookup {
    fn npc_name(&self, entity: EntityId) -> Option<&str>;
}

/// Name <-> entity map for spawned NPCs
#[derive(Debug, Default)]
pub struct LiveNpcs {
    by_name: IndexMap<String, EntityId>,
    by_entity: HashMap<EntityId, String>,
}

impl LiveNpcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `entity` as the live instance of `name`, returning the
    /// previously tracked entity if there was one.
    pub fn insert(&mut self, name: impl Into<String>, entity: EntityId) -> Option<EntityId> {
        let name = name.into();
        let previous = self.by_name.insert(name.clone(), entity);
        if let Some(old) = previous {
            self.by_entity.remove(&old);
        }
        self.by_entity.insert(entity, name);
        previous
    }

    /// Stop tracking `name`
    pub fn remove(&mut self, name: &str) -> Option<EntityId> {
        let entity = self.by_name.shift_remove(name)?;
        self.by_entity.remove(&entity);
        Some(entity)
    }

    pub fn get(&self, name: &str) -> Option<EntityId> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Remove every entry, returning them in spawn order
    pub fn drain(&mut self) -> Vec<(String, EntityId)> {
        self.by_entity.clear();
        self.by_name.drain(..).collect()
    }
}

impl InstanceLookup for LiveNpcs {
    fn npc_name(&self, entity: EntityId) -> Option<&str> {
        self.by_entity.get(&entity).map(String::as_str)
    }
}
