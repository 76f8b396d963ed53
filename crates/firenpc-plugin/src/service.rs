//! The NPC service: records plus their live entities

use crate::host::{EntityRuntime, WorldResolver};
use crate::live::LiveNpcs;
use firenpc_store::Store;

/// Counts from a bulk spawn of stored NPCs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub spawned: usize,
    /// Already had a live entity
    pub already_live: usize,
    /// World not loaded; record kept
    pub world_unloaded: usize,
    /// Host refused to spawn
    pub failed: usize,
}

/// Owns the record store and the live entity map
///
/// Created once at plugin enable and handed by reference to the router and
/// the dispatcher. Not thread-safe; embedders calling from several threads
/// must hold a lock around every call.
#[derive(Debug)]
pub struct NpcService {
    pub store: Store,
    pub live: LiveNpcs,
}

impl NpcService {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            live: LiveNpcs::new(),
        }
    }

    /// Spawn a live entity for every record that does not have one yet
    ///
    /// Records whose world is not loaded are skipped and stay in the store.
    pub fn spawn_all<H>(&mut self, host: &mut H) -> LoadReport
    where
        H: EntityRuntime + WorldResolver,
    {
        let mut report = LoadReport::default();

        for record in self.store.records() {
            let name = record.name();
            if self.live.contains(name) {
                report.already_live += 1;
                continue;
            }
            if !host.is_world_loaded(&record.location.world) {
                tracing::warn!(
                    "Cannot load NPC '{}': world '{}' not loaded",
                    name,
                    record.location.world
                );
                report.world_unloaded += 1;
                continue;
            }

            match host.spawn_human(&record.location, &record.skin, &record.nametag) {
                Ok(entity) => {
                    self.live.insert(name, entity);
                    tracing::info!("Loaded NPC: {}", name);
                    report.spawned += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to load NPC '{}': {}", name, e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Despawn every live entity; records are untouched
    pub fn despawn_all<H: EntityRuntime>(&mut self, host: &mut H) -> usize {
        let drained = self.live.drain();
        for (_, entity) in &drained {
            host.despawn(*entity);
        }
        drained.len()
    }
}
