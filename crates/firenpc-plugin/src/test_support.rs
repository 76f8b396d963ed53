//! Recording host doubles for unit tests

use crate::error::HostError;
use crate::host::{
    CommandExecutor, DeferredTask, EntityRuntime, Messenger, OnlinePlayer, Player,
    PlayerDirectory, Scheduler, WorldResolver,
};
use firenpc_core::{text, EntityId, Location, Position, Skin};
use indexmap::IndexMap;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnedNpc {
    pub location: Location,
    pub skin: Skin,
    pub nametag: String,
}

#[derive(Debug, Default)]
pub struct MockHost {
    pub worlds: HashSet<String>,
    pub online: Vec<OnlinePlayer>,
    pub spawned: IndexMap<EntityId, SpawnedNpc>,
    pub despawned: Vec<EntityId>,
    /// (player name, command line)
    pub dispatched: Vec<(String, String)>,
    pub scheduled: Vec<(u32, DeferredTask)>,
    pub fail_spawns: bool,
    next_id: u64,
}

impl MockHost {
    pub fn with_worlds(worlds: &[&str]) -> Self {
        Self {
            worlds: worlds.iter().map(|w| w.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn add_online(&mut self, name: &str, skin: Skin) {
        self.online.push(OnlinePlayer {
            name: name.to_string(),
            skin,
        });
    }
}

impl EntityRuntime for MockHost {
    fn spawn_human(
        &mut self,
        location: &Location,
        skin: &Skin,
        nametag: &str,
    ) -> Result<EntityId, HostError> {
        if self.fail_spawns {
            return Err(HostError::new("spawning disabled"));
        }
        self.next_id += 1;
        let id = EntityId::new(self.next_id);
        self.spawned.insert(
            id,
            SpawnedNpc {
                location: location.clone(),
                skin: skin.clone(),
                nametag: nametag.to_string(),
            },
        );
        Ok(id)
    }

    fn despawn(&mut self, entity: EntityId) {
        self.spawned.shift_remove(&entity);
        self.despawned.push(entity);
    }

    fn set_skin(&mut self, entity: EntityId, skin: &Skin) {
        if let Some(npc) = self.spawned.get_mut(&entity) {
            npc.skin = skin.clone();
        }
    }

    fn set_nametag(&mut self, entity: EntityId, nametag: &str) {
        if let Some(npc) = self.spawned.get_mut(&entity) {
            npc.nametag = nametag.to_string();
        }
    }
}

impl WorldResolver for MockHost {
    fn is_world_loaded(&self, world: &str) -> bool {
        self.worlds.contains(world)
    }
}

impl PlayerDirectory for MockHost {
    fn player_by_prefix(&self, prefix: &str) -> Option<OnlinePlayer> {
        let prefix = prefix.to_lowercase();
        self.online
            .iter()
            .find(|p| p.name.to_lowercase().starts_with(&prefix))
            .cloned()
    }
}

impl CommandExecutor for MockHost {
    fn dispatch_command(&mut self, player: &mut dyn Player, command_line: &str) {
        self.dispatched
            .push((player.name().to_string(), command_line.to_string()));
    }
}

impl Scheduler for MockHost {
    fn schedule_delayed(&mut self, delay_ticks: u32, task: DeferredTask) {
        self.scheduled.push((delay_ticks, task));
    }
}

#[derive(Debug)]
pub struct MockPlayer {
    pub name: String,
    pub location: Location,
    pub skin: Skin,
    pub permissions: HashSet<String>,
    pub messages: Vec<String>,
    pub teleports: Vec<Location>,
}

impl MockPlayer {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            location: Location::new("overworld", Position::new(0.0, 64.0, 0.0)),
            skin: Skin::new(name.as_bytes().to_vec()),
            permissions: HashSet::new(),
            messages: Vec::new(),
            teleports: Vec::new(),
        }
    }

    pub fn with_permission(mut self, permission: &str) -> Self {
        self.permissions.insert(permission.to_string());
        self
    }

    /// Messages with formatting codes stripped
    pub fn plain_messages(&self) -> Vec<String> {
        self.messages.iter().map(|m| text::clean(m)).collect()
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages.last().map(|m| text::clean(m))
    }
}

impl Messenger for MockPlayer {
    fn send_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl Player for MockPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Location {
        self.location.clone()
    }

    fn skin(&self) -> Skin {
        self.skin.clone()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    fn teleport(&mut self, location: &Location) {
        self.teleports.push(location.clone());
        self.location = location.clone();
    }
}

#[derive(Debug, Default)]
pub struct MockConsole {
    pub messages: Vec<String>,
}

impl Messenger for MockConsole {
    fn send_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
