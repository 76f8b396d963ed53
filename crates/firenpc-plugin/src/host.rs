//! Host runtime seams
//!
//! The plugin never touches the engine directly. Entity spawning, skin
//! transport, world lookup, chat and command execution are all provided by
//! the host through these traits.

use crate::error::HostError;
use firenpc_core::{EntityId, Location, Skin};

/// Anything that can receive a chat line
pub trait Messenger {
    fn send_message(&mut self, message: &str);
}

/// A connected player session
pub trait Player: Messenger {
    /// Display name, also what `{player}` expands to
    fn name(&self) -> &str;

    fn location(&self) -> Location;

    fn skin(&self) -> Skin;

    fn has_permission(&self, permission: &str) -> bool;

    fn teleport(&mut self, location: &Location);
}

/// Whoever issued a command
pub enum CommandSender<'a> {
    Console(&'a mut dyn Messenger),
    Player(&'a mut dyn Player),
}

impl CommandSender<'_> {
    pub fn send_message(&mut self, message: &str) {
        match self {
            CommandSender::Console(console) => console.send_message(message),
            CommandSender::Player(player) => player.send_message(message),
        }
    }
}

/// Snapshot of an online player, as needed to copy their skin
#[derive(Debug, Clone, PartialEq)]
pub struct OnlinePlayer {
    pub name: String,
    pub skin: Skin,
}

/// Lookup of online players
pub trait PlayerDirectory {
    /// First online player whose name starts with `prefix` (case-insensitive)
    fn player_by_prefix(&self, prefix: &str) -> Option<OnlinePlayer>;
}

/// Spawning and updating host-rendered humanoid entities
pub trait EntityRuntime {
    /// Spawn a humanoid with an always-visible name tag and show it to
    /// every viewer.
    fn spawn_human(
        &mut self,
        location: &Location,
        skin: &Skin,
        nametag: &str,
    ) -> std::result::Result<EntityId, HostError>;

    /// Remove the entity at the next opportunity.
    fn despawn(&mut self, entity: EntityId);

    /// Replace the skin and push it to viewers.
    fn set_skin(&mut self, entity: EntityId, skin: &Skin);

    fn set_nametag(&mut self, entity: EntityId, nametag: &str);
}

/// World lookup
pub trait WorldResolver {
    /// Whether the world with this folder name is currently loaded
    fn is_world_loaded(&self, world: &str) -> bool;
}

/// Runs server command lines
pub trait CommandExecutor {
    /// Run `command_line` with the authority of `player`.
    ///
    /// The outcome is not reported back.
    ///
    /// This is called while the plugin still borrows its NPC store. If the
    /// line names a plugin command (`/firenpc ...` included), the host must
    /// queue it and run it after the current callback returns instead of
    /// calling back into the plugin synchronously.
    fn dispatch_command(&mut self, player: &mut dyn Player, command_line: &str);
}

/// Work the plugin asks the host to run later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Spawn live entities for every stored record
    LoadNpcs,
}

/// One-shot delayed execution
pub trait Scheduler {
    /// Hand `task` back to the plugin after `delay_ticks` server ticks.
    fn schedule_delayed(&mut self, delay_ticks: u32, task: DeferredTask);
}

/// Everything the plugin needs from the host
pub trait Host: EntityRuntime + WorldResolver + PlayerDirectory + CommandExecutor + Scheduler {}

impl<T> Host for T where
    T: EntityRuntime + WorldResolver + PlayerDirectory + CommandExecutor + Scheduler
{
}
