//! Strike-to-command dispatch
//!
//! When a player strikes a live NPC the strike is cancelled and the NPC's
//! bound commands run in order, each with the placeholder replaced by the
//! striking player's name.
//!
//! Dispatch is fire-and-forget: every command is handed to the host
//! executor in turn, results are not observed, and nothing is rolled back
//! if a later command fails.

use crate::host::{CommandExecutor, Player};
use crate::live::InstanceLookup;
use firenpc_core::{text, EntityId};
use firenpc_store::Store;

/// An entity-damages-entity notification from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageEvent {
    /// Entity that was hit
    pub target: EntityId,
    cancelled: bool,
}

impl DamageEvent {
    pub fn new(target: EntityId) -> Self {
        Self {
            target,
            cancelled: false,
        }
    }

    /// Suppress the damage
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// What happened in response to a strike
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Target is not a tracked NPC; event left alone
    NotAnNpc,
    /// Target is tracked but its record is gone
    Unbound(String),
    /// NPC has no commands; the player was told so
    NoActions,
    /// This many commands were submitted
    Dispatched(usize),
}

/// Runs bound commands for struck NPCs
#[derive(Debug, Clone)]
pub struct Dispatcher {
    placeholder: String,
}

impl Dispatcher {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Replace every placeholder occurrence with `player_name`
    pub fn expand(&self, command: &str, player_name: &str) -> String {
        if self.placeholder.is_empty() {
            return command.to_string();
        }
        command.replace(&self.placeholder, player_name)
    }

    /// Handle `player` striking `event.target`
    pub fn handle<L, E>(
        &self,
        store: &Store,
        lookup: &L,
        event: &mut DamageEvent,
        player: &mut dyn Player,
        executor: &mut E,
    ) -> InteractionOutcome
    where
        L: InstanceLookup + ?Sized,
        E: CommandExecutor + ?Sized,
    {
        let Some(name) = lookup.npc_name(event.target) else {
            return InteractionOutcome::NotAnNpc;
        };

        event.cancel();

        let record = match store.get(name) {
            Ok(record) => record,
            Err(_) => {
                tracing::warn!("Live NPC {} has no record '{}'", event.target, name);
                return InteractionOutcome::Unbound(name.to_string());
            }
        };

        if !record.has_commands() {
            player.send_message(&format!("{}This NPC has no actions set!", text::YELLOW));
            return InteractionOutcome::NoActions;
        }

        let player_name = player.name().to_string();
        for command in record.commands() {
            let line = self.expand(command, &player_name);
            tracing::debug!("NPC '{}' dispatching for {}: {}", name, player_name, line);
            executor.dispatch_command(player, &line);
        }

        InteractionOutcome::Dispatched(record.commands().len())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new("{player}")
    }
}
