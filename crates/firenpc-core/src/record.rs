//! The persisted NPC record

use crate::error::{Error, Result};
use crate::location::Location;
use crate::skin::Skin;
use serde::{Deserialize, Serialize};

/// Everything remembered about one NPC
///
/// The name is the store key and cannot change once the record exists.
/// Commands are server command lines run, in order, when a player strikes
/// the NPC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcRecord {
    name: String,
    /// Where the NPC stands
    pub location: Location,
    /// Tag rendered above the NPC, may contain `§` codes
    pub nametag: String,
    pub skin: Skin,
    commands: Vec<String>,
}

impl NpcRecord {
    /// Create a record with no commands bound
    pub fn new(
        name: impl Into<String>,
        location: Location,
        nametag: impl Into<String>,
        skin: Skin,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            nametag: nametag.into(),
            skin,
            commands: Vec::new(),
        }
    }

    /// Replace the command list wholesale (used when decoding from disk)
    pub fn with_commands(mut self, commands: Vec<String>) -> Self {
        self.commands = commands;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bound commands in execution order
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn has_commands(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Append a command to the end of the list
    pub fn add_command(&mut self, command: impl Into<String>) {
        self.commands.push(command.into());
    }

    /// Remove the command at a 1-based position, returning it
    ///
    /// Remaining commands keep their relative order. Position 0 or one past
    /// the end leaves the list untouched.
    pub fn remove_command(&mut self, position: usize) -> Result<String> {
        if position == 0 || position > self.commands.len() {
            return Err(Error::InvalidArgument(format!(
                "command index {} out of range 1..={}",
                position,
                self.commands.len()
            )));
        }
        Ok(self.commands.remove(position - 1))
    }
}
