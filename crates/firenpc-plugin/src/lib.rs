//! FireNPC Plugin - host-agnostic shell of the NPC plugin
//!
//! Wires operator commands and strike events to the record store:
//! - `Router` - `/firenpc <verb> ...` parsing and execution
//! - `Dispatcher` - runs an NPC's bound commands when a player strikes it
//! - `NpcService` - the store plus the map of live entities
//! - `FireNpc` - lifecycle glue for enable, deferred load, disable
//!
//! ## Host integration
//!
//! Everything engine-specific goes through the traits in [`host`]. A host
//! implements them once and forwards its callbacks:
//! ```ignore
//! let mut plugin = FireNpc::enable(data_folder, &mut host)?;
//! // ... later, when the scheduler fires
//! plugin.run_deferred(DeferredTask::LoadNpcs, &mut host);
//! // on "/firenpc ..."
//! plugin.on_command(CommandSender::Player(&mut player), &args, &mut host);
//! ```

mod config;
mod dispatcher;
mod error;
pub mod host;
mod live;
mod plugin;
mod router;
mod service;

#[cfg(test)]
mod test_support;

pub use config::PluginConfig;
pub use dispatcher::{DamageEvent, Dispatcher, InteractionOutcome};
pub use error::{Error, ErrorKind, HostError, Result};
pub use host::{
    CommandExecutor, CommandSender, DeferredTask, EntityRuntime, Host, Messenger, OnlinePlayer,
    Player, PlayerDirectory, Scheduler, WorldResolver,
};
pub use live::{InstanceLookup, LiveNpcs};
pub use plugin::{FireNpc, COMMAND_NAME};
pub use router::{CommandStatus, Parsed, Router, Subcommand};
pub use service::{LoadReport, NpcService};
