//! Plugin lifecycle
//!
//! The host drives the plugin through five callbacks: enable, the deferred
//! load task, commands, damage events and disable. `FireNpc` owns all state
//! between them.

use crate::config::PluginConfig;
use crate::dispatcher::{DamageEvent, Dispatcher, InteractionOutcome};
use crate::error::Result;
use crate::host::{CommandSender, DeferredTask, EntityRuntime, Host, Player, Scheduler, WorldResolver};
use crate::router::{CommandStatus, Router};
use crate::service::{LoadReport, NpcService};
use firenpc_store::Store;
use std::fs;
use std::path::Path;

/// Root command the host should register
pub const COMMAND_NAME: &str = "firenpc";

/// The plugin instance
#[derive(Debug)]
pub struct FireNpc {
    config: PluginConfig,
    service: NpcService,
    dispatcher: Dispatcher,
}

impl FireNpc {
    /// Build a plugin from an already opened store
    pub fn new(config: PluginConfig, store: Store) -> Self {
        let dispatcher = Dispatcher::new(config.placeholder.clone());
        Self {
            config,
            service: NpcService::new(store),
            dispatcher,
        }
    }

    /// Enable the plugin
    ///
    /// Reads `config.ron` and the store file from `data_folder` (creating
    /// the folder if needed) and schedules the one-shot NPC load. Entities
    /// are not spawned here; worlds may not be ready yet.
    pub fn enable<S: Scheduler + ?Sized>(data_folder: impl AsRef<Path>, host: &mut S) -> Result<Self> {
        let data_folder = data_folder.as_ref();
        fs::create_dir_all(data_folder)?;

        let config = PluginConfig::load(data_folder.join(PluginConfig::FILE_NAME))?;
        let store = Store::open(data_folder.join(&config.data_file))?;

        host.schedule_delayed(config.load_delay_ticks, DeferredTask::LoadNpcs);
        tracing::info!(
            "FireNPC enabled with {} stored NPC(s) from {:?}",
            store.len(),
            store.path().unwrap_or(data_folder)
        );

        Ok(Self::new(config, store))
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn service(&self) -> &NpcService {
        &self.service
    }

    pub fn store(&self) -> &Store {
        &self.service.store
    }

    /// Run a task previously handed to the scheduler
    pub fn run_deferred<H>(&mut self, task: DeferredTask, host: &mut H)
    where
        H: EntityRuntime + WorldResolver,
    {
        match task {
            DeferredTask::LoadNpcs => {
                self.load_all_npcs(host);
            }
        }
    }

    /// Spawn live entities for every stored record in a loaded world
    pub fn load_all_npcs<H>(&mut self, host: &mut H) -> LoadReport
    where
        H: EntityRuntime + WorldResolver,
    {
        let report = self.service.spawn_all(host);
        tracing::info!(
            "Spawned {} NPC(s), {} waiting on unloaded worlds, {} failed",
            report.spawned,
            report.world_unloaded,
            report.failed
        );
        report
    }

    /// `/firenpc <args...>`
    pub fn on_command<H: Host>(&mut self, sender: CommandSender<'_>, args: &[&str], host: &mut H) -> CommandStatus {
        Router::new(&self.config).handle(&mut self.service, sender, args, host)
    }

    /// An entity was damaged by another entity
    ///
    /// `damager` is `None` when the attacker is not a player; such events
    /// are ignored.
    pub fn on_entity_damage<H: Host>(
        &mut self,
        event: &mut DamageEvent,
        damager: Option<&mut dyn Player>,
        host: &mut H,
    ) -> InteractionOutcome {
        let Some(player) = damager else {
            return InteractionOutcome::NotAnNpc;
        };
        self.dispatcher
            .handle(&self.service.store, &self.service.live, event, player, host)
    }

    /// Disable the plugin: despawn every live NPC and flush the store
    pub fn disable<H: EntityRuntime>(&mut self, host: &mut H) -> Result<()> {
        let despawned = self.service.despawn_all(host);
        self.service.store.save()?;
        tracing::info!("FireNPC disabled, despawned {} NPC(s)", despawned);
        Ok(())
    }
}
