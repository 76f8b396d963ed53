//! `/firenpc` subcommand router
//!
//! Parsing only checks shape: verb and argument count. Too few arguments
//! produces a usage line and nothing else. Everything past parsing is a
//! single store operation plus, where relevant, a push to the live entity.

use crate::config::PluginConfig;
use crate::error::{Error, Result};
use crate::host::{CommandSender, Host, Player};
use crate::service::NpcService;
use firenpc_core::text::{self, GOLD, GRAY, GREEN, RED, WHITE, YELLOW};

/// A parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subcommand {
    Spawn { name: String },
    Remove { name: String },
    List,
    SetSkin { npc: String, player: String },
    SetName { npc: String, nametag: String },
    AddCommand { npc: String, command: String },
    /// `index` is kept raw; anything that is not a valid 1-based position
    /// is rejected when applied.
    RemoveCommand { npc: String, index: String },
    Commands { npc: String },
    Teleport { npc: String },
    Help,
}

/// Result of parsing a command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Subcommand),
    /// Not enough arguments for a known verb
    Usage {
        syntax: &'static str,
        placeholder_hint: bool,
    },
}

impl Parsed {
    fn usage(syntax: &'static str) -> Self {
        Parsed::Usage {
            syntax,
            placeholder_hint: false,
        }
    }
}

impl Subcommand {
    /// Parse `args` (everything after `/firenpc`)
    ///
    /// Verbs are case-insensitive. An empty line or unknown verb is `Help`.
    pub fn parse(args: &[&str]) -> Parsed {
        let Some(verb) = args.first() else {
            return Parsed::Run(Subcommand::Help);
        };
        let arg = |i: usize| args[i].to_string();
        let rest = |from: usize| args[from..].join(" ");

        let sub = match verb.to_lowercase().as_str() {
            "spawn" => {
                if args.len() < 2 {
                    return Parsed::usage("/firenpc spawn <name>");
                }
                Subcommand::Spawn { name: arg(1) }
            }
            "remove" => {
                if args.len() < 2 {
                    return Parsed::usage("/firenpc remove <name>");
                }
                Subcommand::Remove { name: arg(1) }
            }
            "list" => Subcommand::List,
            "setskin" => {
                if args.len() < 3 {
                    return Parsed::usage("/firenpc setskin <npc> <player>");
                }
                Subcommand::SetSkin {
                    npc: arg(1),
                    player: arg(2),
                }
            }
            "setname" => {
                if args.len() < 3 {
                    return Parsed::usage("/firenpc setname <npc> <nametag>");
                }
                Subcommand::SetName {
                    npc: arg(1),
                    nametag: rest(2),
                }
            }
            "addcommand" => {
                if args.len() < 3 {
                    return Parsed::Usage {
                        syntax: "/firenpc addcommand <npc> <command>",
                        placeholder_hint: true,
                    };
                }
                Subcommand::AddCommand {
                    npc: arg(1),
                    command: rest(2),
                }
            }
            "removecommand" => {
                if args.len() < 3 {
                    return Parsed::usage("/firenpc removecommand <npc> <index>");
                }
                Subcommand::RemoveCommand {
                    npc: arg(1),
                    index: arg(2),
                }
            }
            "commands" => {
                if args.len() < 2 {
                    return Parsed::usage("/firenpc commands <npc>");
                }
                Subcommand::Commands { npc: arg(1) }
            }
            "tp" => {
                if args.len() < 2 {
                    return Parsed::usage("/firenpc tp <npc>");
                }
                Subcommand::Teleport { npc: arg(1) }
            }
            _ => Subcommand::Help,
        };
        Parsed::Run(sub)
    }
}

/// How a command invocation ended
///
/// Usage and help are guided no-ops, not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Usage,
    Help,
    /// Console sender or missing permission
    Denied,
    Failed,
}

impl CommandStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, CommandStatus::Denied | CommandStatus::Failed)
    }
}

const HELP: &[(&str, &str)] = &[
    ("/firenpc spawn <name>", "Spawn NPC"),
    ("/firenpc remove <name>", "Remove NPC"),
    ("/firenpc list", "List all NPCs"),
    ("/firenpc setskin <npc> <player>", "Set skin"),
    ("/firenpc setname <npc> <text>", "Set nametag"),
    ("/firenpc addcommand <npc> <cmd>", "Add command"),
    ("/firenpc commands <npc>", "List commands"),
    ("/firenpc removecommand <npc> <#>", "Remove cmd"),
    ("/firenpc tp <npc>", "Teleport to NPC"),
];

/// Executes `/firenpc` invocations against an [`NpcService`]
pub struct Router<'a> {
    config: &'a PluginConfig,
}

impl<'a> Router<'a> {
    pub fn new(config: &'a PluginConfig) -> Self {
        Self { config }
    }

    /// Handle one invocation from `sender`
    pub fn handle<H: Host>(
        &self,
        service: &mut NpcService,
        sender: CommandSender<'_>,
        args: &[&str],
        host: &mut H,
    ) -> CommandStatus {
        let player = match sender {
            CommandSender::Player(player) => player,
            CommandSender::Console(console) => {
                console.send_message(&format!("{RED}This command can only be used in-game!"));
                return CommandStatus::Denied;
            }
        };

        if !player.has_permission(&self.config.permission) {
            player.send_message(&format!("{RED}You don't have permission!"));
            return CommandStatus::Denied;
        }

        let sub = match Subcommand::parse(args) {
            Parsed::Run(sub) => sub,
            Parsed::Usage {
                syntax,
                placeholder_hint,
            } => {
                player.send_message(&format!("{YELLOW}Usage: {syntax}"));
                if placeholder_hint {
                    player.send_message(&format!(
                        "{GRAY}Use {} for clicking player's name",
                        self.config.placeholder
                    ));
                }
                return CommandStatus::Usage;
            }
        };

        match self.execute(service, sub, player, host) {
            Ok(status) => status,
            Err(e) => {
                if e.kind() == crate::ErrorKind::Persistence {
                    tracing::error!("NPC store write failed: {}", e);
                }
                player.send_message(&format!("{RED}{}", e.user_message()));
                CommandStatus::Failed
            }
        }
    }

    fn execute<H: Host>(
        &self,
        service: &mut NpcService,
        sub: Subcommand,
        player: &mut dyn Player,
        host: &mut H,
    ) -> Result<CommandStatus> {
        match sub {
            Subcommand::Spawn { name } => self.spawn(service, &name, player, host)?,
            Subcommand::Remove { name } => remove(service, &name, player, host)?,
            Subcommand::List => list(service, player),
            Subcommand::SetSkin { npc, player: from } => set_skin(service, &npc, &from, player, host)?,
            Subcommand::SetName { npc, nametag } => set_name(service, &npc, &nametag, player, host)?,
            Subcommand::AddCommand { npc, command } => add_command(service, &npc, command, player)?,
            Subcommand::RemoveCommand { npc, index } => remove_command(service, &npc, &index, player)?,
            Subcommand::Commands { npc } => list_commands(service, &npc, player)?,
            Subcommand::Teleport { npc } => teleport(service, &npc, player, host)?,
            Subcommand::Help => {
                send_help(player);
                return Ok(CommandStatus::Help);
            }
        }
        Ok(CommandStatus::Success)
    }

    fn spawn<H: Host>(
        &self,
        service: &mut NpcService,
        name: &str,
        player: &mut dyn Player,
        host: &mut H,
    ) -> Result<()> {
        if service.store.exists(name) {
            return Err(firenpc_store::Error::AlreadyExists(name.to_string()).into());
        }

        let location = player.location();
        let skin = player.skin();
        let nametag = text::colorize(&format!("{}{}", self.config.nametag_prefix, name));

        let entity = host.spawn_human(&location, &skin, &nametag)?;
        service.live.insert(name, entity);
        let record = service.store.create(name, location, nametag, skin)?;

        tracing::info!(
            "{} spawned NPC '{}' ({}) at {}",
            player.name(),
            name,
            text::clean(&record.nametag),
            record.location
        );
        player.send_message(&format!("{GREEN}✓ NPC '{name}' created!"));
        player.send_message(&format!(
            "{GRAY}Use /firenpc setname {name} <nametag> to customize"
        ));
        Ok(())
    }
}

fn remove<H: Host>(
    service: &mut NpcService,
    name: &str,
    player: &mut dyn Player,
    host: &mut H,
) -> Result<()> {
    if !service.store.exists(name) {
        return Err(firenpc_store::Error::NotFound(name.to_string()).into());
    }

    if let Some(entity) = service.live.remove(name) {
        host.despawn(entity);
    }
    service.store.remove(name)?;

    tracing::info!("{} removed NPC '{}'", player.name(), name);
    player.send_message(&format!("{GREEN}✓ NPC '{name}' removed!"));
    Ok(())
}

fn list(service: &NpcService, player: &mut dyn Player) {
    if service.store.is_empty() {
        player.send_message(&format!("{YELLOW}No NPCs found!"));
        return;
    }

    player.send_message(&format!("{GOLD}━━━━━━━ NPCs ━━━━━━━"));
    for name in service.store.names() {
        player.send_message(&format!("{YELLOW}• {WHITE}{name}"));
    }
    player.send_message(&format!("{GOLD}━━━━━━━━━━━━━━━━━━━"));
}

fn set_skin<H: Host>(
    service: &mut NpcService,
    npc: &str,
    from: &str,
    player: &mut dyn Player,
    host: &mut H,
) -> Result<()> {
    if !service.store.exists(npc) {
        return Err(firenpc_store::Error::NotFound(npc.to_string()).into());
    }
    let target = host
        .player_by_prefix(from)
        .ok_or_else(|| Error::PlayerNotFound(from.to_string()))?;

    if let Some(entity) = service.live.get(npc) {
        host.set_skin(entity, &target.skin);
    }
    let skin = target.skin.clone();
    service.store.update(npc, |record| {
        record.skin = skin;
        Ok(())
    })?;

    player.send_message(&format!(
        "{GREEN}✓ Set skin of '{npc}' to {}'s skin!",
        target.name
    ));
    Ok(())
}

fn set_name<H: Host>(
    service: &mut NpcService,
    npc: &str,
    nametag: &str,
    player: &mut dyn Player,
    host: &mut H,
) -> Result<()> {
    if !service.store.exists(npc) {
        return Err(firenpc_store::Error::NotFound(npc.to_string()).into());
    }
    let colored = text::colorize(nametag);

    if let Some(entity) = service.live.get(npc) {
        host.set_nametag(entity, &colored);
    }
    let tag = colored.clone();
    service.store.update(npc, |record| {
        record.nametag = tag;
        Ok(())
    })?;

    player.send_message(&format!("{GREEN}✓ Set nametag of '{npc}'!"));
    player.send_message(&format!("{GRAY}Preview: {colored}"));
    Ok(())
}

fn add_command(
    service: &mut NpcService,
    npc: &str,
    command: String,
    player: &mut dyn Player,
) -> Result<()> {
    let echo = command.clone();
    service.store.update(npc, |record| {
        record.add_command(command);
        Ok(())
    })?;

    player.send_message(&format!("{GREEN}✓ Added command to '{npc}'!"));
    player.send_message(&format!("{GRAY}Command: {echo}"));
    Ok(())
}

fn remove_command(
    service: &mut NpcService,
    npc: &str,
    index: &str,
    player: &mut dyn Player,
) -> Result<()> {
    // Non-numeric input maps to position 0, which is always out of range.
    let position = index.trim().parse::<usize>().unwrap_or(0);
    let removed = service
        .store
        .update(npc, |record| record.remove_command(position))?;

    player.send_message(&format!("{GREEN}✓ Removed command from '{npc}'!"));
    player.send_message(&format!("{GRAY}Removed: {removed}"));
    Ok(())
}

fn list_commands(service: &NpcService, npc: &str, player: &mut dyn Player) -> Result<()> {
    let record = service.store.get(npc)?;

    if !record.has_commands() {
        player.send_message(&format!("{YELLOW}No commands set for '{npc}'"));
        return Ok(());
    }

    player.send_message(&format!("{GOLD}━━━━━━━ Commands for '{npc}' ━━━━━━━"));
    for (i, command) in record.commands().iter().enumerate() {
        player.send_message(&format!("{YELLOW}{}. {WHITE}{command}", i + 1));
    }
    player.send_message(&format!("{GOLD}━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━"));
    Ok(())
}

fn teleport<H: Host>(
    service: &NpcService,
    npc: &str,
    player: &mut dyn Player,
    host: &mut H,
) -> Result<()> {
    let location = service.store.get(npc)?.location.clone();

    if !host.is_world_loaded(&location.world) {
        return Err(Error::WorldUnavailable(location.world));
    }

    player.teleport(&location);
    player.send_message(&format!("{GREEN}✓ Teleported to NPC '{npc}'!"));
    Ok(())
}

fn send_help(player: &mut dyn Player) {
    player.send_message(&format!("{GOLD}━━━━━━━ FireNPC Commands ━━━━━━━"));
    for (syntax, what) in HELP {
        player.send_message(&format!("{YELLOW}{syntax}{GRAY} - {what}"));
    }
    player.send_message(&format!("{GOLD}━━━━━━━━━━━━━━━━━━━━━━━━━━━━"));
}
