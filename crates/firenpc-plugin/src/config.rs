//! RON configuration for the plugin

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Plugin settings, read from `config.ron` in the data folder
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PluginConfig {
    /// Store file name, relative to the data folder
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Ticks to wait after enable before spawning stored NPCs
    #[serde(default = "default_load_delay_ticks")]
    pub load_delay_ticks: u32,
    /// Permission required for every `/firenpc` subcommand
    #[serde(default = "default_permission")]
    pub permission: String,
    /// Token in bound commands replaced with the striking player's name
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// `&` color codes prepended to a fresh NPC's name tag
    #[serde(default = "default_nametag_prefix")]
    pub nametag_prefix: String,
}

fn default_data_file() -> String {
    "npcs.ron".to_string()
}

fn default_load_delay_ticks() -> u32 {
    40
}

fn default_permission() -> String {
    "firenpc.use".to_string()
}

fn default_placeholder() -> String {
    "{player}".to_string()
}

fn default_nametag_prefix() -> String {
    "&e".to_string()
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            load_delay_ticks: default_load_delay_ticks(),
            permission: default_permission(),
            placeholder: default_placeholder(),
            nametag_prefix: default_nametag_prefix(),
        }
    }
}

impl PluginConfig {
    /// File name looked up in the data folder
    pub const FILE_NAME: &'static str = "config.ron";

    /// Parse a config from a RON string
    pub fn from_ron(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Load the config file, falling back to defaults when it is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_ron(&content)
    }
}
