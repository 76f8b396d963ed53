//! On-disk record shape.

use firenpc_core::{Location, NpcRecord, Orientation, Position, Skin};
use serde::{Deserialize, Serialize};

/// One NPC as written to the store file.
///
/// Flat so that the file stays easy to edit by hand. The name is the map
/// key and is not repeated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredNpc {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub pitch: f64,
    pub nametag: String,
    /// Base64 skin bytes.
    pub skin: String,
    #[serde(default)]
    pub commands: Vec<String>,
}

impl StoredNpc {
    /// Create from a record.
    pub fn from_record(record: &NpcRecord) -> Self {
        let loc = &record.location;
        Self {
            world: loc.world.clone(),
            x: loc.position.x,
            y: loc.position.y,
            z: loc.position.z,
            yaw: loc.orientation.yaw,
            pitch: loc.orientation.pitch,
            nametag: record.nametag.clone(),
            skin: record.skin.to_base64(),
            commands: record.commands().to_vec(),
        }
    }

    /// Convert to a record, validating the skin.
    pub fn into_record(self, name: &str) -> firenpc_core::Result<NpcRecord> {
        let skin = Skin::from_base64(&self.skin)?;
        let location = Location {
            world: self.world,
            position: Position::new(self.x, self.y, self.z),
            orientation: Orientation::new(self.yaw, self.pitch),
        };
        Ok(NpcRecord::new(name, location, self.nametag, skin).with_commands(self.commands))
    }
}
