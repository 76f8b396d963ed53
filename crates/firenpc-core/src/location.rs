//! World locations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in a world
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Facing direction in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
}

impl Orientation {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }
}

/// Where something stands: world name, position and facing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Folder name of the world, as the host identifies it
    pub world: String,
    pub position: Position,
    pub orientation: Orientation,
}

impl Location {
    /// Create a location facing yaw 0 / pitch 0
    pub fn new(world: impl Into<String>, position: Position) -> Self {
        Self {
            world: world.into(),
            position,
            orientation: Orientation::default(),
        }
    }

    /// Set the facing direction
    pub fn facing(mut self, yaw: f64, pitch: f64) -> Self {
        self.orientation = Orientation::new(yaw, pitch);
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1}, {:.1}, {:.1})",
            self.world, self.position.x, self.position.y, self.position.z
        )
    }
}
