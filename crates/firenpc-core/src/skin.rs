//! Skin payloads
//!
//! The host hands skins over as raw bytes. They are opaque here: stored,
//! copied between players and NPCs, and written to disk as base64 text.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Raw skin bytes taken from a player
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Skin {
    data: Vec<u8>,
}

impl Skin {
    /// Wrap raw skin bytes
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Decode a skin from its base64 text form
    pub fn from_base64(encoded: &str) -> Result<Self> {
        STANDARD
            .decode(encoded.trim())
            .map(Self::new)
            .map_err(|e| Error::InvalidSkin(e.to_string()))
    }

    /// Encode the skin as base64 text
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Raw bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Skins run to several kilobytes; print the size instead of the bytes.
impl fmt::Debug for Skin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Skin").field("bytes", &self.data.len()).finish()
    }
}

impl Serialize for Skin {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Skin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Skin::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}
