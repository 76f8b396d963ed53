//! FireNPC Store - persistent NPC records
//!
//! Keeps every NPC record in one human-editable RON file:
//! - keyed by NPC name, in insertion order
//! - rewritten on every mutation
//! - records that fail to decode are skipped on load, not fatal

mod error;
mod models;
mod store;

pub use error::{Error, Result};
pub use models::StoredNpc;
pub use store::Store;
