//! FireNPC Core - NPC records and the small vocabulary shared by the store and plugin
//!
//! This crate provides:
//! - `NpcRecord` - the persisted attribute set of one NPC
//! - `Location`, `Position`, `Orientation` - where an NPC stands and faces
//! - `Skin` - opaque skin bytes with a base64 text form
//! - `EntityId` - identity of a live, host-rendered entity
//! - `text` - `§` chat formatting codes and `&` colorizing

mod error;
mod identity;
mod location;
mod record;
mod skin;
pub mod text;

pub use error::{Error, Result};
pub use identity::EntityId;
pub use location::{Location, Orientation, Position};
pub use record::NpcRecord;
pub use skin::Skin;
