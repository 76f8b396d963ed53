//! RON file store.

use crate::error::{Error, Result};
use crate::models::StoredNpc;
use firenpc_core::{Location, NpcRecord, Skin};
use indexmap::IndexMap;
use ron::ser::PrettyConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Keyed table of NPC records, mirrored to a RON file.
///
/// Every mutation rewrites the file before returning. When a write fails
/// the in-memory change is kept and the error is returned, so the caller
/// knows the file is behind until the next successful save.
#[derive(Debug)]
pub struct Store {
    path: Option<PathBuf>,
    records: IndexMap<String, NpcRecord>,
}

impl Store {
    /// Open the store file at `path`, creating an empty store if it does
    /// not exist yet.
    ///
    /// Records that fail to decode are skipped with a warning. A file that
    /// is not a RON map at all is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let content = fs::read_to_string(&path)?;
            decode_records(&content)?
        } else {
            IndexMap::new()
        };

        tracing::info!("Loaded {} NPC record(s) from {:?}", records.len(), path);

        Ok(Self {
            path: Some(path),
            records,
        })
    }

    /// Create a store that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: IndexMap::new(),
        }
    }

    /// Backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if a record exists.
    pub fn exists(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Get a record by name.
    pub fn get(&self, name: &str) -> Result<&NpcRecord> {
        self.records
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Insert a new record with no commands and persist it.
    pub fn create(
        &mut self,
        name: &str,
        location: Location,
        nametag: impl Into<String>,
        skin: Skin,
    ) -> Result<&NpcRecord> {
        if self.exists(name) {
            return Err(Error::AlreadyExists(name.to_string()));
        }

        let record = NpcRecord::new(name, location, nametag, skin);
        self.records.insert(name.to_string(), record);
        self.save()?;
        self.get(name)
    }

    /// Delete a record and persist.
    pub fn remove(&mut self, name: &str) -> Result<NpcRecord> {
        let record = self
            .records
            .shift_remove(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        self.save()?;
        Ok(record)
    }

    /// Apply a field-level change to one record and persist.
    ///
    /// The mutator works on a copy; if it fails the stored record is left
    /// exactly as it was and nothing is written.
    pub fn update<T, F>(&mut self, name: &str, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut NpcRecord) -> firenpc_core::Result<T>,
    {
        let slot = self
            .records
            .get_mut(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let mut draft = slot.clone();
        let out = mutate(&mut draft)?;
        *slot = draft;

        self.save()?;
        Ok(out)
    }

    /// Record names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in file order.
    pub fn records(&self) -> impl Iterator<Item = &NpcRecord> {
        self.records.values()
    }

    /// Write every record to the backing file.
    ///
    /// Writes a sibling temp file and renames it over the target.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let content = encode_records(&self.records)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = path.with_extension("ron.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, path)?;

        tracing::debug!("Saved {} NPC record(s) to {:?}", self.records.len(), path);
        Ok(())
    }
}

fn encode_records(records: &IndexMap<String, NpcRecord>) -> Result<String> {
    let stored: IndexMap<&str, StoredNpc> = records
        .iter()
        .map(|(name, record)| (name.as_str(), StoredNpc::from_record(record)))
        .collect();

    ron::ser::to_string_pretty(&stored, PrettyConfig::new())
        .map_err(|e| Error::Serialization(e.to_string()))
}

fn decode_records(content: &str) -> Result<IndexMap<String, NpcRecord>> {
    if content.trim().is_empty() {
        return Ok(IndexMap::new());
    }

    // Decode the outer map loosely so one broken entry cannot sink the rest.
    let raw: IndexMap<String, ron::Value> = ron::from_str(content)?;

    let mut records = IndexMap::with_capacity(raw.len());
    for (name, value) in raw {
        let stored: StoredNpc = match value.into_rust() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Skipping NPC '{}': malformed record: {}", name, e);
                continue;
            }
        };
        match stored.into_record(&name) {
            Ok(record) => {
                records.insert(name, record);
            }
            Err(e) => {
                tracing::warn!("Skipping NPC '{}': {}", name, e);
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use firenpc_core::Position;
    use tempfile::TempDir;

    fn overworld(x: f64, y: f64, z: f64) -> Location {
        Location::new("overworld", Position::new(x, y, z))
    }

    fn skin() -> Skin {
        Skin::new(vec![0u8, 64, 128, 255])
    }

    #[test]
    fn test_create_then_get() {
        let mut store = Store::in_memory();
        let loc = overworld(10.0, 64.0, 10.0).facing(45.0, 10.0);

        store.create("Bob", loc.clone(), "§eBob", skin()).unwrap();

        let bob = store.get("Bob").unwrap();
        assert_eq!(bob.name(), "Bob");
        assert_eq!(bob.location, loc);
        assert_eq!(bob.nametag, "§eBob");
        assert_eq!(bob.skin, skin());
        assert!(bob.commands().is_empty());
    }

    #[test]
    fn test_create_duplicate_leaves_existing() {
        let mut store = Store::in_memory();
        store.create("Bob", overworld(1.0, 2.0, 3.0), "first", skin()).unwrap();

        let err = store
            .create("Bob", overworld(9.0, 9.0, 9.0), "second", Skin::default())
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(name) if name == "Bob"));

        let bob = store.get("Bob").unwrap();
        assert_eq!(bob.nametag, "first");
        assert_eq!(bob.location.position, Position::new(1.0, 2.0, 3.0));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = Store::in_memory();
        assert!(matches!(store.remove("Ghost"), Err(Error::NotFound(_))));

        store.create("Bob", overworld(0.0, 0.0, 0.0), "Bob", skin()).unwrap();
        let removed = store.remove("Bob").unwrap();
        assert_eq!(removed.name(), "Bob");
        assert!(!store.exists("Bob"));
        assert!(matches!(store.get("Bob"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_update_missing() {
        let mut store = Store::in_memory();
        let result = store.update("Ghost", |npc| {
            npc.add_command("say boo");
            Ok(())
        });
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_append_then_remove_by_position() {
        let mut store = Store::in_memory();
        store.create("Bob", overworld(0.0, 0.0, 0.0), "Bob", skin()).unwrap();

        let commands = ["say 1", "say 2", "say 3", "say 4", "say 5"];
        for cmd in commands {
            store
                .update("Bob", |npc| {
                    npc.add_command(cmd);
                    Ok(())
                })
                .unwrap();
        }

        let removed = store.update("Bob", |npc| npc.remove_command(3)).unwrap();
        assert_eq!(removed, "say 3");
        assert_eq!(
            store.get("Bob").unwrap().commands(),
            &["say 1", "say 2", "say 4", "say 5"]
        );
    }

    #[test]
    fn test_failed_mutation_changes_nothing() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("npcs.ron");
        let mut store = Store::open(&path).unwrap();
        store.create("Bob", overworld(0.0, 0.0, 0.0), "Bob", skin()).unwrap();
        store
            .update("Bob", |npc| {
                npc.add_command("say hi");
                Ok(())
            })
            .unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let result = store.update("Bob", |npc| {
            npc.nametag = "changed".into();
            npc.remove_command(7)
        });
        assert!(matches!(
            result,
            Err(Error::Record(firenpc_core::Error::InvalidArgument(_)))
        ));

        let bob = store.get("Bob").unwrap();
        assert_eq!(bob.nametag, "Bob");
        assert_eq!(bob.commands(), &["say hi"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("npcs.ron");

        {
            let mut store = Store::open(&path).unwrap();
            store
                .create("Bob", overworld(10.5, 64.0, -3.25).facing(180.0, -12.5), "§eBob", skin())
                .unwrap();
            store
                .create("Alice", Location::new("nether", Position::new(1.0, 2.0, 3.0)), "§cAlice", Skin::new(vec![9; 32]))
                .unwrap();
            store
                .create("Zed", overworld(0.0, 0.0, 0.0), "Zed", Skin::default())
                .unwrap();
            for cmd in ["say hello {player}", "give {player} bread 1", "tp {player} 0 64 0"] {
                store
                .update("Bob", |npc| {
                    npc.add_command(cmd);
                    Ok(())
                })
                .unwrap();
            }
        }

        let store = Store::open(&path).unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["Bob", "Alice", "Zed"]);

        let bob = store.get("Bob").unwrap();
        assert_eq!(bob.location, overworld(10.5, 64.0, -3.25).facing(180.0, -12.5));
        assert_eq!(bob.nametag, "§eBob");
        assert_eq!(bob.skin, skin());
        assert_eq!(
            bob.commands(),
            &["say hello {player}", "give {player} bread 1", "tp {player} 0 64 0"]
        );

        let alice = store.get("Alice").unwrap();
        assert_eq!(alice.location.world, "nether");
        assert_eq!(alice.skin.len(), 32);
        assert!(store.get("Zed").unwrap().skin.is_empty());
    }

    #[test]
    fn test_remove_preserves_file_order() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("npcs.ron");
        {
            let mut store = Store::open(&path).unwrap();
            for name in ["a", "b", "c", "d"] {
                store.create(name, overworld(0.0, 0.0, 0.0), name, skin()).unwrap();
            }
            store.remove("b").unwrap();
        }
        let store = Store::open(&path).unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().expect("tempdir");
        let store = Store::open(dir.path().join("nope.ron")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_hand_written_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("npcs.ron");
        fs::write(
            &path,
            r#"{
    "Guide": (
        world: "overworld",
        x: 100,
        y: 65,
        z: -20,
        yaw: 90.0,
        pitch: 0.0,
        nametag: "§aGuide",
        skin: "AQID",
        commands: ["say Welcome {player}!"],
    ),
    "Quiet": (world: "overworld", x: 0.0, y: 0.0, z: 0.0, nametag: "Quiet", skin: ""),
}"#,
        )
        .unwrap();

        let store = Store::open(&path).unwrap();
        let guide = store.get("Guide").unwrap();
        assert_eq!(guide.location.position, Position::new(100.0, 65.0, -20.0));
        assert_eq!(guide.commands(), &["say Welcome {player}!"]);
        assert!(store.get("Quiet").unwrap().commands().is_empty());
    }

    #[test]
    fn test_broken_records_are_skipped() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("npcs.ron");
        fs::write(
            &path,
            r#"{
    "Good": (world: "overworld", x: 1.0, y: 2.0, z: 3.0, nametag: "Good", skin: "AQID"),
    "NoWorld": (x: 1.0, y: 2.0, z: 3.0, nametag: "NoWorld", skin: "AQID"),
    "BadSkin": (world: "overworld", x: 1.0, y: 2.0, z: 3.0, nametag: "BadSkin", skin: "%%%"),
    "AlsoGood": (world: "nether", x: 0.0, y: 0.0, z: 0.0, nametag: "AlsoGood", skin: ""),
}"#,
        )
        .unwrap();

        let store = Store::open(&path).unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["Good", "AlsoGood"]);
    }

    #[test]
    fn test_unparseable_file_is_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("npcs.ron");
        fs::write(&path, "this is not ron").unwrap();

        let err = Store::open(&path).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.is_persistence());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = TempDir::new().expect("tempdir");
        // A directory sitting where the file should go makes the rename fail.
        let path = dir.path().join("npcs.ron");
        fs::create_dir(&path).unwrap();

        let mut store = Store {
            path: Some(path),
            records: IndexMap::new(),
        };
        let err = store
            .create("Bob", overworld(0.0, 0.0, 0.0), "Bob", skin())
            .unwrap_err();
        assert!(err.is_persistence());
        // The change is kept in memory.
        assert!(store.exists("Bob"));
    }
}
