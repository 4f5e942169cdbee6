//! Adventure collection persistence facade.
//!
//! # Responsibility
//! - Provide list/get/save/delete over the stored adventure collection.
//! - Keep serialization details inside the storage boundary.
//!
//! # Invariants
//! - The whole collection is one JSON array under [`ADVENTURES_KEY`].
//! - `save` with a known id replaces in place, preserving list position;
//!   an unknown id appends at the end.
//! - Read paths reject corrupt persisted state instead of masking it as an
//!   empty collection.

use crate::model::adventure::Adventure;
use crate::store::kv::{KeyValueStore, KvError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known key holding the serialized adventure array.
pub const ADVENTURES_KEY: &str = "adventures";

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from adventure persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Key-value backend failure.
    Kv(KvError),
    /// Stored blob exists but cannot be parsed as an adventure array.
    CorruptData(serde_json::Error),
    /// Collection cannot be serialized for writing.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kv(err) => write!(f, "{err}"),
            Self::CorruptData(err) => {
                write!(f, "stored adventure data is corrupt: {err}")
            }
            Self::Serialize(err) => {
                write!(f, "failed to serialize adventure collection: {err}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Kv(err) => Some(err),
            Self::CorruptData(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Kv(value)
    }
}

/// CRUD facade over the full adventure collection.
///
/// Every operation reads or rewrites the entire collection; there is no
/// indexed or partial access. The single-writer editing session makes the
/// read-modify-write sequence safe without locking.
pub struct AdventureStore<K: KeyValueStore> {
    kv: K,
}

impl<K: KeyValueStore> AdventureStore<K> {
    /// Creates a store over the provided key-value backend.
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Returns all stored adventures, oldest first.
    ///
    /// An absent key yields an empty collection. A present but unparsable
    /// blob yields `StoreError::CorruptData`.
    pub fn list(&self) -> StoreResult<Vec<Adventure>> {
        match self.kv.get(ADVENTURES_KEY)? {
            Some(blob) => serde_json::from_str(&blob).map_err(StoreError::CorruptData),
            None => Ok(Vec::new()),
        }
    }

    /// Finds one stored adventure by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Adventure>> {
        let adventures = self.list()?;
        Ok(adventures.into_iter().find(|adventure| adventure.id == id))
    }

    /// Saves one adventure into the collection.
    ///
    /// Replaces the entry sharing its id (same position) or appends, then
    /// persists the whole collection in one write.
    pub fn save(&self, adventure: &Adventure) -> StoreResult<()> {
        let mut adventures = self.list()?;
        match adventures
            .iter()
            .position(|existing| existing.id == adventure.id)
        {
            Some(index) => adventures[index] = adventure.clone(),
            None => adventures.push(adventure.clone()),
        }
        self.write_all(&adventures)?;
        info!(
            "event=adventure_save module=store status=ok adventure_id={} place_count={}",
            adventure.id,
            adventure.places.len()
        );
        Ok(())
    }

    /// Removes the adventure with the given id, if present.
    ///
    /// An unknown id leaves the collection unchanged but still performs one
    /// write, matching the whole-collection persistence model.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut adventures = self.list()?;
        adventures.retain(|adventure| adventure.id != id);
        self.write_all(&adventures)?;
        info!("event=adventure_delete module=store status=ok adventure_id={id}");
        Ok(())
    }

    fn write_all(&self, adventures: &[Adventure]) -> StoreResult<()> {
        let blob = serde_json::to_string(adventures).map_err(StoreError::Serialize)?;
        self.kv.set(ADVENTURES_KEY, &blob)?;
        Ok(())
    }
}
