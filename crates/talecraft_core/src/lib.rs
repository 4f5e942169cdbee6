//! Core domain logic for Talecraft, a branching-adventure builder.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod lint;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use lint::{lint_adventure, LintKind, LintingError, ADVENTURE_SUBJECT_ID};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::adventure::{Adventure, AdventureId, Choice, Place, PlaceId};
pub use service::editor_service::{
    AdventureDraft, EditorError, EditorService, EditorServiceError,
};
pub use store::adventure_store::{AdventureStore, StoreError, StoreResult, ADVENTURES_KEY};
pub use store::kv::{KeyValueStore, KvError, KvResult, MemoryKeyValueStore, SqliteKeyValueStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
