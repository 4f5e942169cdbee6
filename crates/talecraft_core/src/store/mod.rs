//! Durable storage for the adventure collection.
//!
//! # Responsibility
//! - Define the abstract key-value port the core persists through.
//! - Provide CRUD over the full adventure collection as one JSON blob.
//!
//! # Invariants
//! - The core never assumes a specific storage technology; backends are
//!   injected through [`kv::KeyValueStore`].
//! - Every mutation rewrites the whole collection in a single `set`.

pub mod adventure_store;
pub mod kv;
