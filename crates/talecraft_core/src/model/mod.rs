//! Domain model for branching adventures.
//!
//! # Responsibility
//! - Define the canonical data structures for an authored adventure graph.
//! - Keep model types behavior-free; structure checks live in `crate::lint`.
//!
//! # Invariants
//! - Every `Place` is identified by an id that is unique within its adventure.
//! - Choice targets are id references, not live links; the graph may be
//!   cyclic, disconnected, or contain dangling edges.

pub mod adventure;
