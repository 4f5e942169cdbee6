//! Use-case services over the adventure store.
//!
//! # Responsibility
//! - Provide the editing-surface entry points for draft editing and
//!   persistence.
//! - Keep storage details behind the store facade.
//!
//! # Invariants
//! - Services never bypass store persistence contracts.
//! - Lint findings are advisory and never block service operations.

pub mod editor_service;
