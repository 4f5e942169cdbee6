//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `talecraft_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("talecraft_core version={}", talecraft_core::core_version());
}
