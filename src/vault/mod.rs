//! Vault module — encrypted credential storage.
//!
//! This module provides:
//! - `EntryMap`, the in-memory site/username/password mapping (`entries`)
//! - `VaultStore`, which owns the salt and blob files (`store`)

pub mod entries;
pub mod store;

// Re-export the most commonly used items.
pub use entries::EntryMap;
pub use store::{VaultPaths, VaultStore};
