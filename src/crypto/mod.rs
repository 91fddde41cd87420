//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption (`cipher`)
//! - PBKDF2-HMAC-SHA256 key derivation and salt generation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, generate_salt};
pub use cipher::{open, seal};
pub use kdf::{derive_key, generate_salt, PBKDF2_ROUNDS, SALT_LEN};
