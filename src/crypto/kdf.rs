//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The round count is a fixed constant that is effectively part of the
//! on-disk vault format: the blob file stores no KDF parameters, so
//! changing `PBKDF2_ROUNDS` (or losing the salt file) makes existing
//! vaults permanently undecryptable.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::errors::{PassVaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
///
/// Treat this as a versioned constant baked into every deployed vault.
pub const PBKDF2_ROUNDS: u32 = 48_000;

/// Derive a 32-byte symmetric key from a master passphrase and salt.
///
/// The same passphrase + salt always produce the same key.
pub fn derive_key(passphrase: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    if salt.is_empty() {
        return Err(PassVaultError::KeyDerivationFailed(
            "salt must not be empty".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase, salt, PBKDF2_ROUNDS, &mut key);
    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
