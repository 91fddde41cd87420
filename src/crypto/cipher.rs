//! AES-256-GCM authenticated encryption.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `open` splits the nonce back out and
//! verifies the authentication tag before returning any plaintext.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Never reuse a nonce under the same key.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt a token that was produced by `seal`.
///
/// Fails with `WrongPassphraseOrCorruptData` on any tag mismatch; the
/// error never distinguishes a wrong key from a tampered token.
pub fn open(key: &[u8], token: &[u8]) -> Result<Vec<u8>> {
    // Make sure we have at least a nonce worth of bytes.
    if token.len() < NONCE_LEN {
        return Err(PassVaultError::WrongPassphraseOrCorruptData);
    }

    let (nonce_bytes, ciphertext) = token.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|_| PassVaultError::WrongPassphraseOrCorruptData)?;

    // Decrypt and verify the auth tag in one atomic operation.
    let plaintext = cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::WrongPassphraseOrCorruptData)?;

    Ok(plaintext)
}
