//! Vault persistence: the salt file and the encrypted blob file.
//!
//! `VaultStore` is the only component that touches these two files.  It
//! derives the symmetric key from the caller's passphrase and the
//! persisted salt, decrypts the blob into an `EntryMap` on open, and
//! re-encrypts the whole map on every save.

use std::fs;
use std::path::{Path, PathBuf};

use zeroize::Zeroize;

use crate::crypto::{cipher, kdf};
use crate::errors::{PassVaultError, Result};

use super::entries::EntryMap;

/// Filesystem locations of the two files a vault owns.
///
/// Explicit configuration rather than fixed file names, so multiple
/// vaults can coexist in one process and tests can point a store at a
/// temporary directory.
#[derive(Debug, Clone)]
pub struct VaultPaths {
    /// Raw 16-byte salt file, stored unencrypted.
    pub salt_path: PathBuf,

    /// The encrypted blob file (one AEAD token).
    pub blob_path: PathBuf,
}

/// The main vault handle.  Create one with `VaultStore::new`, then call
/// `open_or_create` to get the decrypted `EntryMap` and `save` to
/// persist it back.
pub struct VaultStore {
    paths: VaultPaths,
}

impl VaultStore {
    pub fn new(paths: VaultPaths) -> Self {
        Self { paths }
    }

    /// Path to the salt file.
    pub fn salt_path(&self) -> &Path {
        &self.paths.salt_path
    }

    /// Path to the encrypted blob file.
    pub fn blob_path(&self) -> &Path {
        &self.paths.blob_path
    }

    /// Returns `true` if the blob file exists on disk.
    pub fn blob_exists(&self) -> bool {
        self.paths.blob_path.exists()
    }

    /// Create the salt file with 16 cryptographically random bytes if it
    /// does not exist yet.  Idempotent; an existing salt is never
    /// modified, since the blob is only decryptable under the salt it
    /// was sealed with.
    ///
    /// Returns the salt file path.
    pub fn ensure_salt(&self) -> Result<PathBuf> {
        let path = &self.paths.salt_path;

        if !path.exists() {
            ensure_parent_dir(path)?;
            let salt = kdf::generate_salt();
            fs::write(path, salt)?;
        }

        Ok(path.clone())
    }

    /// Open the vault, creating it if no blob file exists yet.
    ///
    /// A fresh vault gets an empty map sealed and written immediately, so
    /// a salt file on disk is always accompanied by a decryptable blob.
    pub fn open_or_create(&self, passphrase: &[u8]) -> Result<EntryMap> {
        let salt_path = self.ensure_salt()?;
        let salt = fs::read(&salt_path)?;

        let mut key = kdf::derive_key(passphrase, &salt)?;

        let result = if self.paths.blob_path.exists() {
            self.load_blob(&key)
        } else {
            let entries = EntryMap::new();
            self.write_blob(&key, &entries).map(|()| entries)
        };

        key.zeroize();
        result
    }

    /// Encrypt the full map and replace the blob file.
    ///
    /// The salt is re-read and the key re-derived on every save, so the
    /// key always matches what is on disk.  Every save is a full rewrite
    /// of the blob — no incremental persistence.
    pub fn save(&self, entries: &EntryMap, passphrase: &[u8]) -> Result<()> {
        let salt = fs::read(&self.paths.salt_path)?;

        let mut key = kdf::derive_key(passphrase, &salt)?;
        let result = self.write_blob(&key, entries);
        key.zeroize();

        result
    }

    /// Read, authenticate, and deserialize the blob file.
    fn load_blob(&self, key: &[u8]) -> Result<EntryMap> {
        let token = fs::read(&self.paths.blob_path)?;

        let mut payload = cipher::open(key, &token)?;

        // Authentication already succeeded, so a parse failure here is a
        // fatal integrity bug, not a wrong passphrase.
        let parsed: std::result::Result<EntryMap, _> = serde_json::from_slice(&payload);
        payload.zeroize();

        parsed.map_err(|e| PassVaultError::MalformedVaultData(e.to_string()))
    }

    /// Serialize, seal, and atomically write the blob file.
    ///
    /// Writes to a temp file in the same directory and renames it over
    /// the target, so the blob on disk is always either the old complete
    /// version or the new complete version, never a half-written one.
    fn write_blob(&self, key: &[u8], entries: &EntryMap) -> Result<()> {
        let mut payload = serde_json::to_vec(entries)
            .map_err(|e| PassVaultError::SerializationError(e.to_string()))?;

        let token = cipher::seal(key, &payload)?;
        payload.zeroize();

        let path = &self.paths.blob_path;
        ensure_parent_dir(path)?;

        let parent = path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            path.file_name().unwrap_or_default().to_string_lossy()
        ));

        fs::write(&tmp_path, &token)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }
}

/// Create the parent directory of `path` if it is missing.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
