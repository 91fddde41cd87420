use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong master passphrase or corrupted vault data")]
    WrongPassphraseOrCorruptData,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Malformed vault data: {0}")]
    MalformedVaultData(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // --- Generator errors ---
    #[error("Invalid generator configuration: {0}")]
    InvalidConfiguration(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("Storage I/O error: {0}")]
    StorageIo(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
