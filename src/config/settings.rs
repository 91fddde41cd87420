use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};
use crate::vault::VaultPaths;

/// Project-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.  The KDF round count is deliberately
/// not configurable — it is part of the on-disk format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory where the salt and blob files are stored.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// File name of the raw salt file inside the vault directory.
    #[serde(default = "default_salt_file")]
    pub salt_file: String,

    /// File name of the encrypted blob file inside the vault directory.
    #[serde(default = "default_blob_file")]
    pub blob_file: String,

    /// Default length for generated passwords.
    #[serde(default = "default_generator_length")]
    pub generator_length: usize,

    /// Include uppercase letters in generated passwords.
    #[serde(default = "default_true")]
    pub generator_upper: bool,

    /// Include digits in generated passwords.
    #[serde(default = "default_true")]
    pub generator_digits: bool,

    /// Include punctuation symbols in generated passwords.
    #[serde(default = "default_true")]
    pub generator_symbols: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passvault".to_string()
}

fn default_salt_file() -> String {
    "vault.salt".to_string()
}

fn default_blob_file() -> String {
    "vault.enc".to_string()
}

fn default_generator_length() -> usize {
    crate::generator::DEFAULT_LENGTH
}

fn default_true() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            salt_file: default_salt_file(),
            blob_file: default_blob_file(),
            generator_length: default_generator_length(),
            generator_upper: true,
            generator_digits: true,
            generator_symbols: true,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<project_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Build the salt and blob file paths inside a vault directory.
    pub fn paths_in(&self, vault_dir: &Path) -> VaultPaths {
        VaultPaths {
            salt_path: vault_dir.join(&self.salt_file),
            blob_path: vault_dir.join(&self.blob_file),
        }
    }

    /// Build the full vault directory path for a project.
    pub fn vault_dir_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
