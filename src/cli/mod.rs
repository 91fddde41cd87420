//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;
use clap_complete::Shell;

use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultPaths;

/// Minimum passphrase length to prevent trivially weak passphrases.
const MIN_PASSPHRASE_LEN: usize = 8;

/// PassVault CLI: local encrypted password manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .passvault, or `vault_dir` from .passvault.toml)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize a new vault (salt file + empty encrypted blob)
    Init,

    /// Add or update a credential
    Add {
        /// Site or service name (e.g. example.com)
        site: String,
        /// Username for the site
        user: String,
        /// Password value (omit for interactive prompt)
        password: Option<String>,
        /// Generate a random password instead of prompting
        #[arg(long, conflicts_with = "password")]
        generate: bool,
        /// Length of the generated password (only with --generate)
        #[arg(long, requires = "generate")]
        length: Option<usize>,
    },

    /// Print the password stored for a site/username pair
    Get {
        /// Site or service name
        site: String,
        /// Username for the site
        user: String,
    },

    /// List all sites in the vault
    List,

    /// List usernames stored for a site
    Users {
        /// Site or service name
        site: String,
    },

    /// Remove one username from a site
    Remove {
        /// Site or service name
        site: String,
        /// Username to remove
        user: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Remove a site and all usernames stored for it
    RemoveSite {
        /// Site or service name
        site: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Generate a random password without touching the vault
    Generate {
        /// Password length (default from .passvault.toml, falling back to 20)
        #[arg(short, long)]
        length: Option<usize>,
        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,
        /// Exclude digits
        #[arg(long)]
        no_digits: bool,
        /// Exclude punctuation symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master passphrase, trying in order:
/// 1. `PASSVAULT_PASSPHRASE` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter master passphrase")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new passphrase with confirmation (used during `init`).
///
/// Also respects `PASSVAULT_PASSPHRASE` for scripted usage.
/// Enforces a minimum passphrase length.
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory on drop.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(PassVaultError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let passphrase = dialoguer::Password::new()
            .with_prompt("Choose master passphrase")
            .with_confirmation(
                "Confirm master passphrase",
                "Passphrases do not match, try again",
            )
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if passphrase.len() < MIN_PASSPHRASE_LEN {
            output::warning(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(passphrase));
    }
}

/// Load settings from the current working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Resolve the salt and blob file paths from the CLI arguments.
///
/// The `--vault-dir` flag wins over the `vault_dir` setting; file names
/// inside the directory come from settings.
pub fn vault_paths(cli: &Cli) -> Result<VaultPaths> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let dir = match &cli.vault_dir {
        Some(dir) => cwd.join(dir),
        None => settings.vault_dir_path(&cwd),
    };

    Ok(settings.paths_in(&dir))
}
