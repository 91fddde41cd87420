//! `passvault get` — retrieve and print a single password.

use crate::cli::{prompt_passphrase, vault_paths, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `get` command.
pub fn execute(cli: &Cli, site: &str, user: &str) -> Result<()> {
    let paths = vault_paths(cli)?;

    let passphrase = prompt_passphrase()?;
    let store = VaultStore::new(paths);
    let entries = store.open_or_create(passphrase.as_bytes())?;

    // Print the password to stdout so it can be piped.
    match entries.get(site, user) {
        Some(password) => {
            println!("{password}");
            Ok(())
        }
        None => Err(PassVaultError::CommandFailed(format!(
            "no entry for {user}@{site}"
        ))),
    }
}
