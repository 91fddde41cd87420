//! `passvault init` — create a new vault (salt file + empty blob).

use crate::cli::output;
use crate::cli::{prompt_new_passphrase, vault_paths, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let paths = vault_paths(cli)?;
    let store = VaultStore::new(paths);

    // Refuse to re-initialize an existing vault; `open_or_create` would
    // happily open it, but `init` promises a fresh one.
    if store.blob_exists() {
        output::tip("Use `passvault add <site> <user>` to store credentials in the existing vault.");
        return Err(PassVaultError::VaultAlreadyExists(
            store.blob_path().to_path_buf(),
        ));
    }

    // Prompt for a new passphrase (with confirmation), then write the
    // salt and an empty encrypted blob.
    let passphrase = prompt_new_passphrase()?;
    store.open_or_create(passphrase.as_bytes())?;

    output::success(&format!("Vault created at {}", store.blob_path().display()));
    output::warning("Keep the salt file safe — deleting it makes the vault unrecoverable.");

    output::tip("Run `passvault add <site> <user>` to store your first credential.");
    output::tip("Run `passvault list` to see stored sites.");
    output::tip("Run `passvault generate` for a random password.");

    Ok(())
}
