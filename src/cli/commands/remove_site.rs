//! `passvault remove-site` — remove a site and every username under it.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_passphrase, vault_paths, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `remove-site` command.
pub fn execute(cli: &Cli, site: &str, force: bool) -> Result<()> {
    let paths = vault_paths(cli)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove site '{site}' and all its credentials?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let passphrase = prompt_passphrase()?;
    let store = VaultStore::new(paths);
    let mut entries = store.open_or_create(passphrase.as_bytes())?;

    let count = entries.users_for_site(site).len();

    if entries.remove_site(site) {
        store.save(&entries, passphrase.as_bytes())?;
        output::success(&format!(
            "Removed site '{site}' ({count} credential(s))"
        ));
    } else {
        output::warning(&format!("No site '{site}' in the vault — nothing removed."));
    }

    Ok(())
}
