//! `passvault remove` — remove one username from a site.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{prompt_passphrase, vault_paths, Cli};
use crate::errors::{PassVaultError, Result};
use crate::vault::VaultStore;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, site: &str, user: &str, force: bool) -> Result<()> {
    let paths = vault_paths(cli)?;

    // Unless --force is set, ask for confirmation before removing.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove credential for {user}@{site}?"))
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

    // Only save when something actually changed.
    if entries.remove_entry(site, user) {
        store.save(&entries, passphrase.as_bytes())?;
        output::success(&format!("Removed credential for {user}@{site}"));
    } else {
        output::warning(&format!("No entry for {user}@{site} — nothing removed."));
    }

    Ok(())
}
