//! `passvault users` — list the usernames stored for one site.

use crate::cli::output;
use crate::cli::{prompt_passphrase, vault_paths, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `users` command.
pub fn execute(cli: &Cli, site: &str) -> Result<()> {
    let paths = vault_paths(cli)?;

    let passphrase = prompt_passphrase()?;
    let store = VaultStore::new(paths);
    let entries = store.open_or_create(passphrase.as_bytes())?;

    let users = entries.users_for_site(site);
    if users.is_empty() {
        output::info(&format!("No entries for site '{site}'."));
        return Ok(());
    }

    output::print_users_table(site, &users);

    Ok(())
}
