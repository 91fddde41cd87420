//! `passvault list` — display all sites in a table.

use crate::cli::output;
use crate::cli::{prompt_passphrase, vault_paths, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let paths = vault_paths(cli)?;

    let passphrase = prompt_passphrase()?;
    let store = VaultStore::new(paths);
    let entries = store.open_or_create(passphrase.as_bytes())?;

    output::info(&format!(
        "{} site(s) — {} credential(s)",
        entries.site_count(),
        entries.entry_count()
    ));

    let rows: Vec<(String, usize)> = entries
        .sites()
        .into_iter()
        .map(|site| {
            let count = entries.users_for_site(&site).len();
            (site, count)
        })
        .collect();

    output::print_sites_table(&rows);

    Ok(())
}
