//! `passvault add` — add or update a credential in the vault.

use std::io::{self, IsTerminal, Read};

use crate::cli::output;
use crate::cli::{load_settings, prompt_passphrase, vault_paths, Cli};
use crate::errors::Result;
use crate::generator;
use crate::vault::VaultStore;

/// Execute the `add` command.
pub fn execute(
    cli: &Cli,
    site: &str,
    user: &str,
    password: Option<&str>,
    generate: bool,
    length: Option<usize>,
) -> Result<()> {
    let paths = vault_paths(cli)?;

    // Determine the password value from one of four sources.
    let value = if generate {
        // Source 1: Random generation with the configured character classes.
        let settings = load_settings()?;
        let len = length.unwrap_or(settings.generator_length);
        let generated = generator::generate(
            len,
            settings.generator_upper,
            settings.generator_digits,
            settings.generator_symbols,
        )?;
        output::info(&format!("Generated password: {generated}"));
        generated
    } else if let Some(v) = password {
        // Source 2: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 3: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 4: Interactive secure prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter password for {user}@{site}"))
            .interact()
            .map_err(|e| {
                crate::errors::PassVaultError::CommandFailed(format!("input prompt: {e}"))
            })?
    };

    // Unlock the vault, upsert the entry, and save.
    let passphrase = prompt_passphrase()?;
    let store = VaultStore::new(paths);
    let mut entries = store.open_or_create(passphrase.as_bytes())?;

    let existed = entries.get(site, user).is_some();
    entries.upsert(site, user, &value)?;
    store.save(&entries, passphrase.as_bytes())?;

    if existed {
        output::success(&format!(
            "Updated password for {user}@{site} ({} total)",
            entries.entry_count()
        ));
    } else {
        output::success(&format!(
            "Stored password for {user}@{site} ({} total)",
            entries.entry_count()
        ));
    }

    Ok(())
}
