//! `passvault generate` — print a random password without touching the vault.

use crate::cli::load_settings;
use crate::errors::Result;
use crate::generator;

/// Execute the `generate` command.
///
/// Character classes default to the settings file; the `--no-*` flags
/// switch individual classes off for one invocation.
pub fn execute(
    length: Option<usize>,
    no_upper: bool,
    no_digits: bool,
    no_symbols: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let len = length.unwrap_or(settings.generator_length);

    let password = generator::generate(
        len,
        settings.generator_upper && !no_upper,
        settings.generator_digits && !no_digits,
        settings.generator_symbols && !no_symbols,
    )?;

    // Bare stdout so the output can be piped or captured.
    println!("{password}");

    Ok(())
}
