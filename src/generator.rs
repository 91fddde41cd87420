//! Random password generation.
//!
//! Lowercase letters are always part of the alphabet; uppercase, digits,
//! and punctuation are opt-in.  When an extra class is enabled, the
//! result is guaranteed to contain at least one character from it.
//!
//! Every choice — forced characters, filler characters, and the final
//! shuffle — comes from the OS CSPRNG, never a general-purpose PRNG.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::{PassVaultError, Result};

/// Default password length when the caller does not specify one.
pub const DEFAULT_LENGTH: usize = 20;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generate a random password of `length` characters.
///
/// One character of each enabled extra class is forced into the result;
/// the remainder is drawn from the full combined alphabet and the whole
/// sequence is shuffled so the forced characters do not cluster at the
/// front.
pub fn generate(length: usize, use_upper: bool, use_digits: bool, use_symbols: bool) -> Result<String> {
    if length == 0 {
        return Err(PassVaultError::InvalidConfiguration(
            "password length must be at least 1".into(),
        ));
    }

    let mut forced_classes: Vec<&[u8]> = Vec::new();
    if use_upper {
        forced_classes.push(UPPERCASE);
    }
    if use_digits {
        forced_classes.push(DIGITS);
    }
    if use_symbols {
        forced_classes.push(SYMBOLS);
    }

    if length < forced_classes.len() {
        return Err(PassVaultError::InvalidConfiguration(format!(
            "length {length} is too short for {} required character classes",
            forced_classes.len()
        )));
    }

    let mut alphabet = LOWERCASE.to_vec();
    for class in &forced_classes {
        alphabet.extend_from_slice(class);
    }

    let mut rng = OsRng;

    // One guaranteed character per enabled class, then fill the rest.
    let mut password: Vec<u8> = Vec::with_capacity(length);
    for class in &forced_classes {
        password.push(pick(&mut rng, class));
    }
    while password.len() < length {
        password.push(pick(&mut rng, &alphabet));
    }

    password.shuffle(&mut rng);

    Ok(password.into_iter().map(char::from).collect())
}

/// Pick one byte from a non-empty character set.
fn pick(rng: &mut OsRng, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}
