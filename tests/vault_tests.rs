//! Integration tests for the PassVault vault store.

use std::fs;

use passvault::crypto;
use passvault::errors::PassVaultError;
use passvault::vault::{EntryMap, VaultPaths, VaultStore};
use tempfile::TempDir;

/// Helper: create a store pointing into a fresh temp dir.
fn temp_store() -> (TempDir, VaultStore) {
    let dir = TempDir::new().expect("create temp dir");
    let paths = VaultPaths {
        salt_path: dir.path().join("vault.salt"),
        blob_path: dir.path().join("vault.enc"),
    };
    (dir, VaultStore::new(paths))
}

/// Helper: a small map with a few entries.
fn sample_map() -> EntryMap {
    let mut map = EntryMap::new();
    map.upsert("example.com", "alice", "Sw0rd!").unwrap();
    map.upsert("example.com", "bob", "hunter2").unwrap();
    map.upsert("forge.dev", "carol", "").unwrap();
    map
}

// ---------------------------------------------------------------------------
// Fresh vault creation
// ---------------------------------------------------------------------------

#[test]
fn open_or_create_initializes_a_fresh_vault() {
    let (_dir, store) = temp_store();

    let entries = store.open_or_create(b"test-passphrase").expect("create");
    assert!(entries.is_empty());

    // Both files must exist afterwards: a 16-byte salt and a sealed blob.
    let salt = fs::read(store.salt_path()).expect("read salt");
    assert_eq!(salt.len(), 16);
    assert!(store.blob_exists());
}

#[test]
fn ensure_salt_is_idempotent() {
    let (_dir, store) = temp_store();

    let path1 = store.ensure_salt().expect("first ensure");
    let salt1 = fs::read(&path1).expect("read salt 1");

    let path2 = store.ensure_salt().expect("second ensure");
    let salt2 = fs::read(&path2).expect("read salt 2");

    assert_eq!(path1, path2);
    assert_eq!(salt1, salt2, "an existing salt must never be replaced");
}

#[test]
fn fresh_vault_roundtrips_an_empty_map() {
    let (_dir, store) = temp_store();

    store.open_or_create(b"pw-empty-roundtrip").expect("create");
    let reopened = store.open_or_create(b"pw-empty-roundtrip").expect("reopen");
    assert!(reopened.is_empty());
}

// ---------------------------------------------------------------------------
// Save and re-open round-trip
// ---------------------------------------------------------------------------

#[test]
fn save_and_reopen_roundtrip() {
    let (_dir, store) = temp_store();
    let passphrase = b"roundtrip-passphrase";

    store.open_or_create(passphrase).expect("create");

    let map = sample_map();
    store.save(&map, passphrase).expect("save");

    let reopened = store.open_or_create(passphrase).expect("reopen");
    assert_eq!(reopened, map);
    assert_eq!(reopened.get("example.com", "alice"), Some("Sw0rd!"));
    assert_eq!(reopened.get("forge.dev", "carol"), Some(""));
}

#[test]
fn save_fully_replaces_the_blob() {
    let (_dir, store) = temp_store();
    let passphrase = b"replace-passphrase";

    store.open_or_create(passphrase).expect("create");
    store.save(&sample_map(), passphrase).expect("save full");

    // Saving a smaller map must not leave stale entries behind.
    let mut small = EntryMap::new();
    small.upsert("only.site", "solo", "pw").unwrap();
    store.save(&small, passphrase).expect("save small");

    let reopened = store.open_or_create(passphrase).expect("reopen");
    assert_eq!(reopened, small);
    assert_eq!(reopened.site_count(), 1);
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let (dir, store) = temp_store();
    let passphrase = b"tmpfile-passphrase";

    store.open_or_create(passphrase).expect("create");
    store.save(&sample_map(), passphrase).expect("save");

    let names: Vec<String> = fs::read_dir(dir.path())
        .expect("read dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names.len(), 2, "expected only salt + blob, got {names:?}");
    assert!(!names.iter().any(|n| n.ends_with(".tmp")));
}

#[test]
fn save_without_salt_file_fails() {
    let (_dir, store) = temp_store();

    // save never creates the salt itself — the session must have gone
    // through open_or_create first.
    let result = store.save(&sample_map(), b"pw");
    assert!(matches!(result, Err(PassVaultError::StorageIo(_))));
}

// ---------------------------------------------------------------------------
// Wrong passphrase and tampering
// ---------------------------------------------------------------------------

#[test]
fn wrong_passphrase_rejected() {
    let (_dir, store) = temp_store();

    store.open_or_create(b"correct-passphrase").expect("create");
    store
        .save(&sample_map(), b"correct-passphrase")
        .expect("save");

    let result = store.open_or_create(b"wrong-passphrase");
    assert!(matches!(
        result,
        Err(PassVaultError::WrongPassphraseOrCorruptData)
    ));
}

#[test]
fn tampered_blob_detected() {
    let (_dir, store) = temp_store();
    let passphrase = b"tamper-passphrase";

    store.open_or_create(passphrase).expect("create");
    store.save(&sample_map(), passphrase).expect("save");

    // Flip one byte in the middle of the blob.
    let mut data = fs::read(store.blob_path()).expect("read blob");
    let mid = data.len() / 2;
    data[mid] ^= 0xFF;
    fs::write(store.blob_path(), &data).expect("write tampered blob");

    let result = store.open_or_create(passphrase);
    assert!(matches!(
        result,
        Err(PassVaultError::WrongPassphraseOrCorruptData)
    ));
}

#[test]
fn every_blob_byte_flip_is_detected() {
    let (_dir, store) = temp_store();
    let passphrase = b"bitflip-passphrase";

    // An empty vault keeps the blob small enough to try every position.
    store.open_or_create(passphrase).expect("create");
    let original = fs::read(store.blob_path()).expect("read blob");

    for i in 0..original.len() {
        let mut tampered = original.clone();
        tampered[i] ^= 0x01;
        fs::write(store.blob_path(), &tampered).expect("write tampered blob");

        let result = store.open_or_create(passphrase);
        assert!(
            matches!(result, Err(PassVaultError::WrongPassphraseOrCorruptData)),
            "flipping blob byte {i} was not detected"
        );
    }
}

#[test]
fn deleting_the_salt_makes_the_vault_unrecoverable() {
    let (_dir, store) = temp_store();
    let passphrase = b"lost-salt-passphrase";

    store.open_or_create(passphrase).expect("create");
    store.save(&sample_map(), passphrase).expect("save");

    fs::remove_file(store.salt_path()).expect("delete salt");

    // open_or_create regenerates a fresh salt, which derives a different
    // key — the old blob can never authenticate again, even with the
    // correct passphrase.
    let result = store.open_or_create(passphrase);
    assert!(matches!(
        result,
        Err(PassVaultError::WrongPassphraseOrCorruptData)
    ));
}

// ---------------------------------------------------------------------------
// Malformed payload after successful authentication
// ---------------------------------------------------------------------------

#[test]
fn garbage_payload_sealed_under_the_right_key_is_malformed() {
    let (_dir, store) = temp_store();
    let passphrase = b"malformed-passphrase";

    store.open_or_create(passphrase).expect("create");

    // Seal a payload that authenticates fine but is not JSON at all.
    let salt = fs::read(store.salt_path()).expect("read salt");
    let key = crypto::derive_key(passphrase, &salt).expect("derive");
    let token = crypto::seal(&key, b"definitely not json").expect("seal");
    fs::write(store.blob_path(), token).expect("write blob");

    let result = store.open_or_create(passphrase);
    assert!(matches!(result, Err(PassVaultError::MalformedVaultData(_))));
}

#[test]
fn wrong_shaped_json_payload_is_malformed() {
    let (_dir, store) = temp_store();
    let passphrase = b"shape-passphrase";

    store.open_or_create(passphrase).expect("create");

    // Valid JSON, wrong structure (array instead of object-of-objects).
    let salt = fs::read(store.salt_path()).expect("read salt");
    let key = crypto::derive_key(passphrase, &salt).expect("derive");
    let token = crypto::seal(&key, b"[1, 2, 3]").expect("seal");
    fs::write(store.blob_path(), token).expect("write blob");

    let result = store.open_or_create(passphrase);
    assert!(matches!(result, Err(PassVaultError::MalformedVaultData(_))));
}

// ---------------------------------------------------------------------------
// Multiple vaults per process
// ---------------------------------------------------------------------------

#[test]
fn two_stores_with_separate_paths_are_independent() {
    let (_dir_a, store_a) = temp_store();
    let (_dir_b, store_b) = temp_store();

    store_a.open_or_create(b"passphrase-a").expect("create a");
    store_b.open_or_create(b"passphrase-b").expect("create b");

    let mut map_a = EntryMap::new();
    map_a.upsert("a-only.com", "alice", "1").unwrap();
    store_a.save(&map_a, b"passphrase-a").expect("save a");

    let reopened_b = store_b.open_or_create(b"passphrase-b").expect("reopen b");
    assert!(reopened_b.is_empty(), "store b must not see store a's data");
}
