//! The in-memory vault contents: site -> username -> password.
//!
//! `EntryMap` is what the blob file decrypts into and what every
//! repository operation mutates.  It performs no I/O; persistence is the
//! `VaultStore`'s job.
//!
//! Invariant: a site key, if present, always maps to a non-empty inner
//! mapping.  Removing the last username for a site removes the site.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// Ordered mapping of site name to the usernames (and their passwords)
/// stored for that site.
///
/// `BTreeMap` keeps the serialized payload deterministic and makes
/// `sites()` naturally sorted for display and testing.  Serde
/// `transparent` means the JSON payload is a plain keyed object:
/// `{"example.com": {"alice": "hunter2"}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryMap {
    sites: BTreeMap<String, BTreeMap<String, String>>,
}

impl EntryMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the password for `site`/`user`.
    ///
    /// Creates the inner mapping when the site is new.  The password may
    /// be empty; the site and username may not.
    pub fn upsert(&mut self, site: &str, user: &str, password: &str) -> Result<()> {
        if site.is_empty() {
            return Err(PassVaultError::InvalidArgument(
                "site name must not be empty".into(),
            ));
        }
        if user.is_empty() {
            return Err(PassVaultError::InvalidArgument(
                "username must not be empty".into(),
            ));
        }

        self.sites
            .entry(site.to_string())
            .or_default()
            .insert(user.to_string(), password.to_string());
        Ok(())
    }

    /// Return the password for `site`/`user`, or `None` if either key is
    /// absent.
    pub fn get(&self, site: &str, user: &str) -> Option<&str> {
        self.sites
            .get(site)
            .and_then(|users| users.get(user))
            .map(String::as_str)
    }

    /// Usernames stored for a site.  Empty when the site is absent.
    pub fn users_for_site(&self, site: &str) -> Vec<String> {
        self.sites
            .get(site)
            .map(|users| users.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All site names in lexicographic order.
    pub fn sites(&self) -> Vec<String> {
        self.sites.keys().cloned().collect()
    }

    /// Remove one username from a site.
    ///
    /// Removes the site entirely when its last username goes, keeping the
    /// no-empty-inner-mapping invariant.  Returns whether a removal
    /// occurred.
    pub fn remove_entry(&mut self, site: &str, user: &str) -> bool {
        let users = match self.sites.get_mut(site) {
            Some(users) => users,
            None => return false,
        };

        if users.remove(user).is_none() {
            return false;
        }

        if users.is_empty() {
            self.sites.remove(site);
        }
        true
    }

    /// Remove a site and every username under it.  Returns whether the
    /// site existed.
    pub fn remove_site(&mut self, site: &str) -> bool {
        self.sites.remove(site).is_some()
    }

    /// Number of sites.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Total number of site/username pairs.
    pub fn entry_count(&self) -> usize {
        self.sites.values().map(BTreeMap::len).sum()
    }

    /// `true` when the vault holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
