//! Slug helpers shared by category keys and note ids.

use md5::{Digest, Md5};
use std::collections::HashSet;

/// Lower-case `text` and collapse every run of characters outside
/// `[a-z0-9]` into a single hyphen, trimming hyphens at both ends.
///
/// The result may be empty.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Key for a category directory: its slug, or `cat-<8 hex of md5(name)>`
/// when nothing alphanumeric survives.
pub fn category_key(name: &str) -> String {
    let key = slugify(name);
    if !key.is_empty() {
        return key;
    }

    let digest = hex::encode(Md5::digest(name.as_bytes()));
    format!("cat-{}", &digest[..8])
}

/// Hands out category keys unique within one run.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    used: HashSet<String>,
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base`, or `base-2`, `base-3`, ... if already taken.
    pub fn allocate(&mut self, base: &str) -> String {
        let mut key = base.to_string();
        let mut suffix = 2;
        while self.used.contains(&key) {
            key = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        self.used.insert(key.clone());
        key
    }
}
