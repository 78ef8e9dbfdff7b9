// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Generate a record ID from a namespace, a seed string, and a timestamp.
/// Format: {ns}-{hash} where hash is the first 8 hex chars of SHA256(seed + timestamp)
pub fn generate_id(ns: &str, seed: &str, at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", seed, at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]); // First 8 hex chars (4 bytes)
    format!("{}-{}", ns, short_hash)
}

/// Generate a unique ID, handling collisions by appending an incrementing suffix.
pub fn generate_unique_id<F>(ns: &str, seed: &str, at: &DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(ns, seed, at);

    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
