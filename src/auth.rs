//! Shared-secret authentication gate
//!
//! A single reference SHA-256 hex digest is resolved at startup (see
//! `config::resolve_password_hash`). Every mutating request resubmits the
//! plaintext secret as a `password` form field; the submitted value is
//! hashed and compared digest-to-digest, never plaintext-to-plaintext.
//!
//! There is deliberately no session or token issuance, no rate limiting,
//! and no distinction between a missing and a wrong password.

use sha2::{Digest, Sha256};

/// SHA-256 digest of `input`, as 64 lowercase hex characters
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a submitted password against the configured reference hash.
///
/// An empty submission never authorizes, even if the reference happens to
/// equal the digest of the empty string.
pub fn verify_password(submitted: &str, reference_hash: &str) -> bool {
    if submitted.is_empty() {
        return false;
    }
    sha256_hex(submitted) == reference_hash
}
