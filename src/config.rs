//! Configuration loading and password hash resolution

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::auth;

/// Environment variable holding the hex SHA-256 reference hash (preferred)
pub const PASSWORD_HASH_ENV: &str = "SONG_CATALOG_PASSWORD_HASH";

/// Environment variable holding the plaintext secret, hashed at startup
/// (used only when the hash variable is absent)
pub const PASSWORD_ENV: &str = "SONG_CATALOG_PASSWORD";

/// SHA-256 hash of the original development password. Keeps the comparison
/// hash-to-hash even when no secret is configured, but must be overridden
/// in real deployments.
pub const DEFAULT_PASSWORD_HASH: &str =
    "11fe08866b4c8d56a96799c1f2487fbbf6e84928e2212e59b716bfd69b1b6ec8";

/// Command-line arguments with environment fallbacks
#[derive(Debug, Parser)]
#[command(name = "chordbook", about = "Password-gated song catalog web UI")]
pub struct Cli {
    /// Path to the SQLite database file (created if absent)
    #[arg(long, env = "SONG_CATALOG_DB", default_value = "songs.db")]
    pub database: PathBuf,

    /// Address and port to listen on
    #[arg(long, env = "SONG_CATALOG_BIND", default_value = "127.0.0.1:5750")]
    pub bind: String,

    /// Plain-text file holding the displayed catalog version
    #[arg(long, env = "SONG_CATALOG_VERSION_FILE", default_value = "version.txt")]
    pub version_file: PathBuf,
}

/// Immutable post-startup configuration, constructed once in `main` and
/// passed explicitly to the auth gate and the renderer via `AppState`
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Reference hash every mutating request is checked against
    pub password_hash: String,
    /// Version string shown in the listing footer
    pub version: String,
}

/// Resolve the reference password hash, in priority order:
///
/// 1. An explicit pre-hashed value
/// 2. A plaintext value, hashed here
/// 3. The built-in development fallback hash
///
/// Returns the hash plus a flag indicating the insecure fallback was used,
/// so callers can warn (and tests can assert) without capturing log output.
/// Empty values are treated as absent.
pub fn resolve_password_hash(
    hashed: Option<String>,
    plain: Option<String>,
) -> (String, bool) {
    if let Some(hash) = hashed.filter(|h| !h.is_empty()) {
        return (hash, false);
    }
    if let Some(plain) = plain.filter(|p| !p.is_empty()) {
        return (auth::sha256_hex(&plain), false);
    }
    (DEFAULT_PASSWORD_HASH.to_string(), true)
}

/// Load the displayed version string from a plain-text file.
///
/// A missing or unreadable file degrades to `"unknown"` rather than failing
/// startup.
pub fn load_version(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(contents) => contents.trim().to_string(),
        Err(_) => "unknown".to_string(),
    }
}
