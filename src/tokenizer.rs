//! Hash-based log key extraction
//!
//! Without a template miner (e.g. Drain), each log line is reduced to a short
//! digest of its trimmed content. Equal content always yields the equal key;
//! collisions between distinct templates are a tolerated approximation.

use sha2::{Digest, Sha256};

/// Type alias for opaque log line identifiers
pub type LogKey = String;

/// Number of hex characters kept from the digest. Chosen for output
/// compactness, not collision resistance.
const KEY_HEX_LEN: usize = 12;

/// Derives the log key for a single raw, non-blank log line
///
/// The line is trimmed, hashed with SHA-256, and truncated to 12 hex
/// characters. Deterministic and infallible: the digest operates on the
/// line's bytes, so no decoding step can fail here.
///
/// # Example
/// ```
/// use logsift::tokenizer::log_key;
///
/// let key = log_key("  Service started  ");
/// assert_eq!(key.len(), 12);
/// assert_eq!(key, log_key("Service started"));
/// ```
pub fn log_key(line: &str) -> LogKey {
    let digest = Sha256::digest(line.trim().as_bytes());
    let mut hex = hex::encode(digest);
    hex.truncate(KEY_HEX_LEN);
    hex
}

/// Maps a sequence of raw lines to their log keys, preserving order
pub fn to_log_keys(lines: &[String]) -> Vec<LogKey> {
    lines.iter().map(|line| log_key(line)).collect()
}
