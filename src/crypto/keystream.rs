//! Repeating-key XOR keystream combiner.
//!
//! The transform is its own inverse, so `encrypt` and `decrypt` are the
//! same operation under two names:
//!
//! ```text
//! out[i] = data[i] ^ key[i % key.len()]
//! ```
//!
//! Output length always equals input length.

use crate::errors::{CredVaultError, Result};

/// Encipher `data` with `key`.
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    apply_keystream(data, key)
}

/// Decipher data that was produced by [`encrypt`] with the same key.
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    apply_keystream(data, key)
}

/// XOR each byte of `data` against the key, cycling the key as needed.
///
/// An empty key is rejected explicitly rather than left as a
/// divide-by-zero class failure.
fn apply_keystream(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(CredVaultError::EmptyCipherKey);
    }

    Ok(data
        .iter()
        .zip(key.iter().cycle())
        .map(|(byte, k)| byte ^ k)
        .collect())
}
