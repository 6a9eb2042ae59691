//! On-disk vault layout and the timestamp marker.
//!
//! A vault file has this layout:
//!
//! ```text
//! [ciphertext bytes][12-byte plaintext marker]
//! ```
//!
//! - **Ciphertext**: the keystream-enciphered record lines.
//! - **Marker**: 12 ASCII digits written on every persist, local time,
//!   field order `YY HH MM month minute day second` (each two-digit,
//!   zero-padded). The marker is stripped on every read and never
//!   validated — it is a write-time footer, not a checksum.
//!
//! A missing or zero-length file is a valid empty vault.

use std::fs;
use std::path::Path;

use chrono::{Datelike, Local, Timelike};

use crate::errors::{CredVaultError, Result};

/// Length of the plaintext timestamp footer.
pub const MARKER_LEN: usize = 12;

/// Read the ciphertext portion of a vault file.
///
/// Returns `None` for a missing or empty file (the empty-vault state).
/// Otherwise strips the trailing marker and returns the remaining
/// bytes; a non-empty file too small to carry the marker is malformed.
pub fn read_ciphertext(path: &Path) -> Result<Option<Vec<u8>>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut data = fs::read(path)?;
    if data.is_empty() {
        return Ok(None);
    }
    if data.len() < MARKER_LEN {
        return Err(CredVaultError::InvalidVaultFormat(
            "file too small to carry the timestamp footer".into(),
        ));
    }

    data.truncate(data.len() - MARKER_LEN);
    Ok(Some(data))
}

/// Write `ciphertext` plus a fresh marker, overwriting the file.
///
/// This is a full-file rewrite in a single write call — no temp-file
/// rename, so a crash mid-write can corrupt the file. That window is
/// part of the format contract.
pub fn write_ciphertext(path: &Path, ciphertext: &[u8]) -> Result<()> {
    let mut buf = Vec::with_capacity(ciphertext.len() + MARKER_LEN);
    buf.extend_from_slice(ciphertext);
    buf.extend_from_slice(timestamp_marker().as_bytes());

    fs::write(path, &buf)?;
    Ok(())
}

/// The 12-digit persist marker for the current local time.
///
/// Field order is `YY HH MM month minute day second` — interleaved, not
/// calendar order. Preserved exactly for byte-for-byte compatibility
/// with existing vault files.
pub fn timestamp_marker() -> String {
    let now = Local::now();
    format!(
        "{:02}{:02}{:02}{:02}{:02}{:02}",
        now.year() % 100,
        now.hour(),
        now.month(),
        now.minute(),
        now.day(),
        now.second()
    )
}
