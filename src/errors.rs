use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum CredVaultError {
    /// The deciphered bytes did not parse as well-formed records.
    ///
    /// This is the only wrong-passphrase signal the format carries: the
    /// keystream cipher has no integrity tag, so a bad key is detected
    /// (probabilistically, not cryptographically) by garbage failing the
    /// five-fields-per-line check.
    #[error("Decryption failed — wrong passphrase or corrupted data")]
    DecryptionFailed,

    #[error("Cipher key must not be empty")]
    EmptyCipherKey,

    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    #[error("Record index {index} out of range for category '{category}' ({len} records)")]
    IndexOutOfRange {
        category: String,
        index: usize,
        len: usize,
    },

    /// A record field contained `,` or a newline — the storage format has
    /// no escaping, so these are rejected at write time.
    #[error("Record field '{0}' must not contain ',' or newline characters")]
    InvalidFieldValue(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, CredVaultError>;
