//! CredVault — a local credential vault core.
//!
//! Stores named password records grouped by category inside a single
//! file, symmetrically enciphered with a user-supplied passphrase.
//! This crate is the record store only: the serialization format, the
//! keystream cipher, and the wrong-key detection logic. Front-ends
//! (menus, prompts, pickers) live elsewhere and call in through
//! [`VaultStore`].

pub mod crypto;
pub mod errors;
pub mod vault;

pub use errors::{CredVaultError, Result};
pub use vault::{Record, SortField, VaultStore};
