//! Vault module — encrypted record storage.
//!
//! This module provides:
//! - `Record` and `SortField` types (`record`)
//! - The ciphertext + timestamp-marker file layout (`format`)
//! - High-level `VaultStore` for opening and managing vaults (`store`)

pub mod format;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{Record, SortField};
pub use store::VaultStore;
