//! High-level vault operations used by front-ends.
//!
//! `VaultStore` wraps the file format layer and the keystream cipher so
//! that callers can work with simple method calls like
//! `store.add_record(record)`. All CRUD operations act on the
//! in-memory map only; nothing touches disk until [`VaultStore::persist`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use crate::crypto::{decrypt, encrypt};
use crate::errors::{CredVaultError, Result};

use super::format;
use super::record::{Record, SortField};

/// The main vault handle. Open one with [`VaultStore::open`], then use
/// its methods to manage categories and records; call
/// [`VaultStore::persist`] to write the whole store back to disk.
///
/// One instance per file path: there is no file locking, and between
/// two instances sharing a path the last `persist` wins.
pub struct VaultStore {
    /// Path to the vault file on disk.
    path: PathBuf,

    /// The passphrase, held for the store's lifetime and used on every
    /// persist. Wiped from memory on drop.
    passphrase: Zeroizing<Vec<u8>>,

    /// Category name -> records, ordered lexicographically by key.
    ///
    /// The sorted iteration order is a serialization contract: it fixes
    /// the on-disk byte layout, so the container must be an ordered map.
    categories: BTreeMap<String, Vec<Record>>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault file at `path` with `passphrase`.
    ///
    /// A missing or empty file yields an empty store (no decipher is
    /// attempted). Otherwise the trailing marker is stripped, the
    /// ciphertext deciphered, and every line parsed into a record; any
    /// line that does not split into exactly five comma-separated
    /// fields fails the whole open with
    /// [`CredVaultError::DecryptionFailed`] — the format's only
    /// wrong-passphrase signal. Either the full map is populated or the
    /// open fails with no partial state.
    pub fn open(path: &Path, passphrase: &str) -> Result<Self> {
        if passphrase.is_empty() {
            return Err(CredVaultError::EmptyCipherKey);
        }

        let passphrase = Zeroizing::new(passphrase.as_bytes().to_vec());

        let categories = match format::read_ciphertext(path)? {
            None => BTreeMap::new(),
            Some(ciphertext) => {
                let plaintext = decrypt(&ciphertext, &passphrase)?;
                parse_records(&plaintext)?
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            passphrase,
            categories,
        })
    }

    // ------------------------------------------------------------------
    // Category operations
    // ------------------------------------------------------------------

    /// Create an empty category bucket. No-op when the category already
    /// exists; rejecting duplicate creation is the caller's job (check
    /// [`VaultStore::category_exists`] first).
    pub fn add_category(&mut self, name: &str) {
        self.categories.entry(name.to_string()).or_default();
    }

    /// Returns `true` if a bucket with this name exists, empty or not.
    pub fn category_exists(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Returns `true` if the category has no records.
    ///
    /// An absent category counts as empty; existence and emptiness are
    /// separate predicates.
    pub fn category_is_empty(&self, name: &str) -> bool {
        self.categories.get(name).map_or(true, Vec::is_empty)
    }

    /// Delete a category and every record in it, unconditionally.
    pub fn remove_category(&mut self, name: &str) {
        self.categories.remove(name);
    }

    /// All category names in lexicographic order.
    pub fn list_categories(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Append a record to its category's bucket, creating the bucket if
    /// needed. Display order within a category is insertion order.
    ///
    /// Name uniqueness within a category is not enforced here — callers
    /// check [`VaultStore::record_exists`] before inserting.
    pub fn add_record(&mut self, record: Record) {
        self.categories
            .entry(record.category().to_string())
            .or_default()
            .push(record);
    }

    /// Remove and return the record at `index` within `category`.
    ///
    /// Fails with [`CredVaultError::IndexOutOfRange`] when `index` is
    /// outside `[0, len)`; an absent category behaves as length zero.
    pub fn remove_record(&mut self, category: &str, index: usize) -> Result<Record> {
        match self.categories.get_mut(category) {
            Some(bucket) if index < bucket.len() => Ok(bucket.remove(index)),
            bucket => {
                let len = bucket.map_or(0, |b| b.len());
                Err(CredVaultError::IndexOutOfRange {
                    category: category.to_string(),
                    index,
                    len,
                })
            }
        }
    }

    /// Relocate `record` to `new_category`.
    ///
    /// Removes the matching record (by name + category identity) from
    /// its current bucket, rewrites its category, and re-inserts it. If
    /// the current bucket holds no matching record the removal is a
    /// no-op and the record is still inserted under the new category,
    /// so a caller passing a stale record can end up duplicating it.
    pub fn move_record(&mut self, new_category: &str, mut record: Record) -> Result<()> {
        if let Some(bucket) = self.categories.get_mut(record.category()) {
            if let Some(pos) = bucket.iter().position(|r| r == &record) {
                bucket.remove(pos);
            }
        }

        record.set_category(new_category)?;
        self.add_record(record);
        Ok(())
    }

    /// Returns `true` if any record anywhere in the store matches both
    /// `name` and `category`.
    pub fn record_exists(&self, name: &str, category: &str) -> bool {
        self.categories
            .values()
            .flatten()
            .any(|r| r.name() == name && r.category() == category)
    }

    /// Every record in the store: categories in key order, records in
    /// insertion order within each bucket.
    pub fn all_records(&self) -> Vec<&Record> {
        self.categories.values().flatten().collect()
    }

    /// Every record, ordered by `primary` then `secondary` field.
    ///
    /// The underlying sort is stable, so records tying on both fields
    /// keep their [`VaultStore::all_records`] order.
    pub fn sorted_records(&self, primary: SortField, secondary: SortField) -> Vec<&Record> {
        let mut records = self.all_records();
        records.sort_by(|a, b| Record::compare(a, b, primary, secondary));
        records
    }

    /// The records in `category`, in insertion order.
    ///
    /// Looking up an unknown category CREATES an empty bucket as a side
    /// effect — the category exists afterwards. That is intentional and
    /// part of the contract, which is why this takes `&mut self`.
    pub fn records_in_category(&mut self, category: &str) -> &[Record] {
        self.categories.entry(category.to_string()).or_default()
    }

    /// Mutable access to one record, addressed by category and index.
    ///
    /// This is the in-place edit channel: the bucket itself stays owned
    /// by the store. Fails with [`CredVaultError::IndexOutOfRange`] for
    /// an out-of-range index or an absent category.
    pub fn record_mut(&mut self, category: &str, index: usize) -> Result<&mut Record> {
        let len = self.categories.get(category).map_or(0, Vec::len);
        self.categories
            .get_mut(category)
            .and_then(|bucket| bucket.get_mut(index))
            .ok_or_else(|| CredVaultError::IndexOutOfRange {
                category: category.to_string(),
                index,
                len,
            })
    }

    /// Returns `true` when no bucket holds any record. Empty categories
    /// may still exist.
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize, encipher, and overwrite the vault file.
    ///
    /// Categories are written in key order and records in insertion
    /// order, one `storage_string` line each, no trailing newline; the
    /// ciphertext is followed by a fresh plaintext timestamp marker.
    pub fn persist(&self) -> Result<()> {
        let plaintext = self.serialize_records();
        let ciphertext = encrypt(plaintext.as_bytes(), &self.passphrase)?;
        format::write_ciphertext(&self.path, &ciphertext)
    }

    fn serialize_records(&self) -> String {
        let lines: Vec<String> = self
            .categories
            .values()
            .flatten()
            .map(Record::storage_string)
            .collect();
        lines.join("\n")
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse deciphered plaintext into the category map.
///
/// Garbage from a wrong key statistically fails either the UTF-8 check
/// or the exactly-five-fields-per-line check; both surface as
/// `DecryptionFailed`.
fn parse_records(plaintext: &[u8]) -> Result<BTreeMap<String, Vec<Record>>> {
    let text = std::str::from_utf8(plaintext).map_err(|_| CredVaultError::DecryptionFailed)?;

    let mut categories: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for line in text.split('\n').filter(|line| !line.is_empty()) {
        let parts: Vec<&str> = line.split(',').collect();
        let [category, name, secret, login, site] = parts.as_slice() else {
            return Err(CredVaultError::DecryptionFailed);
        };

        // Split output cannot contain either delimiter, so this cannot
        // fail validation.
        let record = Record::new(*category, *name, *secret, *login, *site)?;
        categories
            .entry(record.category().to_string())
            .or_default()
            .push(record);
    }

    Ok(categories)
}
