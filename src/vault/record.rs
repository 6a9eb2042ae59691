//! Record type stored inside a vault, plus its field-selector ordering.
//!
//! A record is one credential: category, name, secret, and optional
//! login and site (empty string = absent). The storage format joins the
//! five fields with `,` and records with `\n` and has no escaping, so
//! construction and mutation reject field values containing either
//! delimiter.

use std::cmp::Ordering;

use crate::errors::{CredVaultError, Result};

/// A single credential record.
///
/// Identity is `name` + `category`: two records compare equal when both
/// match, regardless of secret, login, and site.
#[derive(Debug, Clone)]
pub struct Record {
    category: String,
    name: String,
    secret: String,
    login: String,
    site: String,
}

/// Field selector for [`Record::compare`].
///
/// Ties are broken by a second selector, never by a closure, so sort
/// order is fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Category,
    Login,
    Site,
}

impl SortField {
    /// The selected field of `record`.
    fn key<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            SortField::Name => &record.name,
            SortField::Category => &record.category,
            SortField::Login => &record.login,
            SortField::Site => &record.site,
        }
    }
}

impl Record {
    /// Build a record, rejecting any field containing `,` or a newline.
    ///
    /// `login` and `site` may be empty, meaning absent.
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        secret: impl Into<String>,
        login: impl Into<String>,
        site: impl Into<String>,
    ) -> Result<Self> {
        let record = Self {
            category: category.into(),
            name: name.into(),
            secret: secret.into(),
            login: login.into(),
            site: site.into(),
        };
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> Result<()> {
        validate_field("category", &self.category)?;
        validate_field("name", &self.name)?;
        validate_field("secret", &self.secret)?;
        validate_field("login", &self.login)?;
        validate_field("site", &self.site)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Change the category label on the record itself.
    ///
    /// This does NOT relocate the record between buckets — that is
    /// [`VaultStore::move_record`](crate::vault::VaultStore::move_record)'s
    /// job.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<()> {
        let category = category.into();
        validate_field("category", &category)?;
        self.category = category;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_field("name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) -> Result<()> {
        let secret = secret.into();
        validate_field("secret", &secret)?;
        self.secret = secret;
        Ok(())
    }

    pub fn set_login(&mut self, login: impl Into<String>) -> Result<()> {
        let login = login.into();
        validate_field("login", &login)?;
        self.login = login;
        Ok(())
    }

    pub fn set_site(&mut self, site: impl Into<String>) -> Result<()> {
        let site = site.into();
        validate_field("site", &site)?;
        self.site = site;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// The on-disk line for this record: the five fields joined by `,`
    /// in fixed order, no escaping.
    pub fn storage_string(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.category, self.name, self.secret, self.login, self.site
        )
    }

    /// Human-readable rendering. Login and site segments are omitted
    /// entirely (not shown as empty) when absent.
    pub fn display_string(&self) -> String {
        let mut out = format!(
            "Category: {}; Name: {}; Password: {}",
            self.category, self.name, self.secret
        );
        if !self.login.is_empty() {
            out.push_str("; Login: ");
            out.push_str(&self.login);
        }
        if !self.site.is_empty() {
            out.push_str("; Website: ");
            out.push_str(&self.site);
        }
        out
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Order two records by `primary`, falling back to `secondary` on a
    /// tie. If both fields tie the result is `Ordering::Equal`, which a
    /// stable sort leaves in place.
    pub fn compare(a: &Record, b: &Record, primary: SortField, secondary: SortField) -> Ordering {
        primary
            .key(a)
            .cmp(primary.key(b))
            .then_with(|| secondary.key(a).cmp(secondary.key(b)))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.category == other.category
    }
}

impl Eq for Record {}

fn validate_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains(',') || value.contains('\n') {
        return Err(CredVaultError::InvalidFieldValue(field));
    }
    Ok(())
}
