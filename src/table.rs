//! The country reference table: loading, validation, and the process-wide
//! instance.
//!
//! The table is reference data, not transactional state. It is constructed
//! once, validated, and never mutated afterwards, which makes it safe to
//! share across threads without locking.

use crate::errors::TableError;
use crate::types::CountryRecord;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Bundled reference table, embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../assets/countries.json");

/// Process-wide table built from the bundled data.
///
/// The bundled asset is validated in CI by the test suite, so a failure here
/// means a corrupted build and is treated as fatal.
static GLOBAL_TABLE: Lazy<CountryTable> = Lazy::new(|| {
    CountryTable::from_json(COUNTRIES_JSON).expect("bundled countries.json is invalid")
});

/// An immutable, ordered table of [`CountryRecord`]s.
///
/// Record order is the definition order of the source data and is stable
/// across calls; consumers may rely on it for display. The first record
/// doubles as the default returned when a lookup matches nothing.
#[derive(Debug, Clone)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
}

impl CountryTable {
    /// Parse and validate a table from a JSON array of records.
    ///
    /// Validation enforces the invariants the resolver depends on: the table
    /// is non-empty, no two records share an `id`, and no two records share
    /// a locale code (compared case-insensitively).
    ///
    /// # Example
    ///
    /// ```rust
    /// use country_resolver::CountryTable;
    ///
    /// let table = CountryTable::from_json(
    ///     r#"[
    ///         { "id": 1, "locale_code": "en_US", "dial_code": "1", "name": "United States" },
    ///         { "id": 2, "locale_code": "en_GB", "dial_code": "44", "name": "United Kingdom" }
    ///     ]"#,
    /// )?;
    /// assert_eq!(table.all().len(), 2);
    /// # Ok::<(), country_resolver::TableError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build a table from already-constructed records, applying the same
    /// validation as [`from_json`](Self::from_json).
    pub fn from_records(records: Vec<CountryRecord>) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::Empty);
        }

        let mut ids = HashSet::with_capacity(records.len());
        let mut locales = HashSet::with_capacity(records.len());
        for record in &records {
            if !ids.insert(record.id) {
                return Err(TableError::DuplicateId { id: record.id });
            }
            if !locales.insert(record.locale_code.normalized().to_string()) {
                return Err(TableError::DuplicateLocale {
                    locale: record.locale_code.normalized().to_string(),
                });
            }
        }

        Ok(Self { records })
    }

    /// The table bundled with the crate.
    ///
    /// Loaded lazily on first access and shared for the process lifetime.
    pub fn global() -> &'static CountryTable {
        &GLOBAL_TABLE
    }

    /// All records, in table-definition order.
    pub fn all(&self) -> &[CountryRecord] {
        &self.records
    }

    /// The documented default record: the first record in table order.
    ///
    /// Both lookup operations fall back to this record when nothing matches,
    /// so callers never have to handle an absent result. The bundled table
    /// puts the United States (`en_US`) first.
    pub fn default_record(&self) -> &CountryRecord {
        // from_records rejects empty tables
        &self.records[0]
    }
}
