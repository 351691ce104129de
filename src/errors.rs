//! Error types for country table loading.
//!
//! Lookup operations never fail; every error in this crate is a table-load
//! error. A table that cannot be loaded or fails validation is unusable,
//! because the resolver's contract is to always return a record.

use thiserror::Error;

/// Error when loading or validating a country reference table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table source is not valid JSON or has the wrong shape.
    #[error("country table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The table contains no records. An empty table cannot satisfy the
    /// resolver's never-null contract.
    #[error("country table is empty")]
    Empty,

    /// Two records share the same `id`.
    #[error("duplicate record id {id} in country table")]
    DuplicateId {
        /// The offending identifier.
        id: u32,
    },

    /// Two records share the same locale code (compared case-insensitively).
    #[error("duplicate locale code '{locale}' in country table")]
    DuplicateLocale {
        /// The offending locale, in normalized form.
        locale: String,
    },
}
