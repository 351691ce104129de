//! # Country Resolver
//!
//! A small country resolution library: given a locale identifier or a
//! partially-typed phone-number prefix, pick the single best-matching
//! country from a fixed reference table.
//!
//! The table is bundled with the crate, loaded once, and immutable for the
//! process lifetime. Lookups are total: they always return a record, falling
//! back to a documented default (the first record in table order, the United
//! States in the bundled table) when nothing matches. UI callers therefore
//! never handle a "no answer" case.
//!
//! ## Quick Start
//!
//! ```rust
//! use country_resolver::{all_country_codes, best_guess_prefix_for_tail, best_match_for_locale};
//!
//! // Populate a country picker.
//! for country in all_country_codes() {
//!     println!("{country}");
//! }
//!
//! // Pre-select the user's country from their locale.
//! let country = best_match_for_locale("de_AT");
//! assert_eq!(country.country_name, "Austria");
//!
//! // Auto-select as the user types a phone number.
//! let country = best_guess_prefix_for_tail("+4479");
//! assert_eq!(country.country_name, "United Kingdom");
//! ```
//!
//! ## Matching Rules
//!
//! **Locale**: case-insensitive exact match against record locale codes,
//! then progressively shorter subtag-boundary prefix matches (the trailing
//! subtag is stripped one at a time, down to the primary language), then the
//! default record. `-`/`_` and `.charset`/`@modifier` differences are
//! ignored, so `en-US`, `EN_US` and `en_US.UTF-8` all resolve identically.
//!
//! **Dial prefix**: the record whose dial code is the *longest* prefix of
//! the typed digits wins. Dialing codes are themselves prefix-structured, so
//! this is the tie-break that makes `+1242...` resolve to the Bahamas rather
//! than the United States. Equal-length ties go to table order.
//!
//! ## Custom Tables
//!
//! The bundled table covers common locales. Callers with their own
//! reference data can build a [`CountryTable`] from JSON and use the same
//! lookups on it:
//!
//! ```rust
//! use country_resolver::CountryTable;
//!
//! let table = CountryTable::from_json(
//!     r#"[{ "id": 1, "locale_code": "en_US", "dial_code": "1", "name": "United States" }]"#,
//! )?;
//! assert_eq!(table.best_match_for_locale("en").id, 1);
//! # Ok::<(), country_resolver::TableError>(())
//! ```
//!
//! Table construction is the only fallible surface of the crate: an empty
//! table, a duplicate record id, or a duplicate locale code is rejected at
//! load time so the lookups can keep their never-fail contract.
//!
//! ## Features
//!
//! - `tracing` (default): instrument lookup operations with [`tracing`]
//!   spans and emit debug events on fallback decisions.

mod errors;
mod resolver;
mod table;
mod types;

pub use errors::TableError;
pub use resolver::{
    all_country_codes, best_guess_prefix_for_tail, best_match_for_current_locale,
    best_match_for_locale,
};
pub use table::CountryTable;
pub use types::{CountryRecord, DialCode, DialCodeError, LocaleTag, LocaleTagError};
