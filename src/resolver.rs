//! Best-guess lookup operations over the country table.
//!
//! All lookups are total: they return a record for every input, falling back
//! to [`CountryTable::default_record`] when nothing matches. Malformed input
//! is not an error here, it simply resolves to the default. This keeps UI
//! callers free of "no answer" handling.

use crate::table::CountryTable;
use crate::types::{CountryRecord, normalize_locale};

#[cfg(feature = "tracing")]
use tracing::debug;

impl CountryTable {
    /// Find the best record for a locale identifier.
    ///
    /// The query is normalized the same way record locale codes are (case,
    /// separators, charset suffix), then matched in decreasing specificity:
    /// at each truncation level the query is compared for exact equality
    /// first, then as a subtag-boundary prefix of record locale codes, so a
    /// bare `en` still finds `en_US`. If neither matches, the trailing
    /// subtag is stripped and the search repeats, down to the primary
    /// language subtag. A query that never matches resolves to
    /// [`default_record`](Self::default_record).
    ///
    /// Ties at any level go to the first record in table order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use country_resolver::CountryTable;
    ///
    /// let table = CountryTable::global();
    /// assert_eq!(table.best_match_for_locale("en_GB").country_name, "United Kingdom");
    /// assert_eq!(table.best_match_for_locale("de-CH").country_name, "Switzerland");
    /// // Unknown region falls back through "fr" to the first French record.
    /// assert_eq!(table.best_match_for_locale("fr_LU").country_name, "France");
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "CountryTable::best_match_for_locale",
            skip_all,
            fields(locale = %locale)
        )
    )]
    pub fn best_match_for_locale(&self, locale: &str) -> &CountryRecord {
        let normalized = normalize_locale(locale);
        let mut candidate = normalized.as_str();

        while !candidate.is_empty() {
            if let Some(record) = self
                .all()
                .iter()
                .find(|r| r.locale_code.normalized() == candidate)
            {
                return record;
            }

            // Subtag-boundary prefix: "en" matches "en_us" but not "eng_..".
            if let Some(record) = self.all().iter().find(|r| {
                r.locale_code
                    .normalized()
                    .strip_prefix(candidate)
                    .is_some_and(|rest| rest.starts_with('_'))
            }) {
                #[cfg(feature = "tracing")]
                debug!(candidate, matched = %record.locale_code, "locale matched by prefix");
                return record;
            }

            match candidate.rfind('_') {
                Some(idx) => candidate = &candidate[..idx],
                None => break,
            }
        }

        #[cfg(feature = "tracing")]
        debug!(locale, "no locale match, using default record");
        self.default_record()
    }

    /// Find the record whose dial code is the longest prefix of `tail`.
    ///
    /// `tail` is whatever the user has typed into a phone field so far:
    /// optional leading '+', then digits. Everything from the first
    /// non-digit onward is ignored. Dialing codes are prefix-structured
    /// ("1" is a prefix of "1242"), so among all records whose dial code is
    /// a prefix of the typed digits the longest wins; "12425551212" selects
    /// the Bahamas, not the United States. Records sharing the identical
    /// winning code resolve to the first in table order. An empty or
    /// digit-free `tail` resolves to [`default_record`](Self::default_record).
    ///
    /// # Example
    ///
    /// ```rust
    /// use country_resolver::CountryTable;
    ///
    /// let table = CountryTable::global();
    /// assert_eq!(table.best_guess_prefix_for_tail("+447911123456").country_name, "United Kingdom");
    /// assert_eq!(table.best_guess_prefix_for_tail("12425551212").country_name, "Bahamas");
    /// assert_eq!(table.best_guess_prefix_for_tail("").country_name, "United States");
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "CountryTable::best_guess_prefix_for_tail",
            skip_all,
            fields(tail = %tail)
        )
    )]
    pub fn best_guess_prefix_for_tail(&self, tail: &str) -> &CountryRecord {
        let trimmed = tail.trim();
        let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let digits = &trimmed[..end];

        let mut best: Option<&CountryRecord> = None;
        for record in self.all() {
            if digits.starts_with(record.dial_code.as_str())
                // Strict comparison keeps the first record on equal-length ties.
                && best.is_none_or(|b| record.dial_code.len() > b.dial_code.len())
            {
                best = Some(record);
            }
        }

        match best {
            Some(record) => record,
            None => {
                #[cfg(feature = "tracing")]
                debug!(tail, "no dial code matches, using default record");
                self.default_record()
            }
        }
    }

    /// Find the best record for the system's current locale.
    ///
    /// Equivalent to [`best_match_for_locale`](Self::best_match_for_locale)
    /// with the locale reported by the host platform. If the platform
    /// reports no locale, resolves to the default record.
    pub fn best_match_for_current_locale(&self) -> &CountryRecord {
        match sys_locale::get_locale() {
            Some(locale) => self.best_match_for_locale(&locale),
            None => self.default_record(),
        }
    }
}

// Convenience functions over the bundled table, for callers that do not
// carry a table of their own (the common case in UI glue).

/// All bundled country records, in table order.
pub fn all_country_codes() -> &'static [CountryRecord] {
    CountryTable::global().all()
}

/// [`CountryTable::best_match_for_locale`] on the bundled table.
pub fn best_match_for_locale(locale: &str) -> &'static CountryRecord {
    CountryTable::global().best_match_for_locale(locale)
}

/// [`CountryTable::best_guess_prefix_for_tail`] on the bundled table.
pub fn best_guess_prefix_for_tail(tail: &str) -> &'static CountryRecord {
    CountryTable::global().best_guess_prefix_for_tail(tail)
}

/// [`CountryTable::best_match_for_current_locale`] on the bundled table.
pub fn best_match_for_current_locale() -> &'static CountryRecord {
    CountryTable::global().best_match_for_current_locale()
}
