//! Integration tests for locale-based country resolution.
//!
//! These tests exercise the bundled reference table through the public API,
//! covering exact matches, the truncation fallback chain, and the default
//! record contract.

use country_resolver::{CountryTable, best_match_for_locale};

/// Every record's own locale code must resolve back to that record.
#[test]
fn test_exact_match_is_reflexive() {
    let table = CountryTable::global();
    for record in table.all() {
        let found = table.best_match_for_locale(record.locale_code.as_str());
        assert_eq!(
            found, record,
            "locale '{}' should resolve to its own record",
            record.locale_code
        );
    }
}

/// Popular locales resolve to the expected countries.
#[test]
fn test_common_locales() {
    let cases = [
        ("en_US", "United States"),
        ("en_GB", "United Kingdom"),
        ("fr_FR", "France"),
        ("de_DE", "Germany"),
        ("ja_JP", "Japan"),
        ("pt_BR", "Brazil"),
        ("zh_CN", "China"),
        ("uk_UA", "Ukraine"),
        ("tr_TR", "Turkey"),
    ];

    for (locale, expected) in cases {
        assert_eq!(
            best_match_for_locale(locale).country_name,
            expected,
            "locale '{}' should resolve to {}",
            locale,
            expected
        );
    }
}

/// Matching ignores case and separator spelling.
#[test]
fn test_case_and_separator_insensitivity() {
    let variants = ["en_GB", "EN_GB", "en_gb", "en-GB", "En-Gb"];

    let expected = best_match_for_locale("en_GB");
    for variant in variants {
        assert_eq!(
            best_match_for_locale(variant),
            expected,
            "variant '{}' should resolve like 'en_GB'",
            variant
        );
    }
}

/// POSIX-style charset suffixes and modifiers are ignored.
#[test]
fn test_posix_spellings() {
    assert_eq!(
        best_match_for_locale("de_DE.UTF-8").country_name,
        "Germany"
    );
    assert_eq!(best_match_for_locale("sr_RS@latin").country_name, "Serbia");
}

/// A locale with an unknown region falls back to the first record of the
/// same language in table order.
#[test]
fn test_region_fallback() {
    let cases = [
        // No fr_LU record; "fr" prefix-matches fr_FR first.
        ("fr_LU", "France"),
        // No de_LI record; "de" prefix-matches de_DE first.
        ("de_LI", "Germany"),
        // No es_UY record; "es" prefix-matches es_ES first.
        ("es_UY", "Spain"),
        // Extra subtags are stripped one at a time: en_GB_oxendict hits en_GB.
        ("en_GB_oxendict", "United Kingdom"),
    ];

    for (locale, expected) in cases {
        assert_eq!(
            best_match_for_locale(locale).country_name,
            expected,
            "locale '{}' should fall back to {}",
            locale,
            expected
        );
    }
}

/// A bare language subtag matches the first record carrying that language.
#[test]
fn test_bare_language() {
    assert_eq!(best_match_for_locale("en").country_name, "United States");
    assert_eq!(best_match_for_locale("fr").country_name, "France");
    assert_eq!(best_match_for_locale("es").country_name, "Spain");
    assert_eq!(best_match_for_locale("pt").country_name, "Portugal");
}

/// Unrecognized and malformed input resolves to the default record, and
/// does so deterministically.
#[test]
fn test_unmatched_input_returns_default() {
    let table = CountryTable::global();
    let default = table.default_record();

    let inputs = ["xx_YY", "zz", "", "   ", "12345", "não-um-locale"];
    for input in inputs {
        assert_eq!(
            table.best_match_for_locale(input),
            default,
            "input '{}' should resolve to the default record",
            input
        );
        // Repeated calls give the same answer.
        assert_eq!(table.best_match_for_locale(input), default);
    }
}

/// The current-locale convenience agrees with an explicit lookup of the
/// system locale.
#[test]
fn test_current_locale_consistency() {
    let table = CountryTable::global();
    let expected = match sys_locale_value() {
        Some(locale) => table.best_match_for_locale(&locale),
        None => table.default_record(),
    };
    assert_eq!(table.best_match_for_current_locale(), expected);
}

fn sys_locale_value() -> Option<String> {
    // Same source the library reads; keeps the test meaningful on any host.
    sys_locale::get_locale()
}
