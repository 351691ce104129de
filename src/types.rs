//! Core types for country resolution.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
}

/// International dialing prefix (e.g., "1" for the United States, "44" for
/// the United Kingdom, "1242" for the Bahamas).
///
/// Dial codes are stored without the leading '+' sign. Because dialing codes
/// are prefix-structured, one country's code can be a prefix of another's;
/// resolution always prefers the longest matching code.
///
/// # Example
///
/// ```rust
/// use country_resolver::DialCode;
///
/// let dc = DialCode::new("+44").unwrap();
/// assert_eq!(dc.to_string(), "44");
///
/// let dc = DialCode::new("1").unwrap();
/// assert_eq!(dc.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// The input can include a leading '+' which will be stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+');
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        Ok(Self(n.to_string()))
    }

    /// Get the dial code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the code. Longer codes are more specific.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Dial codes are never empty; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

// =============================================================================
// LocaleTag
// =============================================================================

/// Error when parsing a locale tag.
#[derive(Debug, Clone, Error)]
pub enum LocaleTagError {
    /// Locale tag is empty after normalization.
    #[error("locale tag cannot be empty")]
    Empty,
}

/// A language/region tag such as `en_US` or `fr-CA`.
///
/// The original spelling is preserved for display; comparisons use a
/// normalized form: trimmed, ASCII-lowercased, `-` folded to `_`, and any
/// `.charset` or `@modifier` suffix dropped. Both BCP 47 (`en-US`) and POSIX
/// (`en_US.UTF-8`) spellings therefore compare equal to `en_US`.
///
/// # Example
///
/// ```rust
/// use country_resolver::LocaleTag;
///
/// let a = LocaleTag::new("en-US").unwrap();
/// let b = LocaleTag::new("EN_us.UTF-8").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "en-US");
/// assert_eq!(a.normalized(), "en_us");
/// ```
#[derive(Debug, Clone)]
pub struct LocaleTag {
    display: String,
    normalized: String,
}

/// Normalize a locale identifier for comparison.
pub(crate) fn normalize_locale(s: &str) -> String {
    let s = s.trim();
    let s = s.split(['.', '@']).next().unwrap_or(s);
    s.to_ascii_lowercase().replace('-', "_")
}

impl LocaleTag {
    /// Create a new LocaleTag from a string.
    pub fn new(s: impl Into<String>) -> Result<Self, LocaleTagError> {
        let display = s.into();
        let normalized = normalize_locale(&display);
        if normalized.is_empty() {
            return Err(LocaleTagError::Empty);
        }
        Ok(Self { display, normalized })
    }

    /// Get the tag as originally spelled.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Get the normalized comparison form.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The primary language subtag of the normalized form
    /// (e.g. "en" for "en_us").
    pub fn language(&self) -> &str {
        self.normalized.split('_').next().unwrap_or(&self.normalized)
    }
}

impl PartialEq for LocaleTag {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for LocaleTag {}

impl Hash for LocaleTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for LocaleTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

impl<'de> Deserialize<'de> for LocaleTag {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        LocaleTag::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for LocaleTag {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.display)
    }
}

// =============================================================================
// CountryRecord
// =============================================================================

/// One entry of the country reference table.
///
/// Records are immutable once the table is loaded. `id` and `locale_code`
/// are unique within a table; `dial_code` may be shared by several records
/// (for example the North American Numbering Plan countries all use "1").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Table-unique identifier.
    pub id: u32,
    /// Language/region tag associated with the country, e.g. `en_US`.
    pub locale_code: LocaleTag,
    /// International dialing prefix digits.
    pub dial_code: DialCode,
    /// Human-readable display name.
    #[serde(rename = "name")]
    pub country_name: String,
}

impl Display for CountryRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{})", self.country_name, self.dial_code)
    }
}
