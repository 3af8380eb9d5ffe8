//! ZipCode value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Exactly 5 or 6 ASCII digits.
static ZIP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{5,6}$").expect("zip pattern compiles"));

/// A type-safe wrapper for postal codes.
///
/// This ensures that ZIP codes are validated at construction time. A valid
/// ZIP code is a string of exactly 5 or 6 digits; leading zeros are
/// preserved, so the value is stored as text rather than a number.
///
/// # Example
///
/// ```
/// use address_book::domain::ZipCode;
///
/// let zip = ZipCode::new("62704").unwrap();
/// assert_eq!(zip.as_str(), "62704");
/// assert_eq!(zip.numeric(), 62704);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` if the value is not 5 or 6
    /// digits.
    pub fn new(zip: impl Into<String>) -> Result<Self, ValidationError> {
        let zip = zip.into();

        if !Self::is_valid(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }

        Ok(Self(zip))
    }

    /// Check a candidate value against the format rules.
    pub fn is_valid(zip: &str) -> bool {
        ZIP_PATTERN.is_match(zip)
    }

    /// Get the ZIP code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the numeric value, used for numeric ordering.
    pub fn numeric(&self) -> u32 {
        // SAFETY: Constructor validates the value is at most 6 digits
        self.0.parse().expect("zip validated to be digits")
    }
}

// Serde support - serialize as string
impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Display support
impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_valid() {
        let zip = ZipCode::new("62704").unwrap();
        assert_eq!(zip.as_str(), "62704");
    }

    #[test]
    fn test_zip_validates_format() {
        assert!(ZipCode::is_valid("12345"));
        assert!(ZipCode::is_valid("123456"));
        assert!(ZipCode::is_valid("00501"));

        assert!(!ZipCode::is_valid("1234"));
        assert!(!ZipCode::is_valid("1234567"));
        assert!(!ZipCode::is_valid("12a45"));
        assert!(!ZipCode::is_valid("12 45"));
        assert!(!ZipCode::is_valid(""));
    }

    #[test]
    fn test_zip_numeric_preserves_leading_zeros_in_text() {
        let zip = ZipCode::new("00501").unwrap();
        assert_eq!(zip.numeric(), 501);
        assert_eq!(zip.as_str(), "00501");
    }

    #[test]
    fn test_zip_rejected_value_is_reported() {
        assert_eq!(
            ZipCode::new("abc"),
            Err(ValidationError::InvalidZip("abc".to_string()))
        );
    }
}
