//! AddressLine value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// At least four characters of letters, digits, and whitespace.
static ADDRESS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s]{4,}$").expect("address pattern compiles"));

/// A type-safe wrapper for the free-text location fields of a contact:
/// street address, city, and state.
///
/// All three share the same format rule, so they share one value type; the
/// per-field constructors differ only in which error they report.
///
/// # Example
///
/// ```
/// use address_book::domain::AddressLine;
///
/// let city = AddressLine::city("Springfield").unwrap();
/// assert_eq!(city.as_str(), "Springfield");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressLine(String);

impl AddressLine {
    /// Create a street address, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the value does not match
    /// the format rules.
    pub fn address(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidAddress(value));
        }

        Ok(Self(value))
    }

    /// Create a city, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCity` if the value does not match
    /// the format rules.
    pub fn city(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidCity(value));
        }

        Ok(Self(value))
    }

    /// Create a state, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidState` if the value does not match
    /// the format rules.
    pub fn state(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !Self::is_valid(&value) {
            return Err(ValidationError::InvalidState(value));
        }

        Ok(Self(value))
    }

    /// Check a candidate value against the format rules.
    pub fn is_valid(value: &str) -> bool {
        ADDRESS_PATTERN.is_match(value)
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for AddressLine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Display support
impl fmt::Display for AddressLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_valid() {
        let address = AddressLine::address("123 Main St").unwrap();
        assert_eq!(address.as_str(), "123 Main St");
    }

    #[test]
    fn test_address_validates_format() {
        assert!(AddressLine::is_valid("123 Main St"));
        assert!(AddressLine::is_valid("Springfield"));
        assert!(AddressLine::is_valid("Ohio"));

        // Too short
        assert!(!AddressLine::is_valid("LA"));
        assert!(!AddressLine::is_valid(""));
        // Punctuation is not allowed
        assert!(!AddressLine::is_valid("42nd St."));
        assert!(!AddressLine::is_valid("Main-Street"));
    }

    #[test]
    fn test_constructors_report_their_own_field() {
        assert_eq!(
            AddressLine::address("ab"),
            Err(ValidationError::InvalidAddress("ab".to_string()))
        );
        assert_eq!(
            AddressLine::city("ab"),
            Err(ValidationError::InvalidCity("ab".to_string()))
        );
        assert_eq!(
            AddressLine::state("ab"),
            Err(ValidationError::InvalidState("ab".to_string()))
        );
    }

    #[test]
    fn test_address_display() {
        let city = AddressLine::city("Springfield").unwrap();
        assert_eq!(format!("{}", city), "Springfield");
    }
}
