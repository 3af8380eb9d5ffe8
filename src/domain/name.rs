//! PersonName value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// Capital first letter, at least three characters, letters only.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z]{2,}$").expect("name pattern compiles"));

/// A type-safe wrapper for a person's first or last name.
///
/// This ensures that names are validated at construction time. A valid name
/// starts with a capital letter and contains at least three letters in total,
/// with no digits, spaces, or punctuation.
///
/// # Example
///
/// ```
/// use address_book::domain::PersonName;
///
/// let name = PersonName::first("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a first name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFirstName` if the name does not match
    /// the format rules.
    pub fn first(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidFirstName(name));
        }

        Ok(Self(name))
    }

    /// Create a last name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLastName` if the name does not match
    /// the format rules.
    pub fn last(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidLastName(name));
        }

        Ok(Self(name))
    }

    /// Check a candidate name against the format rules.
    pub fn is_valid(name: &str) -> bool {
        NAME_PATTERN.is_match(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Display support
impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
