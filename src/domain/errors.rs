//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
///
/// One variant per contact field, each carrying the rejected input so the
/// caller can report exactly what was refused and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided first name is invalid.
    InvalidFirstName(String),

    /// The provided last name is invalid.
    InvalidLastName(String),

    /// The provided street address is invalid.
    InvalidAddress(String),

    /// The provided city is invalid.
    InvalidCity(String),

    /// The provided state is invalid.
    InvalidState(String),

    /// The provided ZIP code is invalid.
    InvalidZip(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFirstName(name) => write!(
                f,
                "Invalid first name: {} (must start with a capital letter and contain at least 3 letters)",
                name
            ),
            Self::InvalidLastName(name) => write!(
                f,
                "Invalid last name: {} (must start with a capital letter and contain at least 3 letters)",
                name
            ),
            Self::InvalidAddress(value) => write!(
                f,
                "Invalid address: {} (must be at least 4 characters of letters, digits or spaces)",
                value
            ),
            Self::InvalidCity(value) => write!(
                f,
                "Invalid city: {} (must be at least 4 characters of letters, digits or spaces)",
                value
            ),
            Self::InvalidState(value) => write!(
                f,
                "Invalid state: {} (must be at least 4 characters of letters, digits or spaces)",
                value
            ),
            Self::InvalidZip(zip) => {
                write!(f, "Invalid ZIP code: {} (must be a 5 or 6 digit number)", zip)
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (must be exactly 10 digits)", phone)
            }
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email address: {} (format should be like name@domain.com)",
                email
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
