//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use address_book::Contact;

/// A fully valid contact with the given names; the other fields take
/// sensible defaults.
pub fn sample_contact(first_name: &str, last_name: &str) -> Contact {
    Contact::new(
        first_name,
        last_name,
        "123 Main St",
        "Springfield",
        "Illinois",
        "62704",
        "5551234567",
        "someone@example.com",
    )
    .expect("fixture contact is valid")
}

/// The canonical John Smith entry.
pub fn john_smith() -> Contact {
    Contact::new(
        "John",
        "Smith",
        "123 Main St",
        "Springfield",
        "Illinois",
        "62704",
        "5551234567",
        "john@example.com",
    )
    .expect("fixture contact is valid")
}
