//! Address Book - an interactive command-line contact manager with validated records.
//!
//! This library provides the validation and collection-management core of the
//! address book together with the terminal menu that drives it. Contacts are
//! built from construction-validated value objects, so an invalid record
//! cannot exist; the in-memory store handles lookup, mutation, filtering, and
//! ordering over them.
//!
//! # Architecture
//!
//! - **domain**: Value objects for the contact fields, validated at construction
//! - **models**: The contact record and its partial-update type
//! - **store**: The in-memory ordered contact collection
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **menu**: The interactive prompt and dispatch loop

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod menu;
pub mod models;
pub mod store;

pub use config::Config;
pub use domain::{AddressLine, EmailAddress, PersonName, PhoneNumber, ValidationError, ZipCode};
pub use error::{ConfigError, StoreError};
pub use menu::Menu;
pub use models::{Contact, ContactUpdate};
pub use store::{ContactStore, FilterField, SortField};
