//! Data models for the address book.

pub mod contact;

pub use contact::{Contact, ContactUpdate};
