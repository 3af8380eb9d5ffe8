//! In-memory contact store.
//!
//! An ordered, owned collection of validated contacts. Entries keep their
//! insertion order until a sort is requested; a sort reorders the sequence in
//! place and the order persists until the next sort. A later insert appends
//! at the end without re-sorting, so a sort key only holds until the next
//! addition.

use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactUpdate};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Field a store can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl FromStr for SortField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "firstname" | "first_name" | "first name" => Ok(Self::FirstName),
            "last" | "lastname" | "last_name" | "last name" => Ok(Self::LastName),
            "address" => Ok(Self::Address),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" => Ok(Self::Zip),
            "phone" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            other => Err(StoreError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Email => "email",
        };
        write!(f, "{}", name)
    }
}

/// Field a store can be filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    City,
    State,
}

impl FromStr for FilterField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            other => Err(StoreError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::State => write!(f, "state"),
        }
    }
}

/// The in-memory collection of validated contacts.
///
/// The store owns its contacts exclusively; entries are read through
/// [`iter`](Self::iter)/[`find`](Self::find) and change only through store
/// operations. Created empty at program start, discarded at exit.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact to the end of the sequence.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Duplicate` if a contact with the same name pair
    /// already exists; the store is left unchanged.
    pub fn add(&mut self, contact: Contact) -> StoreResult<()> {
        if self
            .contacts
            .iter()
            .any(|c| c.matches_key(contact.first_name(), contact.last_name()))
        {
            return Err(StoreError::Duplicate {
                first_name: contact.first_name().to_string(),
                last_name: contact.last_name().to_string(),
            });
        }

        debug!(name = %contact.full_name(), total = self.contacts.len() + 1, "contact added");
        self.contacts.push(contact);
        Ok(())
    }

    /// Look up a contact by its name pair.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact matches.
    pub fn find(&self, first_name: &str, last_name: &str) -> StoreResult<&Contact> {
        self.contacts
            .iter()
            .find(|c| c.matches_key(first_name, last_name))
            .ok_or_else(|| StoreError::NotFound(format!("{} {}", first_name, last_name)))
    }

    /// Remove a contact by its name pair, returning the removed entry.
    ///
    /// Subsequent contacts shift down to fill the gap.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact matches.
    pub fn delete(&mut self, first_name: &str, last_name: &str) -> StoreResult<Contact> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.matches_key(first_name, last_name))
            .ok_or_else(|| StoreError::NotFound(format!("{} {}", first_name, last_name)))?;

        let removed = self.contacts.remove(position);
        debug!(name = %removed.full_name(), total = self.contacts.len(), "contact deleted");
        Ok(removed)
    }

    /// Replace fields of the contact matching the name pair.
    ///
    /// Provided values are validated before any field is written; a failed
    /// edit leaves the contact exactly as it was. The name pair itself is not
    /// editable.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no contact matches, or the
    /// validation error of the first replacement value that fails its rule.
    pub fn edit(
        &mut self,
        first_name: &str,
        last_name: &str,
        update: &ContactUpdate,
    ) -> StoreResult<&Contact> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.matches_key(first_name, last_name))
            .ok_or_else(|| StoreError::NotFound(format!("{} {}", first_name, last_name)))?;

        self.contacts[position].apply_update(update)?;
        debug!(name = %self.contacts[position].full_name(), "contact edited");
        Ok(&self.contacts[position])
    }

    /// Number of contacts currently stored.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the store holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over the contacts in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    /// Contacts whose given field equals `value`, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if nothing matches.
    pub fn filter_by(&self, field: FilterField, value: &str) -> StoreResult<Vec<&Contact>> {
        let matches: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| {
                let candidate = match field {
                    FilterField::City => c.city(),
                    FilterField::State => c.state(),
                };
                candidate.eq_ignore_ascii_case(value)
            })
            .collect();

        if matches.is_empty() {
            return Err(StoreError::NotFound(format!("{} = {}", field, value)));
        }

        Ok(matches)
    }

    /// Reorder the contacts in place, ascending on the given field.
    ///
    /// ZIP codes compare numerically; every other field compares
    /// lexicographically ignoring ASCII case. The sort is stable, so entries
    /// that compare equal keep their prior relative order.
    pub fn sort_by(&mut self, field: SortField) {
        match field {
            SortField::Zip => self.contacts.sort_by_key(Contact::zip_numeric),
            _ => self
                .contacts
                .sort_by_key(|c| Self::sort_key(c, field).to_ascii_lowercase()),
        }
        debug!(field = %field, total = self.contacts.len(), "contacts sorted");
    }

    fn sort_key(contact: &Contact, field: SortField) -> &str {
        match field {
            SortField::FirstName => contact.first_name(),
            SortField::LastName => contact.last_name(),
            SortField::Address => contact.address(),
            SortField::City => contact.city(),
            SortField::State => contact.state(),
            // Zip is handled numerically before reaching here
            SortField::Zip => contact.zip(),
            SortField::Phone => contact.phone(),
            SortField::Email => contact.email(),
        }
    }
}
