//! Contact record assembled from validated field values.

use crate::domain::{
    AddressLine, EmailAddress, PersonName, PhoneNumber, ValidationError, ZipCode,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single entry in the address book.
///
/// Every field is a construction-validated value object, so a `Contact` can
/// only exist in a valid state. The `(first_name, last_name)` pair is the
/// contact's identity: it distinguishes entries within a store and is fixed
/// for the life of the contact. The remaining fields change only through
/// [`ContactStore::edit`](crate::store::ContactStore::edit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    address: AddressLine,
    city: AddressLine,
    state: AddressLine,
    zip: ZipCode,
    phone: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Build a contact from raw field values.
    ///
    /// Fields are validated in prompt order (first name, last name, address,
    /// city, state, ZIP, phone, email) and the first failure is returned;
    /// later fields are not examined.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first field that fails its
    /// format rule.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::first(first_name)?,
            last_name: PersonName::last(last_name)?,
            address: AddressLine::address(address)?,
            city: AddressLine::city(city)?,
            state: AddressLine::state(state)?,
            zip: ZipCode::new(zip)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn zip(&self) -> &str {
        self.zip.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Numeric ZIP value, used for numeric ordering.
    pub fn zip_numeric(&self) -> u32 {
        self.zip.numeric()
    }

    /// Full name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this contact's identity matches the given name pair.
    ///
    /// Comparison is exact: names that differ only in case are distinct
    /// identities.
    pub fn matches_key(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name.as_str() == first_name && self.last_name.as_str() == last_name
    }

    /// Apply a validated set of field replacements.
    ///
    /// All provided values are validated before any field is written, so a
    /// failed update leaves the contact untouched.
    pub(crate) fn apply_update(&mut self, update: &ContactUpdate) -> Result<(), ValidationError> {
        let address = update.address().map(AddressLine::address).transpose()?;
        let city = update.city().map(AddressLine::city).transpose()?;
        let state = update.state().map(AddressLine::state).transpose()?;
        let zip = update.zip().map(ZipCode::new).transpose()?;
        let phone = update.phone().map(PhoneNumber::new).transpose()?;
        let email = update.email().map(EmailAddress::new).transpose()?;

        if let Some(address) = address {
            self.address = address;
        }
        if let Some(city) = city {
            self.city = city;
        }
        if let Some(state) = state {
            self.state = state;
        }
        if let Some(zip) = zip {
            self.zip = zip;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(email) = email {
            self.email = email;
        }

        Ok(())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {} - {}, Phone: {}, Email: {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

/// Raw field values as they arrive off the wire; validated into a `Contact`
/// during deserialization.
#[derive(Deserialize)]
struct RawContact {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    phone: String,
    email: String,
}

// Serde support - deserialize through full field validation, so an invalid
// contact cannot enter the system from serialized data either.
impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawContact::deserialize(deserializer)?;
        Contact::new(
            raw.first_name,
            raw.last_name,
            raw.address,
            raw.city,
            raw.state,
            raw.zip,
            raw.phone,
            raw.email,
        )
        .map_err(serde::de::Error::custom)
    }
}

/// A partial set of replacement values for a contact's editable fields.
///
/// `None` or an empty string both mean "keep the current value"; empty input
/// is how a user skips a field at the prompt. The identity fields (first and
/// last name) are not editable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Whether the update carries no replacement values at all.
    pub fn is_empty(&self) -> bool {
        self.address().is_none()
            && self.city().is_none()
            && self.state().is_none()
            && self.zip().is_none()
            && self.phone().is_none()
            && self.email().is_none()
    }

    fn provided(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }

    fn address(&self) -> Option<&str> {
        Self::provided(&self.address)
    }

    fn city(&self) -> Option<&str> {
        Self::provided(&self.city)
    }

    fn state(&self) -> Option<&str> {
        Self::provided(&self.state)
    }

    fn zip(&self) -> Option<&str> {
        Self::provided(&self.zip)
    }

    fn phone(&self) -> Option<&str> {
        Self::provided(&self.phone)
    }

    fn email(&self) -> Option<&str> {
        Self::provided(&self.email)
    }
}
