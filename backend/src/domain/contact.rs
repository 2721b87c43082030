//! Contact data model.
//!
//! A contact is the only entity in the phonebook: a unique name paired with a
//! phone number. Identifiers are assigned by the record store and never
//! supplied by callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum number of characters in a contact name.
pub const CONTACT_NAME_MIN: usize = 3;
/// Minimum number of characters in a phone number.
pub const PHONE_NUMBER_MIN: usize = 8;

/// Validation errors raised by the contact newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
    #[error("contact id must be a non-negative integer")]
    InvalidId,
    #[error("name must not be empty")]
    EmptyName,
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("number must not be empty")]
    EmptyNumber,
    #[error("number must be at least {min} characters")]
    NumberTooShort { min: usize },
}

impl ContactValidationError {
    /// Request field the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidId => "id",
            Self::EmptyName | Self::NameTooShort { .. } => "name",
            Self::EmptyNumber | Self::NumberTooShort { .. } => "number",
        }
    }
}

/// Store-assigned contact identifier.
///
/// # Examples
/// ```
/// use phonebook::domain::ContactId;
///
/// let id: ContactId = "4".parse().expect("numeric id");
/// assert_eq!(id.get(), 4);
/// assert!("abc".parse::<ContactId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    /// Wrap a raw identifier issued by a record store.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Identifier issued after this one by a monotonic counter, or `None`
    /// once the identifier space is used up.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = ContactValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactValidationError::InvalidId);
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ContactValidationError::InvalidId)
    }
}

/// Validated contact name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactName(String);

impl ContactName {
    /// Validate and construct a [`ContactName`].
    pub fn new(name: impl Into<String>) -> Result<Self, ContactValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        if name.chars().count() < CONTACT_NAME_MIN {
            return Err(ContactValidationError::NameTooShort {
                min: CONTACT_NAME_MIN,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ContactName> for String {
    fn from(value: ContactName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ContactName {
    type Error = ContactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated phone number. Format beyond the minimum length is free-form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a [`PhoneNumber`].
    pub fn new(number: impl Into<String>) -> Result<Self, ContactValidationError> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(ContactValidationError::EmptyNumber);
        }
        if number.chars().count() < PHONE_NUMBER_MIN {
            return Err(ContactValidationError::NumberTooShort {
                min: PHONE_NUMBER_MIN,
            });
        }
        Ok(Self(number))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ContactValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unvalidated request to add a contact, exactly as the caller sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactCandidate {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl ContactCandidate {
    /// Candidate with both fields present.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }
}

/// Validated contact awaiting an identifier from the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: ContactName,
    pub number: PhoneNumber,
}

impl NewContact {
    /// Attach the identifier issued by the store.
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact::new(id, self.name, self.number)
    }
}

/// Stored phonebook entry.
///
/// Serialises as `{ "id": <number>, "name": <string>, "number": <string> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    id: ContactId,
    name: ContactName,
    number: PhoneNumber,
}

impl Contact {
    /// Build a contact from validated components.
    pub fn new(id: ContactId, name: ContactName, number: PhoneNumber) -> Self {
        Self { id, name, number }
    }

    /// Build a contact from raw parts, validating name and number.
    ///
    /// # Examples
    /// ```
    /// use phonebook::domain::Contact;
    ///
    /// let contact = Contact::try_from_parts(1, "Arto Hellas", "040-123456")
    ///     .expect("valid contact");
    /// assert_eq!(contact.name().as_ref(), "Arto Hellas");
    /// ```
    pub fn try_from_parts(
        id: u64,
        name: impl Into<String>,
        number: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        Ok(Self::new(
            ContactId::new(id),
            ContactName::new(name)?,
            PhoneNumber::new(number)?,
        ))
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> ContactId {
        self.id
    }

    /// Unique contact name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone number.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}
