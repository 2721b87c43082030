//! Directory service: the phonebook's business rules.
//!
//! Every read and write against the record store goes through here. The
//! service validates candidates, enforces name uniqueness, delegates
//! identifier assignment to the store, and turns store failures into typed
//! domain errors. It never logs and never formats transport responses.
//!
//! Validation order for `add` is fixed: presence, then uniqueness, then
//! minimum lengths. A duplicate name is therefore reported even when the
//! accompanying number is also too short.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, DirectoryCommand, DirectoryQuery,
};
use crate::domain::{
    Contact, ContactCandidate, ContactId, ContactName, ContactValidationError, DirectorySummary,
    Error, NewContact, PhoneNumber,
};

const FIELD_NAME: &str = "name";
const FIELD_NUMBER: &str = "number";

/// Phonebook service implementing both driving ports.
#[derive(Clone)]
pub struct DirectoryService<R> {
    contacts: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> DirectoryService<R> {
    /// Create a service over the given record store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use phonebook::domain::DirectoryService;
    /// use phonebook::outbound::memory::InMemoryContactRepository;
    ///
    /// let service = DirectoryService::new(
    ///     Arc::new(InMemoryContactRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(contacts: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { contacts, clock }
    }
}

fn map_repository_error(error: ContactRepositoryError) -> Error {
    match error {
        // Connection details stay in the adapter's log.
        ContactRepositoryError::Connection { .. } => {
            Error::service_unavailable("contact store unavailable")
        }
        ContactRepositoryError::Query { message } => {
            Error::internal(format!("contact store error: {message}"))
        }
        ContactRepositoryError::DuplicateName { .. } => duplicate_name_error(),
    }
}

fn not_found_error() -> Error {
    Error::not_found("person not found")
}

fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request("name or number missing").with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

fn duplicate_name_error() -> Error {
    Error::invalid_request("name must be unique").with_details(json!({
        "field": FIELD_NAME,
        "code": "duplicate_name",
    }))
}

fn invalid_field_error(error: &ContactValidationError) -> Error {
    let code = match error {
        ContactValidationError::NameTooShort { .. }
        | ContactValidationError::NumberTooShort { .. } => "too_short",
        ContactValidationError::EmptyName | ContactValidationError::EmptyNumber => {
            "missing_field"
        }
        ContactValidationError::InvalidId => "invalid_id",
    };
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": error.field(),
        "code": code,
    }))
}

fn require_present(value: Option<String>, field: &'static str) -> Result<String, Error> {
    value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))
}

impl<R> DirectoryService<R>
where
    R: ContactRepository,
{
    async fn ensure_name_unused(&self, name: &str) -> Result<(), Error> {
        let existing = self
            .contacts
            .find_by_name(name)
            .await
            .map_err(map_repository_error)?;
        match existing {
            Some(_) => Err(duplicate_name_error()),
            None => Ok(()),
        }
    }

    async fn lookup(&self, raw_id: &str) -> Result<Option<Contact>, Error> {
        let Ok(id) = raw_id.parse::<ContactId>() else {
            return Ok(None);
        };
        self.contacts
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> DirectoryQuery for DirectoryService<R>
where
    R: ContactRepository,
{
    async fn list_all(&self) -> Result<Vec<Contact>, Error> {
        self.contacts.list().await.map_err(map_repository_error)
    }

    async fn count(&self) -> Result<usize, Error> {
        self.contacts.count().await.map_err(map_repository_error)
    }

    async fn find_by_id(&self, raw_id: &str) -> Result<Contact, Error> {
        self.lookup(raw_id).await?.ok_or_else(not_found_error)
    }

    async fn summary(&self) -> Result<DirectorySummary, Error> {
        let count = self.contacts.count().await.map_err(map_repository_error)?;
        Ok(DirectorySummary {
            count,
            generated_at: self.clock.utc(),
        })
    }
}

#[async_trait]
impl<R> DirectoryCommand for DirectoryService<R>
where
    R: ContactRepository,
{
    async fn add(&self, candidate: ContactCandidate) -> Result<Contact, Error> {
        let ContactCandidate { name, number } = candidate;
        let name = require_present(name, FIELD_NAME)?;
        let number = require_present(number, FIELD_NUMBER)?;

        self.ensure_name_unused(&name).await?;

        let draft = NewContact {
            name: ContactName::new(name).map_err(|err| invalid_field_error(&err))?,
            number: PhoneNumber::new(number).map_err(|err| invalid_field_error(&err))?,
        };
        self.contacts
            .insert(draft)
            .await
            .map_err(map_repository_error)
    }

    async fn delete_by_id(&self, raw_id: &str) -> Result<(), Error> {
        let Ok(id) = raw_id.parse::<ContactId>() else {
            return Err(not_found_error());
        };
        let removed = self
            .contacts
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if removed {
            Ok(())
        } else {
            Err(not_found_error())
        }
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
