//! Driving port for directory mutations.

use async_trait::async_trait;

use crate::domain::{Contact, ContactCandidate, Error};

/// Mutating operations over the phonebook.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryCommand: Send + Sync {
    /// Validate `candidate`, store it, and return it with its new identifier.
    ///
    /// Fails with `invalid_request` when a field is missing, the name is
    /// already taken, or a field is too short.
    async fn add(&self, candidate: ContactCandidate) -> Result<Contact, Error>;

    /// Remove the contact addressed by `raw_id`.
    ///
    /// Fails with `not_found` when nothing is stored under that identifier,
    /// including identifiers that do not parse.
    async fn delete_by_id(&self, raw_id: &str) -> Result<(), Error>;
}
