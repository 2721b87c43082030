//! Driving port for read-only directory use-cases.
//!
//! HTTP handlers depend on this trait rather than on a concrete service so
//! they can be exercised with mocks.

use async_trait::async_trait;

use crate::domain::{Contact, DirectorySummary, Error};

/// Read operations over the phonebook.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// Every stored contact.
    async fn list_all(&self) -> Result<Vec<Contact>, Error>;

    /// Number of stored contacts.
    async fn count(&self) -> Result<usize, Error>;

    /// Contact addressed by `raw_id`.
    ///
    /// Lookup is total over all strings: an identifier that does not parse
    /// yields the same `not_found` error as one that is simply absent.
    async fn find_by_id(&self, raw_id: &str) -> Result<Contact, Error>;

    /// Contact count plus the moment it was taken.
    async fn summary(&self) -> Result<DirectorySummary, Error>;
}
