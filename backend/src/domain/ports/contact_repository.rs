//! Port abstraction for contact record stores.
//!
//! The directory service owns every business rule; adapters only persist and
//! retrieve. Both the in-memory and PostgreSQL adapters implement this trait
//! and must agree on its semantics:
//!
//! - `insert` assigns a fresh identifier that was never issued before by the
//!   same store instance.
//! - `list` returns contacts in insertion order.
//! - `insert` rejects a name that is already stored with
//!   [`ContactRepositoryError::DuplicateName`].

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, NewContact};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "contact store connection failed: {message}",
        /// The store rejected or failed to execute an operation.
        Query { message: String } => "contact store query failed: {message}",
        /// Another contact already uses this name.
        DuplicateName { name: String } => "contact name already stored: {name}",
    }
}

/// Record store holding phonebook contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Every stored contact in insertion order.
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Number of stored contacts.
    async fn count(&self) -> Result<usize, ContactRepositoryError>;

    /// Contact with the given identifier, if stored.
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Contact whose name is exactly `name` (case-sensitive), if stored.
    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Persist a new contact and return it with its assigned identifier.
    async fn insert(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError>;

    /// Remove a contact. Returns `false` when nothing was stored under `id`.
    async fn delete(&self, id: ContactId) -> Result<bool, ContactRepositoryError>;
}
