//! `ContactRepository` backed by a vector behind an async read-write lock.
//!
//! Identifiers come from a counter kept next to the collection. The counter
//! only moves forward, so deleting the newest contact and adding another
//! never hands out an identifier twice. Once `u64::MAX` has been issued the
//! store refuses further inserts.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactId, ContactValidationError, NewContact};

const SAMPLE_CONTACTS: [(u64, &str, &str); 4] = [
    (1, "Arto Hellas", "040-123456"),
    (2, "Ada Lovelace", "39-44-5323523"),
    (3, "Dan Abramov", "12-43-234345"),
    (4, "Mary Poppendieck", "39-23-6423122"),
];

/// The four contacts the phonebook ships with for demos.
///
/// # Errors
/// Returns [`ContactValidationError`] if a bundled entry violates the
/// contact rules.
pub fn sample_contacts() -> Result<Vec<Contact>, ContactValidationError> {
    SAMPLE_CONTACTS
        .iter()
        .map(|(id, name, number)| Contact::try_from_parts(*id, *name, *number))
        .collect()
}

#[derive(Debug)]
struct Directory {
    contacts: Vec<Contact>,
    /// `None` once every identifier has been issued.
    next_id: Option<ContactId>,
}

impl Directory {
    fn position(&self, id: ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| contact.id() == id)
    }

    fn holds_name(&self, name: &str) -> bool {
        self.contacts
            .iter()
            .any(|contact| contact.name().as_ref() == name)
    }
}

/// Process-local contact store.
#[derive(Debug)]
pub struct InMemoryContactRepository {
    directory: RwLock<Directory>,
}

impl Default for InMemoryContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryContactRepository {
    /// Empty store issuing identifiers from 1.
    pub fn new() -> Self {
        Self {
            directory: RwLock::new(Directory {
                contacts: Vec::new(),
                next_id: Some(ContactId::new(1)),
            }),
        }
    }

    /// Store pre-populated with `contacts`, kept in the given order.
    ///
    /// The identifier counter resumes after the largest seeded id.
    ///
    /// # Errors
    /// Returns [`ContactRepositoryError::DuplicateName`] when two seeds share
    /// a name and [`ContactRepositoryError::Query`] when two share an id.
    ///
    /// # Examples
    /// ```
    /// use phonebook::outbound::memory::{InMemoryContactRepository, sample_contacts};
    ///
    /// let seeds = sample_contacts().expect("bundled contacts are valid");
    /// let repo = InMemoryContactRepository::seeded(seeds).expect("unique seeds");
    /// # let _ = repo;
    /// ```
    pub fn seeded(
        contacts: impl IntoIterator<Item = Contact>,
    ) -> Result<Self, ContactRepositoryError> {
        let mut directory = Directory {
            contacts: Vec::new(),
            next_id: Some(ContactId::new(1)),
        };
        for contact in contacts {
            if directory.holds_name(contact.name().as_ref()) {
                return Err(ContactRepositoryError::duplicate_name(
                    contact.name().as_ref(),
                ));
            }
            if directory.position(contact.id()).is_some() {
                return Err(ContactRepositoryError::query(format!(
                    "duplicate seed id {}",
                    contact.id()
                )));
            }
            directory.next_id = directory
                .next_id
                .zip(contact.id().next())
                .map(|(current, after_seed)| current.max(after_seed));
            directory.contacts.push(contact);
        }
        Ok(Self {
            directory: RwLock::new(directory),
        })
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        Ok(self.directory.read().await.contacts.clone())
    }

    async fn count(&self) -> Result<usize, ContactRepositoryError> {
        Ok(self.directory.read().await.contacts.len())
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let directory = self.directory.read().await;
        Ok(directory
            .contacts
            .iter()
            .find(|contact| contact.id() == id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ContactRepositoryError> {
        let directory = self.directory.read().await;
        Ok(directory
            .contacts
            .iter()
            .find(|contact| contact.name().as_ref() == name)
            .cloned())
    }

    async fn insert(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError> {
        let mut directory = self.directory.write().await;
        if directory.holds_name(contact.name.as_ref()) {
            return Err(ContactRepositoryError::duplicate_name(
                contact.name.as_ref(),
            ));
        }
        let Some(id) = directory.next_id else {
            return Err(ContactRepositoryError::query(
                "identifier space exhausted",
            ));
        };
        directory.next_id = id.next();
        let stored = contact.with_id(id);
        directory.contacts.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ContactId) -> Result<bool, ContactRepositoryError> {
        let mut directory = self.directory.write().await;
        match directory.position(id) {
            Some(index) => {
                directory.contacts.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
