//! In-process contact store.
//!
//! Used when no database URL is configured. Contents live for the lifetime
//! of the process only.

mod in_memory_contact_repository;

pub use in_memory_contact_repository::{InMemoryContactRepository, sample_contacts};
