//! Outbound adapters implementing the contact repository port.
//!
//! - **memory**: process-local store, state lost on restart
//! - **persistence**: PostgreSQL-backed store using Diesel ORM
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no business logic beyond the uniqueness
//! guard every store applies at insert time.

pub mod memory;
pub mod persistence;
