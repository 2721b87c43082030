//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! `diesel-async` drives queries; `bb8` pools the connections. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module, and every database failure is mapped onto
//! [`ContactRepositoryError`](crate::domain::ports::ContactRepositoryError).
//!
//! ```ignore
//! use phonebook::outbound::persistence::{
//!     DbPool, DieselContactRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/phonebook").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/phonebook")).await?;
//! let repo = DieselContactRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_contact_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
