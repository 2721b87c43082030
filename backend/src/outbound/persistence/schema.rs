//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Phonebook contacts.
    ///
    /// `name` carries a unique constraint; both text columns carry length
    /// checks mirroring the domain minimums.
    contacts (id) {
        /// Primary key drawn from a sequence, never reused.
        id -> Int8,
        name -> Varchar,
        number -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
