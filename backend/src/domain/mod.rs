//! Domain primitives, ports, and the directory service.
//!
//! Purpose: hold every phonebook business rule behind transport- and
//! storage-agnostic types. Inbound adapters call the driving ports in
//! [`ports`]; outbound adapters implement [`ports::ContactRepository`].
//!
//! Public surface:
//! - Contact (alias to `contact::Contact`) and its validated parts.
//! - DirectoryService (alias to `directory_service::DirectoryService`).
//! - DirectorySummary (alias to `summary::DirectorySummary`).
//! - Error / ErrorCode (alias to `error::Error`): transport-agnostic failures.
//! - TraceId (alias to `trace_id::TraceId`): request correlation id.

pub mod contact;
pub mod directory_service;
pub mod error;
pub mod ports;
pub mod summary;
pub mod trace_id;

pub use self::contact::{
    CONTACT_NAME_MIN, Contact, ContactCandidate, ContactId, ContactName, ContactValidationError,
    NewContact, PHONE_NUMBER_MIN, PhoneNumber,
};
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::summary::DirectorySummary;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
