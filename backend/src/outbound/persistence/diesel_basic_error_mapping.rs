//! Translation of pool and Diesel failures into contact repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::ContactRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            warn!(%message, "contact database unreachable");
            ContactRepositoryError::connection(message)
        }
    }
}

/// Map a Diesel error raised while writing `name`.
///
/// Unique violations become [`ContactRepositoryError::DuplicateName`]; every
/// other failure follows [`map_diesel_error`].
pub(crate) fn map_insert_error(error: DieselError, name: &str) -> ContactRepositoryError {
    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) = &error {
        debug!(
            constraint = info.constraint_name(),
            "contact insert hit unique constraint"
        );
        return ContactRepositoryError::duplicate_name(name);
    }
    map_diesel_error(error)
}

pub(crate) fn map_diesel_error(error: DieselError) -> ContactRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => ContactRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ContactRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            warn!(message = info.message(), "contact database connection closed");
            ContactRepositoryError::connection("database connection error")
        }
        _ => ContactRepositoryError::query("database error"),
    }
}
