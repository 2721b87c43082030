//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Identifiers come from the `contacts.id` sequence, so a deleted id is never
//! handed out again. Name uniqueness is enforced by the table constraint;
//! violations surface as [`ContactRepositoryError::DuplicateName`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactId, NewContact};

use super::diesel_basic_error_mapping::{map_diesel_error, map_insert_error, map_pool_error};
use super::models::{ContactRow, NewContactRow};
use super::pool::DbPool;
use super::schema::contacts;

/// Diesel-backed contact store.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_contact(row: ContactRow) -> Result<Contact, ContactRepositoryError> {
    let id = u64::try_from(row.id).map_err(|_| {
        ContactRepositoryError::query(format!("negative contact id {}", row.id))
    })?;
    Contact::try_from_parts(id, row.name, row.number).map_err(|err| {
        warn!(contact_id = id, error = %err, "stored contact violates domain rules");
        ContactRepositoryError::query(format!("invalid stored contact {id}: {err}"))
    })
}

/// Contact ids above `i64::MAX` cannot exist in the table.
fn id_to_column(id: ContactId) -> Option<i64> {
    i64::try_from(id.get()).ok()
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = contacts::table
            .order(contacts::id.asc())
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn count(&self) -> Result<usize, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = contacts::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        usize::try_from(total)
            .map_err(|_| ContactRepositoryError::query(format!("invalid contact count {total}")))
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let Some(column_id) = id_to_column(id) else {
            return Ok(None);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .find(column_id)
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .filter(contacts::name.eq(name))
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn insert(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewContactRow {
            name: contact.name.as_ref(),
            number: contact.number.as_ref(),
        };
        let row: ContactRow = diesel::insert_into(contacts::table)
            .values(&new_row)
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, contact.name.as_ref()))?;

        row_to_contact(row)
    }

    async fn delete(&self, id: ContactId) -> Result<bool, ContactRepositoryError> {
        let Some(column_id) = id_to_column(id) else {
            return Ok(false);
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(contacts::table.find(column_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion checks; queries are exercised against a live database
    //! only.

    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn row(id: i64, name: &str, number: &str) -> ContactRow {
        ContactRow {
            id,
            name: name.to_owned(),
            number: number.to_owned(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn valid_row_becomes_contact() {
        let contact = row_to_contact(row(7, "Ada Lovelace", "39-44-5323523")).expect("valid row");

        assert_eq!(contact.id(), ContactId::new(7));
        assert_eq!(contact.name().as_ref(), "Ada Lovelace");
    }

    #[rstest]
    #[case(row(-1, "Ada Lovelace", "39-44-5323523"))]
    #[case(row(2, "Al", "39-44-5323523"))]
    #[case(row(3, "Ada Lovelace", "123"))]
    fn malformed_rows_are_query_errors(#[case] input: ContactRow) {
        assert!(matches!(
            row_to_contact(input),
            Err(ContactRepositoryError::Query { .. })
        ));
    }

    #[rstest]
    #[case(1, Some(1))]
    #[case(u64::MAX, None)]
    fn ids_beyond_the_column_range_are_absent(#[case] raw: u64, #[case] expected: Option<i64>) {
        assert_eq!(id_to_column(ContactId::new(raw)), expected);
    }
}
