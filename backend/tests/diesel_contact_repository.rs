//! `DieselContactRepository` against embedded PostgreSQL.
//!
//! Mirrors the in-memory store contract: insertion order, exact name
//! uniqueness, delete reporting and identifiers that are never reused. Each
//! test runs on its own freshly migrated database.

use std::sync::Arc;

use mockable::DefaultClock;
use phonebook::domain::ports::{ContactRepository, ContactRepositoryError, DirectoryCommand};
use phonebook::domain::{
    Contact, ContactCandidate, ContactId, ContactName, DirectoryService, ErrorCode, NewContact,
    PhoneNumber,
};
use phonebook::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

mod support;

use support::{MigratedDatabase, fresh_database, handle_cluster_setup_failure};

struct StoreContext {
    repository: DieselContactRepository,
    runtime: Runtime,
    _database: MigratedDatabase,
}

impl StoreContext {
    fn insert(&self, name: &str, number: &str) -> Result<Contact, ContactRepositoryError> {
        self.runtime.block_on(self.repository.insert(draft(name, number)))
    }

    fn ids(&self) -> Vec<u64> {
        self.runtime
            .block_on(self.repository.list())
            .expect("list succeeds")
            .iter()
            .map(|contact| contact.id().get())
            .collect()
    }
}

fn draft(name: &str, number: &str) -> NewContact {
    NewContact {
        name: ContactName::new(name).expect("valid name"),
        number: PhoneNumber::new(number).expect("valid number"),
    }
}

fn setup_store() -> Result<StoreContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let name = format!("contacts_{}", Uuid::new_v4().simple());
    let database = fresh_database(&runtime, &name)?;
    let config = PoolConfig::new(&database.url)
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    Ok(StoreContext {
        repository: DieselContactRepository::new(pool),
        runtime,
        _database: database,
    })
}

#[fixture]
fn store() -> Option<StoreContext> {
    match setup_store() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

#[rstest]
fn inserts_are_listed_in_id_order_and_counted(store: Option<StoreContext>) {
    let Some(ctx) = store else {
        eprintln!("SKIP-TEST-CLUSTER: inserts_are_listed_in_id_order_and_counted skipped");
        return;
    };

    let arto = ctx.insert("Arto Hellas", "040-123456").expect("insert");
    let ada = ctx.insert("Ada Lovelace", "39-44-5323523").expect("insert");

    assert!(ada.id() > arto.id());
    assert_eq!(ctx.ids(), vec![arto.id().get(), ada.id().get()]);
    assert_eq!(ctx.runtime.block_on(ctx.repository.count()), Ok(2));
}

#[rstest]
fn lookups_find_stored_contacts_exactly(store: Option<StoreContext>) {
    let Some(ctx) = store else {
        eprintln!("SKIP-TEST-CLUSTER: lookups_find_stored_contacts_exactly skipped");
        return;
    };

    let arto = ctx.insert("Arto Hellas", "040-123456").expect("insert");

    let by_id = ctx.runtime.block_on(ctx.repository.find_by_id(arto.id()));
    let by_name = ctx.runtime.block_on(ctx.repository.find_by_name("Arto Hellas"));
    let lower = ctx.runtime.block_on(ctx.repository.find_by_name("arto hellas"));
    let unknown = ctx
        .runtime
        .block_on(ctx.repository.find_by_id(ContactId::new(arto.id().get() + 100)));

    assert_eq!(by_id, Ok(Some(arto.clone())));
    assert_eq!(by_name, Ok(Some(arto)));
    assert_eq!(lower, Ok(None));
    assert_eq!(unknown, Ok(None));
}

#[rstest]
fn duplicate_name_hits_the_unique_constraint(store: Option<StoreContext>) {
    let Some(ctx) = store else {
        eprintln!("SKIP-TEST-CLUSTER: duplicate_name_hits_the_unique_constraint skipped");
        return;
    };

    ctx.insert("Arto Hellas", "040-123456").expect("insert");
    let result = ctx.insert("Arto Hellas", "000-0000000");

    assert_eq!(result, Err(ContactRepositoryError::duplicate_name("Arto Hellas")));
    assert_eq!(ctx.runtime.block_on(ctx.repository.count()), Ok(1));
}

#[rstest]
fn delete_reports_whether_a_row_was_removed(store: Option<StoreContext>) {
    let Some(ctx) = store else {
        eprintln!("SKIP-TEST-CLUSTER: delete_reports_whether_a_row_was_removed skipped");
        return;
    };

    let arto = ctx.insert("Arto Hellas", "040-123456").expect("insert");

    let first = ctx.runtime.block_on(ctx.repository.delete(arto.id()));
    let second = ctx.runtime.block_on(ctx.repository.delete(arto.id()));

    assert_eq!(first, Ok(true));
    assert_eq!(second, Ok(false));
    assert_eq!(ctx.runtime.block_on(ctx.repository.find_by_id(arto.id())), Ok(None));
}

#[rstest]
fn deleting_newest_does_not_recycle_its_id(store: Option<StoreContext>) {
    let Some(ctx) = store else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_newest_does_not_recycle_its_id skipped");
        return;
    };

    let first = ctx.insert("Grace Hopper", "555-0100-22").expect("insert");
    assert_eq!(ctx.runtime.block_on(ctx.repository.delete(first.id())), Ok(true));

    let second = ctx.insert("Barbara Liskov", "555-0100-33").expect("insert");

    assert!(second.id() > first.id());
}

#[rstest]
fn ids_beyond_the_column_range_are_absent(store: Option<StoreContext>) {
    let Some(ctx) = store else {
        eprintln!("SKIP-TEST-CLUSTER: ids_beyond_the_column_range_are_absent skipped");
        return;
    };

    let huge = ContactId::new(u64::MAX);

    assert_eq!(ctx.runtime.block_on(ctx.repository.find_by_id(huge)), Ok(None));
    assert_eq!(ctx.runtime.block_on(ctx.repository.delete(huge)), Ok(false));
}

#[rstest]
fn directory_rejects_reused_names_over_postgres(store: Option<StoreContext>) {
    let Some(ctx) = store else {
        eprintln!("SKIP-TEST-CLUSTER: directory_rejects_reused_names_over_postgres skipped");
        return;
    };
    let directory = DirectoryService::new(Arc::new(ctx.repository.clone()), Arc::new(DefaultClock));

    let added = ctx
        .runtime
        .block_on(directory.add(ContactCandidate::new("Ada Lovelace", "39-44-5323523")));
    let reused = ctx
        .runtime
        .block_on(directory.add(ContactCandidate::new("Ada Lovelace", "000")));

    assert!(added.is_ok());
    let error = reused.expect_err("duplicate rejected");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details().and_then(|details| details["code"].as_str()),
        Some("duplicate_name")
    );
    assert_eq!(ctx.ids().len(), 1);
}
