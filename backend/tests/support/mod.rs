//! Embedded PostgreSQL helpers shared by integration suites.
//!
//! Suites that need a live database call [`fresh_database`], which starts a
//! cluster, creates an empty database on it and applies the phonebook
//! migrations. Setup failures panic unless `SKIP_TEST_CLUSTER` is truthy, in
//! which case the caller receives `None` and skips.

use std::sync::{Mutex, MutexGuard, OnceLock};

use pg_embedded_setup_unpriv::TestCluster;
use phonebook::outbound::persistence::run_migrations;
use postgres::{Client, NoTls};
use tokio::runtime::Runtime;

static CLUSTER_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Returns true when `SKIP_TEST_CLUSTER` is "1", "true" or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skip when `SKIP_TEST_CLUSTER` allows it, otherwise fail loudly.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// A migrated database on a private embedded cluster.
///
/// Clusters are started one at a time; the guard keeps the next test from
/// bootstrapping until this one has dropped its cluster.
pub struct MigratedDatabase {
    pub url: String,
    _cluster: TestCluster,
    _guard: MutexGuard<'static, ()>,
}

fn recreate_database(cluster: &TestCluster, name: &str) -> Result<(), String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut client = Client::connect(&admin_url, NoTls).map_err(|err| err.to_string())?;
    client
        .batch_execute(&format!(
            "DROP DATABASE IF EXISTS \"{name}\"; CREATE DATABASE \"{name}\";"
        ))
        .map_err(|err| err.to_string())
}

/// Start a cluster and return a freshly migrated database called `name`.
pub fn fresh_database(runtime: &Runtime, name: &str) -> Result<MigratedDatabase, String> {
    let guard = CLUSTER_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());
    let cluster = TestCluster::new().map_err(|err| format!("{err:?}"))?;
    recreate_database(&cluster, name)?;
    let url = cluster.connection().database_url(name);
    runtime
        .block_on(run_migrations(&url))
        .map_err(|err| err.to_string())?;

    Ok(MigratedDatabase {
        url,
        _cluster: cluster,
        _guard: guard,
    })
}
