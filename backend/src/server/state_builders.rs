//! Builds the HTTP state from the configured contact store.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use phonebook::domain::DirectoryService;
use phonebook::domain::ports::ContactRepository;
use phonebook::inbound::http::state::HttpState;
use phonebook::outbound::memory::{InMemoryContactRepository, sample_contacts};
use phonebook::outbound::persistence::DieselContactRepository;

use super::ServerConfig;

fn directory_state<R>(repo: R) -> HttpState
where
    R: ContactRepository + 'static,
{
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    HttpState::from_service(Arc::new(DirectoryService::new(Arc::new(repo), clock)))
}

fn memory_repository(seed: bool) -> std::io::Result<InMemoryContactRepository> {
    if !seed {
        return Ok(InMemoryContactRepository::new());
    }
    let seeds = sample_contacts()
        .map_err(|err| std::io::Error::other(format!("invalid sample contact: {err}")))?;
    InMemoryContactRepository::seeded(seeds)
        .map_err(|err| std::io::Error::other(format!("sample contacts rejected: {err}")))
}

/// Wire the directory service over PostgreSQL when a pool is configured,
/// otherwise over the in-memory store.
///
/// # Errors
/// Returns [`std::io::Error`] when the bundled sample contacts are invalid.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "contact store selected");
            Ok(directory_state(DieselContactRepository::new(pool.clone())))
        }
        None => {
            info!(
                store = "memory",
                seeded = config.seed_sample_contacts,
                "contact store selected"
            );
            Ok(directory_state(memory_repository(
                config.seed_sample_contacts,
            )?))
        }
    }
}
