//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the driving ports, so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{DirectoryCommand, DirectoryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub directory: Arc<dyn DirectoryQuery>,
    pub directory_command: Arc<dyn DirectoryCommand>,
}

impl HttpState {
    /// Construct state from separate query and command ports.
    pub fn new(
        directory: Arc<dyn DirectoryQuery>,
        directory_command: Arc<dyn DirectoryCommand>,
    ) -> Self {
        Self {
            directory,
            directory_command,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use phonebook::domain::DirectoryService;
    /// use phonebook::inbound::http::state::HttpState;
    /// use phonebook::outbound::memory::InMemoryContactRepository;
    ///
    /// let service = DirectoryService::new(
    ///     Arc::new(InMemoryContactRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _query = state.directory.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: DirectoryQuery + DirectoryCommand + 'static,
    {
        Self {
            directory: service.clone(),
            directory_command: service,
        }
    }
}
