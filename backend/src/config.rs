//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PHONEBOOK_*` environment variables and an
//! optional configuration file. Unset values fall back to the defaults below.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_SEED_SAMPLE_CONTACTS: bool = true;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("host must be an IP address, got {host:?}")]
    InvalidHost { host: String },
    #[error("db_max_connections must be at least 1")]
    NoConnections,
}

/// Phonebook server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PHONEBOOK")]
pub struct PhonebookSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Without it contacts are kept in memory.
    pub database_url: Option<String>,
    /// Seed the in-memory store with the four sample contacts.
    pub seed_sample_contacts: Option<bool>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl PhonebookSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Socket address assembled from `host` and `port`.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP
    /// literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Whether an in-memory store starts with the sample contacts. Seeds
    /// unless explicitly disabled.
    pub fn seed_sample_contacts(&self) -> bool {
        self.seed_sample_contacts.unwrap_or(DEFAULT_SEED_SAMPLE_CONTACTS)
    }

    /// Non-blank database URL, if configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// # Errors
    /// Returns [`SettingsError::NoConnections`] when configured as zero.
    pub fn db_max_connections(&self) -> Result<u32, SettingsError> {
        match self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS) {
            0 => Err(SettingsError::NoConnections),
            max => Ok(max),
        }
    }
}
