//! Phonebook entry-point: loads settings, selects the contact store and runs
//! the HTTP server.

mod server;

use actix_web::dev::ServerHandle;
use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use color_eyre::eyre::{Context, Result};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use phonebook::config::PhonebookSettings;
use phonebook::inbound::http::health::HealthState;
use phonebook::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, create_server};

/// Build Prometheus middleware, logging and discarding failures.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make_metrics: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> std::result::Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make_metrics() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "failed to initialise Prometheus metrics; continuing without");
            None
        }
    }
}

/// Resolve on Ctrl+C or SIGTERM. A handler that cannot be installed never
/// fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(%error, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(error) => {
                warn!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received Ctrl+C"),
        () = terminate => info!("received SIGTERM"),
    }
}

/// Fail liveness, then let in-flight requests finish before stopping.
async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.begin_draining();
    info!("draining connections");
    handle.stop(true).await;
}

async fn server_config(settings: &PhonebookSettings) -> Result<ServerConfig> {
    let bind_addr = settings.bind_addr()?;
    let config =
        ServerConfig::new(bind_addr).with_sample_contacts(settings.seed_sample_contacts());

    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };
    run_migrations(database_url)
        .await
        .wrap_err("apply database migrations")?;
    let pool_config =
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()?);
    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("connect to contact database")?;
    Ok(config.with_db_pool(pool))
}

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = PhonebookSettings::load_from_iter(std::env::args_os())
        .wrap_err("load phonebook settings")?;
    let config = server_config(&settings).await?;

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(initialize_metrics(|| {
        PrometheusMetricsBuilder::new("phonebook")
            .endpoint("/metrics")
            .build()
    }));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        shutdown_signal().await;
        drain(health_state, handle).await;
    });
    info!(
        host = settings.host(),
        port = settings.port(),
        "phonebook listening"
    );
    server.await?;
    Ok(())
}
