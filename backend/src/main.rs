//! Backend entry-point: loads settings, prepares storage and serves `/users`.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use backend::settings::AppSettings;
use server::{ServerConfig, create_server, drain_on, shutdown_signal};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

async fn migrate(database_url: &str) -> std::io::Result<()> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|e| std::io::Error::other(format!("migration task failed: {e}")))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");
    Ok(())
}

async fn server_config(settings: &AppSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());
    let Some(database_url) = settings.database_url() else {
        info!("no database configured; users are kept in memory");
        return Ok(config);
    };

    if settings.run_migrations() {
        migrate(database_url).await?;
    }
    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .map_err(std::io::Error::other)?;
    Ok(config.with_db_pool(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let config = server_config(&settings).await?;
    info!(addr = %settings.bind_addr(), "starting users service");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(shutdown_signal(), health_state, server.handle()));
    server.await
}
