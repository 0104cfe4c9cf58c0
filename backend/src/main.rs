//! Course server entry-point: loads settings, selects the course store and
//! serves the HTTP API.

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use courses::inbound::http::health::HealthState;
use courses::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use courses::server::{ServerConfig, create_server};
use courses::settings::ServerSettings;

/// Apply migrations and open the connection pool for `database_url`.
async fn connect_database(database_url: &str, max_size: u32) -> std::io::Result<DbPool> {
    let url = database_url.to_owned();
    let applied = web::block(move || run_pending_migrations(&url))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?
        .map_err(std::io::Error::other)?;
    info!(applied, "database migrations complete");

    let config = PoolConfig::new(database_url).with_max_size(max_size);
    DbPool::new(config).await.map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url() {
        let pool = connect_database(database_url, settings.db_max_connections()).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "course server listening");
    server.await
}
