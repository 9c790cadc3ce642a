//! Backend entry-point: wires the store, seed data, and REST endpoints.

use clap::Parser;
use mockable::{Clock, DefaultClock};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fleetdash::outbound::persistence::{DbPool, PoolConfig, initialise};
use fleetdash::server::{ServerConfig, build_http_state, create_server};

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

    let config = ServerConfig::parse();

    let pool_config =
        PoolConfig::new(config.database_url.clone()).with_max_size(config.pool_size);
    let pool = DbPool::new(pool_config).map_err(std::io::Error::other)?;

    initialise(&pool, DefaultClock.utc())
        .await
        .map_err(std::io::Error::other)?;

    info!(addr = %config.bind_addr, db = %config.database_url, "starting server");
    let state = build_http_state(&pool);
    create_server(&config, state)?.await
}
