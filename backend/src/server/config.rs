//! Server configuration from flags and environment.

use std::net::SocketAddr;

use clap::Parser;

/// Runtime configuration for the dashboard backend.
///
/// Every flag can also be supplied through the environment, which is how
/// container deployments set them.
#[derive(Debug, Clone, Parser)]
#[command(name = "fleetdash", about = "Robot fleet dashboard backend", version)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[arg(long, env = "FLEETDASH_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// SQLite database file path.
    #[arg(long, env = "FLEETDASH_DB", default_value = "fleetdash.db")]
    pub database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "FLEETDASH_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,
}
