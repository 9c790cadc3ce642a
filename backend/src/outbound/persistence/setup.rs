//! Store initialisation: embedded migrations and the idempotent seed fleet.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::error_mapping::map_basic_pool_error;
use super::models::NewRobotRow;
use super::pool::DbPool;
use super::schema::robots;

/// Migrations compiled into the binary so deployments carry their schema.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Five fixed robots present after first startup, matched by name.
const SEED_FLEET: [(&str, &str, i32, &str); 5] = [
    ("R2D2", "active", 85, "Warehouse A"),
    ("C3PO", "idle", 92, "Lab B"),
    ("BB8", "active", 67, "Production Line"),
    ("WALL-E", "maintenance", 45, "Service Bay"),
    ("Optimus", "active", 78, "Assembly Line"),
];

/// Errors raised while preparing the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A pending migration failed to apply.
    #[error("migration failed: {message}")]
    Migration {
        /// Underlying migration failure description.
        message: String,
    },

    /// The seed transaction failed.
    #[error("seed failed: {message}")]
    Seed {
        /// Underlying database failure description.
        message: String,
    },

    /// A pooled connection could not be obtained.
    #[error("store connection failed: {message}")]
    Connection {
        /// Underlying pool failure description.
        message: String,
    },
}

impl SetupError {
    fn migration(message: impl Into<String>) -> Self {
        Self::Migration {
            message: message.into(),
        }
    }

    fn seed(message: impl Into<String>) -> Self {
        Self::Seed {
            message: message.into(),
        }
    }

    fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

/// Apply pending migrations on the given connection.
///
/// # Errors
/// Returns [`SetupError::Migration`] when a migration cannot be applied.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), SetupError> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|applied| {
            if !applied.is_empty() {
                info!(count = applied.len(), "applied pending migrations");
            }
        })
        .map_err(|err| SetupError::migration(err.to_string()))
}

/// Insert the seed fleet, skipping robots whose name is already present.
///
/// Runs in one transaction so a partial seed never becomes visible. Returns
/// the number of robots inserted.
///
/// # Errors
/// Returns [`SetupError::Seed`] when the transaction fails.
pub fn seed_fleet(conn: &mut SqliteConnection, now: DateTime<Utc>) -> Result<usize, SetupError> {
    let stamp = now.naive_utc();
    conn.transaction(|conn| {
        let mut inserted = 0;
        for (name, status, battery_level, location) in SEED_FLEET {
            let present: i64 = robots::table
                .filter(robots::name.eq(name))
                .count()
                .get_result(conn)?;
            if present > 0 {
                continue;
            }

            diesel::insert_into(robots::table)
                .values(NewRobotRow {
                    name,
                    status,
                    battery_level,
                    location,
                    last_updated: stamp,
                })
                .execute(conn)?;
            inserted += 1;
        }
        Ok::<usize, diesel::result::Error>(inserted)
    })
    .map_err(|err| SetupError::seed(err.to_string()))
}

/// Migrate and seed the store behind the pool.
///
/// # Errors
/// Propagates [`SetupError`] from connection checkout, migrations, or the
/// seed transaction.
pub async fn initialise(pool: &DbPool, now: DateTime<Utc>) -> Result<(), SetupError> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|err| map_basic_pool_error(err, SetupError::connection))?;
        run_migrations(&mut conn)?;
        let inserted = seed_fleet(&mut conn, now)?;
        if inserted > 0 {
            info!(inserted, "seeded fleet robots");
        }
        Ok(())
    })
    .await
    .map_err(|err| SetupError::connection(format!("task join error: {err}")))?
}
