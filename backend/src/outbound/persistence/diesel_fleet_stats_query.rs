//! SQLite-backed `FleetStatsQuery` implementation using Diesel ORM.
//!
//! Grouped counts come from the database; the battery mean is folded in the
//! domain from the raw column so rounding behaviour lives in one place
//! ([`FleetStats::from_parts`]) and is unit-testable without a store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::FleetStats;
use crate::domain::ports::{FleetStatsQuery, FleetStatsQueryError};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::DbPool;
use super::schema::{robots, tasks};

/// Diesel-backed implementation of the fleet statistics port.
#[derive(Clone)]
pub struct DieselFleetStatsQuery {
    pool: DbPool,
}

impl DieselFleetStatsQuery {
    /// Create a new query adapter with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> FleetStatsQueryError {
    map_basic_diesel_error(
        error,
        FleetStatsQueryError::query,
        FleetStatsQueryError::connection,
    )
}

fn load_stats(conn: &mut SqliteConnection) -> Result<FleetStats, FleetStatsQueryError> {
    // One transaction so the counts and the battery mean describe the same
    // snapshot under concurrent writes.
    conn.transaction(|conn| {
        let robot_counts: Vec<(String, i64)> = robots::table
            .group_by(robots::status)
            .select((robots::status, count_star()))
            .load(conn)?;

        let battery_levels: Vec<i32> = robots::table.select(robots::battery_level).load(conn)?;

        let task_counts: Vec<(String, i64)> = tasks::table
            .group_by(tasks::status)
            .select((tasks::status, count_star()))
            .load(conn)?;

        Ok::<_, diesel::result::Error>(FleetStats::from_parts(
            robot_counts.into_iter().collect::<BTreeMap<_, _>>(),
            &battery_levels,
            task_counts.into_iter().collect::<BTreeMap<_, _>>(),
        ))
    })
    .map_err(map_diesel_error)
}

#[async_trait]
impl FleetStatsQuery for DieselFleetStatsQuery {
    async fn fleet_stats(&self) -> Result<FleetStats, FleetStatsQueryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|err| map_basic_pool_error(err, FleetStatsQueryError::connection))?;
            load_stats(&mut conn)
        })
        .await
        .map_err(|err| FleetStatsQueryError::connection(format!("task join error: {err}")))?
    }
}
