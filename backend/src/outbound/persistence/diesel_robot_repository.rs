//! SQLite-backed `RobotRepository` implementation using Diesel ORM.
//!
//! Diesel's SQLite backend is synchronous, so every operation checks out a
//! pooled connection inside `tokio::task::spawn_blocking`. Multi-statement
//! writes run inside a single transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::ports::{RobotRepository, RobotRepositoryError};
use crate::domain::{NewRobot, Robot, RobotPatch};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewRobotRow, RobotChangeset, RobotRow};
use super::pool::{DbPool, PoolError};
use super::schema::robots;

/// Diesel-backed implementation of the robot repository port.
#[derive(Clone)]
pub struct DieselRobotRepository {
    pool: DbPool,
}

impl DieselRobotRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> Result<T, RobotRepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, RobotRepositoryError> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(map_pool_error)?;
            f(&mut conn)
        })
        .await
        .map_err(|err| RobotRepositoryError::connection(format!("task join error: {err}")))?
    }
}

fn map_pool_error(error: PoolError) -> RobotRepositoryError {
    map_basic_pool_error(error, RobotRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RobotRepositoryError {
    map_basic_diesel_error(
        error,
        RobotRepositoryError::query,
        RobotRepositoryError::connection,
    )
}

/// Convert a database row into a domain robot, parsing the stored status.
fn row_to_robot(row: RobotRow) -> Result<Robot, RobotRepositoryError> {
    let RobotRow {
        id,
        name,
        status,
        battery_level,
        location,
        last_updated,
    } = row;

    let status = status
        .parse()
        .map_err(|err| RobotRepositoryError::query(format!("stored robot {id}: {err}")))?;

    Ok(Robot {
        id,
        name,
        status,
        battery_level,
        location,
        last_updated: last_updated.and_utc(),
    })
}

fn to_new_row(robot: &NewRobot) -> NewRobotRow<'_> {
    NewRobotRow {
        name: &robot.name,
        status: robot.status.as_str(),
        battery_level: robot.battery_level,
        location: &robot.location,
        last_updated: robot.last_updated.naive_utc(),
    }
}

fn to_changeset(patch: &RobotPatch) -> RobotChangeset<'_> {
    RobotChangeset {
        status: patch.status.map(|status| status.as_str()),
        battery_level: patch.battery_level,
        location: patch.location.as_deref(),
        last_updated: patch.last_updated.naive_utc(),
    }
}

#[async_trait]
impl RobotRepository for DieselRobotRepository {
    async fn list(&self) -> Result<Vec<Robot>, RobotRepositoryError> {
        self.run_blocking(|conn| {
            let rows: Vec<RobotRow> = robots::table
                .order(robots::id.asc())
                .select(RobotRow::as_select())
                .load(conn)
                .map_err(map_diesel_error)?;

            rows.into_iter().map(row_to_robot).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Robot>, RobotRepositoryError> {
        self.run_blocking(move |conn| {
            let row = robots::table
                .filter(robots::id.eq(id))
                .select(RobotRow::as_select())
                .first::<RobotRow>(conn)
                .optional()
                .map_err(map_diesel_error)?;

            row.map(row_to_robot).transpose()
        })
        .await
    }

    async fn create(&self, robot: NewRobot) -> Result<i32, RobotRepositoryError> {
        self.run_blocking(move |conn| {
            conn.transaction(|conn| {
                diesel::insert_into(robots::table)
                    .values(to_new_row(&robot))
                    .returning(robots::id)
                    .get_result::<i32>(conn)
            })
            .map_err(map_diesel_error)
        })
        .await
    }

    async fn update(&self, id: i32, patch: RobotPatch) -> Result<bool, RobotRepositoryError> {
        self.run_blocking(move |conn| {
            let affected = conn
                .transaction(|conn| {
                    diesel::update(robots::table.filter(robots::id.eq(id)))
                        .set(to_changeset(&patch))
                        .execute(conn)
                })
                .map_err(map_diesel_error)?;

            Ok(affected > 0)
        })
        .await
    }
}
