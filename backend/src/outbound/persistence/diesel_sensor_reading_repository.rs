//! SQLite-backed `SensorReadingRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::ports::{SensorReadingRepository, SensorReadingRepositoryError};
use crate::domain::{SENSOR_LISTING_CAP, SensorReading};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::SensorReadingRow;
use super::pool::DbPool;
use super::schema::sensor_data;

/// Diesel-backed implementation of the sensor reading repository port.
#[derive(Clone)]
pub struct DieselSensorReadingRepository {
    pool: DbPool,
}

impl DieselSensorReadingRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> Result<T, SensorReadingRepositoryError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, SensorReadingRepositoryError>
            + Send
            + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|err| {
                map_basic_pool_error(err, SensorReadingRepositoryError::connection)
            })?;
            f(&mut conn)
        })
        .await
        .map_err(|err| {
            SensorReadingRepositoryError::connection(format!("task join error: {err}"))
        })?
    }
}

fn map_diesel_error(error: diesel::result::Error) -> SensorReadingRepositoryError {
    map_basic_diesel_error(
        error,
        SensorReadingRepositoryError::query,
        SensorReadingRepositoryError::connection,
    )
}

fn row_to_reading(row: SensorReadingRow) -> SensorReading {
    let SensorReadingRow {
        id,
        robot_id,
        sensor_type,
        value,
        timestamp,
    } = row;

    SensorReading {
        id,
        robot_id,
        sensor_type,
        value,
        timestamp: timestamp.and_utc(),
    }
}

#[async_trait]
impl SensorReadingRepository for DieselSensorReadingRepository {
    async fn list_recent(
        &self,
        robot_id: Option<i32>,
    ) -> Result<Vec<SensorReading>, SensorReadingRepositoryError> {
        self.run_blocking(move |conn| {
            // Newest first; id descending breaks timestamp ties so paging
            // through identical timestamps stays deterministic.
            let mut query = sensor_data::table
                .order((sensor_data::timestamp.desc(), sensor_data::id.desc()))
                .limit(SENSOR_LISTING_CAP)
                .select(SensorReadingRow::as_select())
                .into_boxed();

            if let Some(robot_id) = robot_id {
                query = query.filter(sensor_data::robot_id.eq(robot_id));
            }

            let rows: Vec<SensorReadingRow> = query.load(conn).map_err(map_diesel_error)?;
            Ok(rows.into_iter().map(row_to_reading).collect())
        })
        .await
    }
}
