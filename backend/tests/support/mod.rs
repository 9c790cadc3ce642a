//! Shared fixtures for integration tests: a migrated, seeded SQLite store
//! on a temporary file plus helpers to insert rows the API has no write
//! path for.

use chrono::{DateTime, Utc};
use diesel::RunQueryDsl;
use diesel::sql_types::{Double, Integer, Text, Timestamp};
use tempfile::NamedTempFile;

use fleetdash::inbound::http::state::HttpState;
use fleetdash::outbound::persistence::{DbPool, PoolConfig, initialise};
use fleetdash::server::build_http_state;

/// A migrated and seeded store backed by a temporary file.
///
/// The file guard keeps the database alive for the test's duration and
/// removes it afterwards.
pub struct TestDb {
    pool: DbPool,
    _file: NamedTempFile,
}

impl TestDb {
    /// Create a fresh store, run migrations, and seed the fixed fleet.
    pub async fn new() -> Self {
        let file = NamedTempFile::new().expect("temp database file");
        let path = file.path().to_str().expect("utf-8 temp path").to_owned();
        let pool = DbPool::new(PoolConfig::new(path).with_max_size(2)).expect("pool builds");
        initialise(&pool, Utc::now()).await.expect("store initialises");
        Self { pool, _file: file }
    }

    /// HTTP state wired to this store.
    pub fn state(&self) -> HttpState {
        build_http_state(&self.pool)
    }

    /// Insert a task row directly; the API exposes no task write path.
    pub fn insert_task(&self, robot_id: i32, status: &str, created_at: DateTime<Utc>) {
        let mut conn = self.pool.get().expect("connection");
        diesel::sql_query(
            "INSERT INTO tasks (robot_id, task_type, status, priority, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind::<Integer, _>(robot_id)
        .bind::<Text, _>("inspection")
        .bind::<Text, _>(status)
        .bind::<Integer, _>(1)
        .bind::<Timestamp, _>(created_at.naive_utc())
        .execute(&mut conn)
        .expect("task insert");
    }

    /// Insert a sensor reading directly; the API exposes no reading write path.
    pub fn insert_reading(&self, robot_id: i32, value: f64, timestamp: DateTime<Utc>) {
        let mut conn = self.pool.get().expect("connection");
        diesel::sql_query(
            "INSERT INTO sensor_data (robot_id, sensor_type, value, timestamp) \
             VALUES (?, ?, ?, ?)",
        )
        .bind::<Integer, _>(robot_id)
        .bind::<Text, _>("temperature")
        .bind::<Double, _>(value)
        .bind::<Timestamp, _>(timestamp.naive_utc())
        .execute(&mut conn)
        .expect("reading insert");
    }
}
