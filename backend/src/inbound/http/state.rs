//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O. The clock is
//! injected so server-assigned timestamps are deterministic under test.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    FleetStatsQuery, RobotRepository, SensorReadingRepository, TaskRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Robot reads and writes.
    pub robots: Arc<dyn RobotRepository>,
    /// Task reads.
    pub tasks: Arc<dyn TaskRepository>,
    /// Sensor reading reads.
    pub sensors: Arc<dyn SensorReadingRepository>,
    /// Fleet-wide aggregation reads.
    pub stats: Arc<dyn FleetStatsQuery>,
    /// Source of server-assigned timestamps.
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// State backed entirely by fixture ports and the system clock.
    ///
    /// Useful for handler tests and demos that do not exercise persistence.
    #[must_use]
    pub fn fixtures() -> Self {
        use crate::domain::ports::{
            FixtureFleetStatsQuery, FixtureRobotRepository, FixtureSensorReadingRepository,
            FixtureTaskRepository,
        };

        Self {
            robots: Arc::new(FixtureRobotRepository),
            tasks: Arc::new(FixtureTaskRepository),
            sensors: Arc::new(FixtureSensorReadingRepository),
            stats: Arc::new(FixtureFleetStatsQuery),
            clock: Arc::new(mockable::DefaultClock),
        }
    }
}
