//! Port for fleet-wide aggregation reads.

use async_trait::async_trait;

use crate::domain::FleetStats;

use super::define_port_error;

define_port_error! {
    /// Errors raised by fleet statistics adapters.
    pub enum FleetStatsQueryError {
        /// Backing store connection could not be established.
        Connection { message: String } =>
            "fleet stats connection failed: {message}",
        /// Aggregation query failed during execution.
        Query { message: String } =>
            "fleet stats query failed: {message}",
    }
}

/// Read-only port computing summary statistics over current store contents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FleetStatsQuery: Send + Sync {
    /// Compute statistics from the current table contents.
    async fn fleet_stats(&self) -> Result<FleetStats, FleetStatsQueryError>;
}

/// Fixture implementation reporting an empty fleet.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFleetStatsQuery;

#[async_trait]
impl FleetStatsQuery for FixtureFleetStatsQuery {
    async fn fleet_stats(&self) -> Result<FleetStats, FleetStatsQueryError> {
        Ok(FleetStats::from_parts(
            std::collections::BTreeMap::new(),
            &[],
            std::collections::BTreeMap::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_empty_fleet() {
        let query = FixtureFleetStatsQuery;
        let stats = query.fleet_stats().await.expect("fixture stats succeed");
        assert_eq!(stats.total_robots, 0);
        assert_eq!(stats.average_battery_level, 0.0);
    }
}
