//! Fleet statistics HTTP handler.

use std::collections::BTreeMap;

use actix_web::{get, web};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::FleetStatsQueryError;
use crate::domain::{Error, FleetStats};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// Fleet statistics as rendered on the wire.
///
/// Statuses absent from the store are absent from the maps rather than
/// reported as zero.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Robot count per status string.
    pub robot_status_counts: BTreeMap<String, i64>,
    /// Mean battery percentage, rounded to two decimal places; 0 when the
    /// fleet is empty.
    pub average_battery_level: f64,
    /// Task count per status string.
    pub task_status_counts: BTreeMap<String, i64>,
    /// Total robot count.
    pub total_robots: i64,
    /// Total task count.
    pub total_tasks: i64,
}

impl From<FleetStats> for StatsResponse {
    fn from(value: FleetStats) -> Self {
        Self {
            robot_status_counts: value.robot_status_counts,
            average_battery_level: value.average_battery_level,
            task_status_counts: value.task_status_counts,
            total_robots: value.total_robots,
            total_tasks: value.total_tasks,
        }
    }
}

fn map_query_error(err: &FleetStatsQueryError) -> Error {
    error!(error = %err, "fleet stats query failure");
    Error::internal(err.to_string())
}

/// Aggregate statistics over the whole store.
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Fleet-wide aggregates", body = StatsResponse),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tags = ["stats"],
    operation_id = "getStats"
)]
#[get("/stats")]
pub async fn get_stats(state: web::Data<HttpState>) -> ApiResult<web::Json<StatsResponse>> {
    let stats = state
        .stats
        .fleet_stats()
        .await
        .map_err(|err| map_query_error(&err))?;

    Ok(web::Json(StatsResponse::from(stats)))
}
