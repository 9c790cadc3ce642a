//! Sensor data HTTP handlers.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::SensorReadingRepositoryError;
use crate::domain::{Error, SensorReading};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// Sensor reading as rendered on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SensorReadingDto {
    /// Server-assigned identifier.
    pub id: i32,
    /// Robot the reading is attributed to.
    pub robot_id: i32,
    /// Free-text sensor category.
    pub sensor_type: String,
    /// Observed value.
    pub value: f64,
    /// RFC 3339 observation timestamp.
    pub timestamp: String,
}

impl From<SensorReading> for SensorReadingDto {
    fn from(value: SensorReading) -> Self {
        Self {
            id: value.id,
            robot_id: value.robot_id,
            sensor_type: value.sensor_type,
            value: value.value,
            timestamp: value.timestamp.to_rfc3339(),
        }
    }
}

/// Query parameters accepted by the sensor listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SensorDataQuery {
    /// Restrict the listing to one robot.
    pub robot_id: Option<i32>,
}

/// Response payload for the sensor listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct SensorDataResponse {
    /// Most recent readings, newest first, at most 100.
    pub sensor_data: Vec<SensorReadingDto>,
}

fn map_repository_error(err: &SensorReadingRepositoryError) -> Error {
    error!(error = %err, "sensor reading repository failure");
    Error::internal(err.to_string())
}

/// List recent sensor readings, newest first, capped at 100 rows.
#[utoipa::path(
    get,
    path = "/api/sensor-data",
    params(SensorDataQuery),
    responses(
        (status = 200, description = "Recent readings, newest first", body = SensorDataResponse),
        (status = 400, description = "Malformed query string", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tags = ["sensor-data"],
    operation_id = "listSensorData"
)]
#[get("/sensor-data")]
pub async fn list_sensor_data(
    state: web::Data<HttpState>,
    query: web::Query<SensorDataQuery>,
) -> ApiResult<web::Json<SensorDataResponse>> {
    let readings = state
        .sensors
        .list_recent(query.robot_id)
        .await
        .map_err(|err| map_repository_error(&err))?;

    Ok(web::Json(SensorDataResponse {
        sensor_data: readings.into_iter().map(SensorReadingDto::from).collect(),
    }))
}
