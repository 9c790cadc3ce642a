//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST path and wire schema so tooling can
//! generate clients against the backend without reading handler source.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::health::HealthResponse;
use crate::inbound::http::robots::{
    CreateRobotRequest, CreateRobotResponse, RobotDto, RobotListResponse, UpdateRobotRequest,
    UpdateRobotResponse,
};
use crate::inbound::http::sensors::{SensorDataResponse, SensorReadingDto};
use crate::inbound::http::stats::StatsResponse;
use crate::inbound::http::tasks::{TaskDto, TaskListResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleetdash API",
        description = "HTTP interface for robot fleet monitoring: robots, tasks, sensor data, and aggregate statistics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::robots::list_robots,
        crate::inbound::http::robots::create_robot,
        crate::inbound::http::robots::get_robot,
        crate::inbound::http::robots::update_robot,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::sensors::list_sensor_data,
        crate::inbound::http::stats::get_stats,
        crate::inbound::http::health::health_check,
    ),
    components(schemas(
        ApiError,
        ErrorCode,
        RobotDto,
        RobotListResponse,
        CreateRobotRequest,
        CreateRobotResponse,
        UpdateRobotRequest,
        UpdateRobotResponse,
        TaskDto,
        TaskListResponse,
        SensorReadingDto,
        SensorDataResponse,
        StatsResponse,
        HealthResponse,
    )),
    tags(
        (name = "robots", description = "Robot registry reads and writes"),
        (name = "tasks", description = "Task listing"),
        (name = "sensor-data", description = "Recent sensor readings"),
        (name = "stats", description = "Fleet-wide aggregates"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
