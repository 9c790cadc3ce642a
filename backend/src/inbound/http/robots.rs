//! Robot HTTP handlers.
//!
//! ```text
//! GET  /api/robots       List the fleet
//! POST /api/robots       Register a robot
//! GET  /api/robots/{id}  Fetch one robot
//! PUT  /api/robots/{id}  Partially update one robot
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::RobotRepositoryError;
use crate::domain::{Error, NewRobot, Robot, RobotPatch, RobotStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, check_battery_level, non_empty, parse_optional_status, require_non_empty,
};

/// Battery percentage assigned when the create payload omits it.
const DEFAULT_BATTERY_LEVEL: i32 = 100;
/// Location assigned when the create payload omits it.
const DEFAULT_LOCATION: &str = "Unknown";

/// Robot as rendered on the wire.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RobotDto {
    /// Server-assigned identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Operational status (active | idle | maintenance).
    #[schema(example = "idle")]
    pub status: String,
    /// Battery percentage, 0 to 100.
    pub battery_level: i32,
    /// Free-text location.
    pub location: String,
    /// RFC 3339 timestamp of the last write.
    #[schema(example = "2026-08-28T10:15:00+00:00")]
    pub last_updated: String,
}

impl From<Robot> for RobotDto {
    fn from(value: Robot) -> Self {
        Self {
            id: value.id,
            name: value.name,
            status: value.status.to_string(),
            battery_level: value.battery_level,
            location: value.location,
            last_updated: value.last_updated.to_rfc3339(),
        }
    }
}

/// Response payload for the robot listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct RobotListResponse {
    /// All robots, ordered by id ascending.
    pub robots: Vec<RobotDto>,
}

/// Request payload for registering a robot.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRobotRequest {
    /// Display name; required and non-empty.
    pub name: Option<String>,
    /// Initial status; defaults to `idle`.
    pub status: Option<String>,
    /// Initial battery percentage; defaults to 100.
    pub battery_level: Option<i32>,
    /// Initial location; defaults to `Unknown`.
    pub location: Option<String>,
}

/// Response payload confirming a creation.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRobotResponse {
    /// Fixed confirmation message.
    pub message: String,
    /// Id assigned to the new robot.
    pub id: i32,
}

/// Request payload for updating a robot. Omitted fields keep their values.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRobotRequest {
    /// Replacement status, if provided.
    pub status: Option<String>,
    /// Replacement battery percentage, if provided.
    pub battery_level: Option<i32>,
    /// Replacement location, if provided.
    pub location: Option<String>,
}

/// Response payload confirming an update.
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateRobotResponse {
    /// Fixed confirmation message.
    pub message: String,
}

fn map_repository_error(err: &RobotRepositoryError) -> Error {
    error!(error = %err, "robot repository failure");
    Error::internal(err.to_string())
}

fn parse_new_robot(payload: CreateRobotRequest, state: &HttpState) -> Result<NewRobot, Error> {
    let CreateRobotRequest {
        name,
        status,
        battery_level,
        location,
    } = payload;

    Ok(NewRobot {
        name: require_non_empty(name, FieldName::new("name"))?,
        status: parse_optional_status(status, FieldName::new("status"))?
            .unwrap_or(RobotStatus::Idle),
        battery_level: check_battery_level(
            battery_level.unwrap_or(DEFAULT_BATTERY_LEVEL),
            FieldName::new("battery_level"),
        )?,
        location: non_empty(
            location.unwrap_or_else(|| DEFAULT_LOCATION.to_owned()),
            FieldName::new("location"),
        )?,
        last_updated: state.clock.utc(),
    })
}

fn parse_robot_patch(payload: UpdateRobotRequest, state: &HttpState) -> Result<RobotPatch, Error> {
    let UpdateRobotRequest {
        status,
        battery_level,
        location,
    } = payload;

    Ok(RobotPatch {
        status: parse_optional_status(status, FieldName::new("status"))?,
        battery_level: battery_level
            .map(|level| check_battery_level(level, FieldName::new("battery_level")))
            .transpose()?,
        location: location
            .map(|value| non_empty(value, FieldName::new("location")))
            .transpose()?,
        last_updated: state.clock.utc(),
    })
}

/// List the whole fleet.
#[utoipa::path(
    get,
    path = "/api/robots",
    responses(
        (status = 200, description = "All robots, ordered by id", body = RobotListResponse),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tags = ["robots"],
    operation_id = "listRobots"
)]
#[get("/robots")]
pub async fn list_robots(state: web::Data<HttpState>) -> ApiResult<web::Json<RobotListResponse>> {
    let robots = state
        .robots
        .list()
        .await
        .map_err(|err| map_repository_error(&err))?;

    Ok(web::Json(RobotListResponse {
        robots: robots.into_iter().map(RobotDto::from).collect(),
    }))
}

/// Register a robot.
///
/// The payload is validated before any store interaction: `name` is required
/// and non-empty, `status` must be a known status, `battery_level` must be
/// 0 to 100. Violations yield 400 with field details.
#[utoipa::path(
    post,
    path = "/api/robots",
    request_body = CreateRobotRequest,
    responses(
        (status = 201, description = "Robot created", body = CreateRobotResponse),
        (status = 400, description = "Invalid payload", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tags = ["robots"],
    operation_id = "createRobot"
)]
#[post("/robots")]
pub async fn create_robot(
    state: web::Data<HttpState>,
    payload: web::Json<CreateRobotRequest>,
) -> ApiResult<HttpResponse> {
    let robot = parse_new_robot(payload.into_inner(), &state)?;

    let id = state
        .robots
        .create(robot)
        .await
        .map_err(|err| map_repository_error(&err))?;

    Ok(HttpResponse::Created().json(CreateRobotResponse {
        message: "Robot created successfully".to_owned(),
        id,
    }))
}

/// Fetch one robot by id.
#[utoipa::path(
    get,
    path = "/api/robots/{id}",
    params(("id" = i32, Path, description = "Robot identifier")),
    responses(
        (status = 200, description = "The robot", body = RobotDto),
        (status = 404, description = "No such robot", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tags = ["robots"],
    operation_id = "getRobot"
)]
#[get("/robots/{id}")]
pub async fn get_robot(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<RobotDto>> {
    let id = path.into_inner();
    let robot = state
        .robots
        .find_by_id(id)
        .await
        .map_err(|err| map_repository_error(&err))?
        .ok_or_else(|| Error::not_found("Robot not found"))?;

    Ok(web::Json(RobotDto::from(robot)))
}

/// Partially update one robot.
///
/// Provided fields are validated and written; omitted fields keep their
/// stored values. `last_updated` is always refreshed. An update that
/// matches no row yields 404 rather than a false success.
#[utoipa::path(
    put,
    path = "/api/robots/{id}",
    params(("id" = i32, Path, description = "Robot identifier")),
    request_body = UpdateRobotRequest,
    responses(
        (status = 200, description = "Robot updated", body = UpdateRobotResponse),
        (status = 400, description = "Invalid payload", body = ApiError),
        (status = 404, description = "No such robot", body = ApiError),
        (status = 500, description = "Store failure", body = ApiError)
    ),
    tags = ["robots"],
    operation_id = "updateRobot"
)]
#[put("/robots/{id}")]
pub async fn update_robot(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateRobotRequest>,
) -> ApiResult<web::Json<UpdateRobotResponse>> {
    let id = path.into_inner();
    let patch = parse_robot_patch(payload.into_inner(), &state)?;

    let matched = state
        .robots
        .update(id, patch)
        .await
        .map_err(|err| map_repository_error(&err))?;

    if !matched {
        return Err(Error::not_found("Robot not found").into());
    }

    Ok(web::Json(UpdateRobotResponse {
        message: "Robot updated successfully".to_owned(),
    }))
}

#[cfg(test)]
#[path = "robots_tests.rs"]
mod tests;
