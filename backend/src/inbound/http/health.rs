//! Liveness endpoint.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::inbound::http::state::HttpState;

/// Health check payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process is serving requests.
    #[schema(example = "healthy")]
    pub status: String,
    /// RFC 3339 server time at the moment of the check.
    pub timestamp: String,
}

/// Report process liveness. No store interaction takes place.
#[utoipa::path(
    get,
    path = "/api/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tags = ["health"],
    operation_id = "healthCheck"
)]
#[get("/health")]
pub async fn health_check(state: web::Data<HttpState>) -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "healthy".to_owned(),
        timestamp: state.clock.utc().to_rfc3339(),
    })
}
