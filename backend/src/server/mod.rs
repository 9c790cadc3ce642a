//! Server construction and wiring.
//!
//! `build_app` assembles the Actix application so integration tests can run
//! the exact production routing table against an in-process service.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::inbound::http::error::ApiError;
use crate::inbound::http::health::health_check;
use crate::inbound::http::robots::{create_robot, get_robot, list_robots, update_robot};
use crate::inbound::http::sensors::list_sensor_data;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::stats::get_stats;
use crate::inbound::http::tasks::list_tasks;
use crate::outbound::persistence::{
    DbPool, DieselFleetStatsQuery, DieselRobotRepository, DieselSensorReadingRepository,
    DieselTaskRepository,
};

/// Wire the HTTP state to Diesel-backed adapters sharing one pool.
#[must_use]
pub fn build_http_state(pool: &DbPool) -> HttpState {
    HttpState {
        robots: Arc::new(DieselRobotRepository::new(pool.clone())),
        tasks: Arc::new(DieselTaskRepository::new(pool.clone())),
        sensors: Arc::new(DieselSensorReadingRepository::new(pool.clone())),
        stats: Arc::new(DieselFleetStatsQuery::new(pool.clone())),
        clock: Arc::new(mockable::DefaultClock),
    }
}

/// Assemble the Actix application around the given state.
///
/// Framework-level extraction failures (malformed JSON bodies, query
/// strings, path parameters) are rewritten into the standard error
/// envelope so clients never see an HTML or plain-text 400.
pub fn build_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::invalid_request(format!("invalid JSON body: {err}")).into());
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::invalid_request(format!("invalid query string: {err}")).into());
    let path_config = web::PathConfig::default()
        .error_handler(|err, _req| ApiError::invalid_request(format!("invalid path parameter: {err}")).into());

    let api = web::scope("/api")
        .service(list_robots)
        .service(create_robot)
        .service(get_robot)
        .service(update_robot)
        .service(list_tasks)
        .service(list_sensor_data)
        .service(get_stats)
        .service(health_check);

    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config)
        .app_data(query_config)
        .app_data(path_config)
        .service(api)
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// # Errors
///
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: &ServerConfig, state: HttpState) -> std::io::Result<Server> {
    let bind_addr = config.bind_addr;
    let server = HttpServer::new(move || build_app(state.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;

    use super::*;

    #[actix_web::test]
    async fn malformed_json_body_gets_the_error_envelope() {
        let app = actix_test::init_service(build_app(HttpState::fixtures())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/robots")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
        assert!(body.get("error").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn non_numeric_robot_id_gets_the_error_envelope() {
        let app = actix_test::init_service(build_app(HttpState::fixtures())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/robots/abc").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("code").and_then(Value::as_str),
            Some("invalid_request")
        );
    }

    #[actix_web::test]
    async fn health_is_served_under_api() {
        let app = actix_test::init_service(build_app(HttpState::fixtures())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
