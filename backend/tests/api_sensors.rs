//! Sensor data endpoint coverage against a real SQLite store.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::{Duration, Utc};
use serde_json::Value;

use fleetdash::server::build_app;

mod support;

use support::TestDb;

async fn fetch_sensor_data(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
) -> Value {
    let response =
        actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    actix_test::read_body_json(response).await
}

#[actix_web::test]
async fn listing_is_capped_at_one_hundred_newest_rows() {
    let db = TestDb::new().await;
    let base = Utc::now() - Duration::hours(3);
    for offset in 0..120 {
        db.insert_reading(1, f64::from(offset), base + Duration::seconds(i64::from(offset)));
    }
    let app = actix_test::init_service(build_app(db.state())).await;

    let body = fetch_sensor_data(&app, "/api/sensor-data").await;
    let readings = body
        .get("sensor_data")
        .and_then(Value::as_array)
        .expect("sensor_data array");
    assert_eq!(readings.len(), 100);

    // Newest first: the first row carries the latest value, the 20 oldest
    // rows fall off the end.
    assert_eq!(readings[0].get("value").and_then(Value::as_f64), Some(119.0));
    assert_eq!(
        readings[99].get("value").and_then(Value::as_f64),
        Some(20.0)
    );
}

#[actix_web::test]
async fn equal_timestamps_tie_break_on_id_descending() {
    let db = TestDb::new().await;
    let stamp = Utc::now();
    for value in 0..5 {
        db.insert_reading(1, f64::from(value), stamp);
    }
    let app = actix_test::init_service(build_app(db.state())).await;

    let body = fetch_sensor_data(&app, "/api/sensor-data").await;
    let ids: Vec<i64> = body
        .get("sensor_data")
        .and_then(Value::as_array)
        .expect("sensor_data array")
        .iter()
        .filter_map(|reading| reading.get("id").and_then(Value::as_i64))
        .collect();

    let mut sorted = ids.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(ids, sorted);
}

#[actix_web::test]
async fn robot_filter_restricts_the_listing() {
    let db = TestDb::new().await;
    let now = Utc::now();
    db.insert_reading(1, 1.0, now);
    db.insert_reading(2, 2.0, now);
    db.insert_reading(2, 3.0, now);
    let app = actix_test::init_service(build_app(db.state())).await;

    let body = fetch_sensor_data(&app, "/api/sensor-data?robot_id=2").await;
    let readings = body
        .get("sensor_data")
        .and_then(Value::as_array)
        .expect("sensor_data array");
    assert_eq!(readings.len(), 2);
    assert!(
        readings
            .iter()
            .all(|reading| reading.get("robot_id").and_then(Value::as_i64) == Some(2))
    );
}

#[actix_web::test]
async fn empty_store_lists_no_readings() {
    let db = TestDb::new().await;
    let app = actix_test::init_service(build_app(db.state())).await;

    let body = fetch_sensor_data(&app, "/api/sensor-data").await;
    assert_eq!(
        body.get("sensor_data").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
}

#[actix_web::test]
async fn non_numeric_robot_filter_is_bad_request() {
    let db = TestDb::new().await;
    let app = actix_test::init_service(build_app(db.state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/sensor-data?robot_id=abc")
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
}
