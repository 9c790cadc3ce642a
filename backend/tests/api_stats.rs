//! Statistics and task endpoint coverage against a real SQLite store.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::Utc;
use serde_json::Value;

use fleetdash::server::build_app;

mod support;

use support::TestDb;

#[actix_web::test]
async fn seeded_store_reports_consistent_stats() {
    let db = TestDb::new().await;
    let app = actix_test::init_service(build_app(db.state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/stats").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;

    assert_eq!(body.get("total_robots").and_then(Value::as_i64), Some(5));
    // (85 + 92 + 67 + 45 + 78) / 5
    assert_eq!(
        body.get("average_battery_level").and_then(Value::as_f64),
        Some(73.4)
    );
    assert_eq!(
        body.pointer("/robot_status_counts/active").and_then(Value::as_i64),
        Some(3)
    );
    assert_eq!(
        body.pointer("/robot_status_counts/idle").and_then(Value::as_i64),
        Some(1)
    );
    assert_eq!(
        body.pointer("/robot_status_counts/maintenance").and_then(Value::as_i64),
        Some(1)
    );

    // No tasks yet: empty map, zero total, no zero-count padding.
    assert_eq!(body["task_status_counts"], serde_json::json!({}));
    assert_eq!(body.get("total_tasks").and_then(Value::as_i64), Some(0));
}

#[actix_web::test]
async fn task_counts_group_by_status() {
    let db = TestDb::new().await;
    let now = Utc::now();
    db.insert_task(1, "pending", now);
    db.insert_task(1, "pending", now);
    db.insert_task(2, "completed", now);
    let app = actix_test::init_service(build_app(db.state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/stats").to_request(),
    )
    .await;

    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/task_status_counts/pending").and_then(Value::as_i64),
        Some(2)
    );
    assert_eq!(
        body.pointer("/task_status_counts/completed").and_then(Value::as_i64),
        Some(1)
    );
    assert_eq!(body.get("total_tasks").and_then(Value::as_i64), Some(3));
}

#[actix_web::test]
async fn total_robots_tracks_the_status_counts() {
    let db = TestDb::new().await;
    let app = actix_test::init_service(build_app(db.state())).await;

    let create = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/robots")
            .set_json(serde_json::json!({"name": "Rover", "battery_level": 50}))
            .to_request(),
    )
    .await;
    assert_eq!(create.status(), StatusCode::CREATED);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/stats").to_request(),
    )
    .await;
    let body: Value = actix_test::read_body_json(response).await;

    assert_eq!(body.get("total_robots").and_then(Value::as_i64), Some(6));
    let sum: i64 = body
        .get("robot_status_counts")
        .and_then(Value::as_object)
        .expect("counts map")
        .values()
        .filter_map(Value::as_i64)
        .sum();
    assert_eq!(sum, 6);
    // (85 + 92 + 67 + 45 + 78 + 50) / 6 = 69.5
    assert_eq!(
        body.get("average_battery_level").and_then(Value::as_f64),
        Some(69.5)
    );
}

#[actix_web::test]
async fn tasks_list_renders_inserted_rows_in_id_order() {
    let db = TestDb::new().await;
    let now = Utc::now();
    db.insert_task(2, "pending", now);
    db.insert_task(3, "completed", now);
    let app = actix_test::init_service(build_app(db.state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/tasks").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let tasks = body.get("tasks").and_then(Value::as_array).expect("tasks");
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].get("robot_id").and_then(Value::as_i64), Some(2));
    assert_eq!(tasks[0].get("status").and_then(Value::as_str), Some("pending"));
    assert_eq!(tasks[1].get("robot_id").and_then(Value::as_i64), Some(3));
}

#[actix_web::test]
async fn empty_task_store_lists_nothing() {
    let db = TestDb::new().await;
    let app = actix_test::init_service(build_app(db.state())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/tasks").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("tasks").and_then(Value::as_array).map(Vec::len),
        Some(0)
    );
}
