mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

fn sample_record() -> serde_json::Value {
    json!({
        "sensor_model": "Fluke 1735",
        "measure_unit": "V",
        "device": "panel-01",
        "location": "Building A - Floor 1",
        "data_type": "Voltage",
        "data": 220.5
    })
}

#[tokio::test]
async fn create_and_fetch_round_trip() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/v1/sensors", sample_record()).await;
    assert_eq!(status, StatusCode::CREATED);
    let record = &body["sensor_record"];
    assert_eq!(record["sensor_model"], "Fluke 1735");
    assert_eq!(record["data"], 220.5);
    assert!(record["created_at"].is_string());
    assert!(record["updated_at"].is_null());

    let id = record["id"].as_str().expect("id missing").to_string();
    let (status, body) = app.get(&format!("/api/v1/sensors/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sensor_record"]["id"], id.as_str());
}

#[tokio::test]
async fn list_filters_by_sensor_model_substring() {
    let app = TestApp::new().await;

    app.post("/api/v1/sensors", sample_record()).await;
    let mut other = sample_record();
    other["sensor_model"] = json!("Shelly EM");
    app.post("/api/v1/sensors", other).await;

    let (status, body) = app.get("/api/v1/sensors?sensor_model=Fluke").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], 1);
    assert_eq!(body["total"], 1);
    assert_eq!(body["records"][0]["sensor_model"], "Fluke 1735");

    // no filter returns both
    let (_, body) = app.get("/api/v1/sensors").await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn list_paginates() {
    let app = TestApp::new().await;
    for _ in 0..5 {
        app.post("/api/v1/sensors", sample_record()).await;
    }

    let (status, body) = app.get("/api/v1/sensors?page=1&per_page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"], 2);
    assert_eq!(body["total"], 5);

    let (_, body) = app.get("/api/v1/sensors?page=3&per_page=2").await;
    assert_eq!(body["results"], 1);
}

#[tokio::test]
async fn patch_updates_fields_and_bumps_updated_at() {
    let app = TestApp::new().await;

    let (_, body) = app.post("/api/v1/sensors", sample_record()).await;
    let id = body["sensor_record"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .patch(
            &format!("/api/v1/sensors/{id}"),
            json!({ "data": 231.7, "location": "Building B - Basement" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let record = &body["sensor_record"];
    assert_eq!(record["data"], 231.7);
    assert_eq!(record["location"], "Building B - Basement");
    // untouched fields survive
    assert_eq!(record["sensor_model"], "Fluke 1735");
    assert!(record["updated_at"].is_string());
}

#[tokio::test]
async fn delete_then_fetch_is_not_found() {
    let app = TestApp::new().await;

    let (_, body) = app.post("/api/v1/sensors", sample_record()).await;
    let id = body["sensor_record"]["id"].as_str().unwrap().to_string();

    let (status, _) = app.delete(&format!("/api/v1/sensors/{id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = app.get(&format!("/api/v1/sensors/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn unknown_id_yields_not_found_on_patch_and_delete() {
    let app = TestApp::new().await;
    let missing = uuid::Uuid::new_v4();

    let (status, _) = app
        .patch(&format!("/api/v1/sensors/{missing}"), json!({ "data": 1.0 }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&format!("/api/v1/sensors/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_fields_are_rejected() {
    let app = TestApp::new().await;

    let mut payload = sample_record();
    payload["sensor_model"] = json!("");
    let (status, body) = app.post("/api/v1/sensors", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn health_endpoints_respond() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");

    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"]["status"], "up");
}
