//! Service API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{glow_salon, TestApp};

#[tokio::test]
async fn test_list_services_of_salon() {
    let app = TestApp::new().await;
    let salon = app.create_salon(glow_salon()).await;
    let id = salon["id"].as_i64().unwrap();

    let response = app.server.get(&format!("/api/salon/{}/service", id)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), salon["services"]);
}

#[tokio::test]
async fn test_list_services_of_unknown_salon() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/salon/99999/service").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_service_defaults_numbers_to_zero() {
    let app = TestApp::new().await;
    let salon = app.create_salon(json!({"name": "Glow"})).await;
    let id = salon["id"].as_i64().unwrap();

    let response = app
        .server
        .post(&format!("/api/salon/{}/service", id))
        .json(&json!({"service_name": "Consultation"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let service = &response.json::<Value>()["service"];
    assert_eq!(service["salon_id"], id);
    assert_eq!(service["price"].as_f64(), Some(0.0));
    assert_eq!(service["duration"], 0);
}

#[tokio::test]
async fn test_create_service_requires_name() {
    let app = TestApp::new().await;
    let salon = app.create_salon(json!({"name": "Glow"})).await;
    let id = salon["id"].as_i64().unwrap();

    let response = app
        .server
        .post(&format!("/api/salon/{}/service", id))
        .json(&json!({"price": 10}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let services = app
        .server
        .get(&format!("/api/salon/{}/service", id))
        .await
        .json::<Value>();
    assert_eq!(services, json!([]));
}

#[tokio::test]
async fn test_create_service_under_unknown_salon() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/salon/99999/service")
        .json(&json!({"service_name": "Haircut", "price": 20}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_partial_update_changes_only_price() {
    let app = TestApp::new().await;
    let salon = app.create_salon(glow_salon()).await;
    let service = salon["services"][0].clone();
    let service_id = service["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/service/{}", service_id))
        .json(&json!({"price": 25}))
        .await;

    response.assert_status_ok();
    let updated = &response.json::<Value>()["service"];
    assert_eq!(updated["price"].as_f64(), Some(25.0));
    assert_eq!(updated["service_name"], service["service_name"]);
    assert_eq!(updated["duration"], service["duration"]);
    assert_eq!(updated["salon_id"], service["salon_id"]);
}

#[tokio::test]
async fn test_update_rejects_blank_service_name() {
    let app = TestApp::new().await;
    let salon = app.create_salon(glow_salon()).await;
    let service_id = salon["services"][0]["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/service/{}", service_id))
        .json(&json!({"service_name": "  "}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_service() {
    let app = TestApp::new().await;
    let salon = app.create_salon(glow_salon()).await;
    let salon_id = salon["id"].as_i64().unwrap();
    let service_id = salon["services"][0]["id"].as_i64().unwrap();

    let response = app.server.delete(&format!("/api/service/{}", service_id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Service deleted successfully");

    let (_, stored) = app.get_salon(salon_id).await;
    let remaining = stored["services"].as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["service_name"], "Color");

    let again = app.server.delete(&format!("/api/service/{}", service_id)).await;
    again.assert_status(StatusCode::NOT_FOUND);
}
