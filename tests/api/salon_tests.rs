//! Salon API Tests

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{glow_salon, TestApp};

#[tokio::test]
async fn test_create_salon_with_services() {
    let app = TestApp::new().await;

    let response = app.server.post("/api/salon").json(&glow_salon()).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Salon created successfully");

    let salon = &body["salon"];
    assert_eq!(salon["name"], "Glow");
    assert_eq!(salon["city"], "Paris");
    assert_eq!(salon["image"], Value::Null);
    assert_eq!(salon["image_url"], "images/default.jpg");

    let services = salon["services"].as_array().unwrap();
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["service_name"], "Haircut");
    assert_eq!(services[0]["price"].as_f64(), Some(20.0));
    assert_eq!(services[1]["price"].as_f64(), Some(45.5));
    assert_eq!(services[1]["duration"], 60);
    assert!(services.iter().all(|s| s["salon_id"] == salon["id"]));
}

#[tokio::test]
async fn test_get_salon_is_repeatable() {
    let app = TestApp::new().await;
    let created = app.create_salon(glow_salon()).await;
    let id = created["id"].as_i64().unwrap();

    let (first_status, first) = app.get_salon(id).await;
    let (second_status, second) = app.get_salon(id).await;

    assert_eq!(first_status, 200);
    assert_eq!(second_status, 200);
    assert_eq!(first, second);
    assert_eq!(first, created);
}

#[tokio::test]
async fn test_get_unknown_salon_returns_not_found() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/salon/99999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 404);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_non_numeric_salon_id_is_rejected() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/salon/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_salon_without_name_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/salon")
        .json(&json!({"name": "   ", "city": "Paris"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "VALIDATION_ERROR");

    let listing = app.server.get("/api/salon").await.json::<Value>();
    assert_eq!(listing["count"], 0);
}

#[tokio::test]
async fn test_invalid_service_rejects_whole_salon() {
    let app = TestApp::new().await;
    let mut body = glow_salon();
    body["services"][1]["price"] = json!("free");

    let response = app.server.post("/api/salon").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("services[1].price"), "{}", message);

    let listing = app.server.get("/api/salon").await.json::<Value>();
    assert_eq!(listing["count"], 0);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/salon")
        .text("{\"name\": \"Glow\"")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_salons_full_and_summary() {
    let app = TestApp::new().await;
    app.create_salon(glow_salon()).await;
    app.create_salon(json!({"name": "Bare", "city": "Lyon"})).await;

    let full = app.server.get("/api/salon").await.json::<Value>();
    assert_eq!(full["count"], 2);
    let salons = full["salons"].as_array().unwrap();
    assert_eq!(salons[0]["services"].as_array().unwrap().len(), 2);
    assert_eq!(salons[1]["services"], json!([]));

    let summary = app.server.get("/api/salon?view=summary").await.json::<Value>();
    assert_eq!(summary["count"], 2);
    assert_eq!(
        summary["salons"][1],
        json!({
            "id": salons[1]["id"],
            "name": "Bare",
            "tagline": null,
            "city": "Lyon",
            "image": "images/default.jpg"
        })
    );

    let bare = app.server.get("/api/salons").await.json::<Value>();
    assert_eq!(bare, summary["salons"]);
}

#[tokio::test]
async fn test_update_salon_replaces_fields_and_appends_services() {
    let app = TestApp::new().await;
    let created = app.create_salon(glow_salon()).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/salon/{}", id))
        .json(&json!({
            "name": "Glow Studio",
            "city": "Nice",
            "services": [{"service_name": "Shave", "price": 10}]
        }))
        .await;

    response.assert_status_ok();
    let salon = &response.json::<Value>()["salon"];
    assert_eq!(salon["name"], "Glow Studio");
    assert_eq!(salon["city"], "Nice");
    assert_eq!(salon["tagline"], Value::Null);

    let names: Vec<&str> = salon["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["service_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Haircut", "Color", "Shave"]);
}

#[tokio::test]
async fn test_update_with_empty_name_leaves_salon_unchanged() {
    let app = TestApp::new().await;
    let created = app.create_salon(glow_salon()).await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/api/salon/{}", id))
        .json(&json!({"name": "", "city": "Nice"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let (_, stored) = app.get_salon(id).await;
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_update_unknown_salon_returns_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .put("/api/salon/99999")
        .json(&json!({"name": "Ghost"}))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_salon_removes_its_services() {
    let app = TestApp::new().await;
    let created = app.create_salon(glow_salon()).await;
    let id = created["id"].as_i64().unwrap();
    let service_id = created["services"][0]["id"].as_i64().unwrap();

    let response = app.server.delete(&format!("/api/salon/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Salon deleted successfully");

    let (status, _) = app.get_salon(id).await;
    assert_eq!(status, 404);

    let orphan = app
        .server
        .put(&format!("/api/service/{}", service_id))
        .json(&json!({"price": 1}))
        .await;
    orphan.assert_status(StatusCode::NOT_FOUND);

    let again = app.server.delete(&format!("/api/salon/{}", id)).await;
    again.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_multipart_create_stores_image() {
    let app = TestApp::new().await;
    let png = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    let form = MultipartForm::new()
        .add_text("name", "Glow")
        .add_text("city", "Paris")
        .add_text(
            "services",
            r#"[{"service_name": "Haircut", "price": "20", "duration": "30"}]"#,
        )
        .add_part(
            "image",
            Part::bytes(png.clone())
                .file_name("my glow.png")
                .mime_type("image/png"),
        );

    let response = app.server.post("/api/salon").multipart(form).await;

    response.assert_status(StatusCode::CREATED);
    let salon = response.json::<Value>()["salon"].clone();
    assert_eq!(salon["image"], "my_glow.png");
    assert_eq!(salon["image_url"], "uploads/my_glow.png");
    assert_eq!(salon["services"][0]["duration"], 30);

    let stored = std::fs::read(app.static_dir.path().join("uploads").join("my_glow.png")).unwrap();
    assert_eq!(stored, png);

    let served = app.server.get("/uploads/my_glow.png").await;
    served.assert_status_ok();
    assert_eq!(served.as_bytes().to_vec(), png);

    let summary = app.server.get("/api/salons").await.json::<Value>();
    assert_eq!(summary[0]["image"], "uploads/my_glow.png");
}

#[tokio::test]
async fn test_multipart_rejects_unsupported_image_type() {
    let app = TestApp::new().await;

    let form = MultipartForm::new().add_text("name", "Glow").add_part(
        "image",
        Part::bytes(b"#!/bin/sh".to_vec()).file_name("run.sh"),
    );

    let response = app.server.post("/api/salon").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(!app.static_dir.path().join("uploads").join("run.sh").exists());
    let listing = app.server.get("/api/salon").await.json::<Value>();
    assert_eq!(listing["count"], 0);
}

#[tokio::test]
async fn test_unknown_listing_view_is_a_json_error() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/salon?view=bogus").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], 400);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("bogus"));
}

#[tokio::test]
async fn test_same_image_name_keeps_both_files() {
    let app = TestApp::new().await;
    let upload = |name: &str, data: Vec<u8>| {
        MultipartForm::new()
            .add_text("name", name)
            .add_part("image", Part::bytes(data).file_name("front.png"))
    };

    let first = app.server.post("/api/salon").multipart(upload("Glow", vec![1, 1])).await;
    let second = app.server.post("/api/salon").multipart(upload("Shine", vec![2, 2])).await;

    first.assert_status(StatusCode::CREATED);
    second.assert_status(StatusCode::CREATED);
    assert_eq!(first.json::<Value>()["salon"]["image"], "front.png");
    assert_eq!(second.json::<Value>()["salon"]["image"], "front-1.png");

    let uploads = app.static_dir.path().join("uploads");
    assert_eq!(std::fs::read(uploads.join("front.png")).unwrap(), vec![1, 1]);
    assert_eq!(std::fs::read(uploads.join("front-1.png")).unwrap(), vec![2, 2]);
}
