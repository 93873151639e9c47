//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use salon_directory::config::{
    CorsSettings, DatabaseSettings, ServerSettings, Settings, UploadSettings,
};
use salon_directory::infrastructure::database;
use salon_directory::startup::{build_router, AppState};

/// Test application backed by an in-memory database and a scratch static dir
pub struct TestApp {
    pub server: TestServer,
    pub static_dir: TempDir,
}

impl TestApp {
    /// Create a new test application with a fresh, migrated database
    pub async fn new() -> Self {
        let static_dir = tempfile::tempdir().expect("temp static dir");
        let settings = test_settings(&static_dir);

        let pool = database::create_pool(&settings.database)
            .await
            .expect("in-memory pool");
        database::run_migrations(&pool).await.expect("migrations");

        let state = AppState::new(pool, settings);
        let server = TestServer::new(build_router(state)).expect("test server");

        Self { server, static_dir }
    }

    /// Create a salon through the API and return its JSON representation
    pub async fn create_salon(&self, body: Value) -> Value {
        let response = self.server.post("/api/salon").json(&body).await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json::<Value>()["salon"].clone()
    }

    /// Fetch a salon, returning status and body
    pub async fn get_salon(&self, id: i64) -> (u16, Value) {
        let response = self.server.get(&format!("/api/salon/{}", id)).await;
        (response.status_code().as_u16(), response.json::<Value>())
    }
}

fn test_settings(static_dir: &TempDir) -> Settings {
    let uploads = static_dir.path().join("uploads");

    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            acquire_timeout: 5,
        },
        uploads: UploadSettings {
            dir: uploads.to_string_lossy().into_owned(),
            static_dir: static_dir.path().to_string_lossy().into_owned(),
            public_prefix: "uploads".to_string(),
            default_image: "images/default.jpg".to_string(),
            max_upload_bytes: 1024 * 1024,
        },
        cors: CorsSettings {
            allowed_origins: Vec::new(),
        },
        environment: "test".to_string(),
    }
}

/// The salon used throughout the directory examples
pub fn glow_salon() -> Value {
    json!({
        "name": "Glow",
        "tagline": "Shine on",
        "description": "Neighbourhood salon",
        "address": "1 Main St",
        "city": "Paris",
        "phone": "0102030405",
        "services": [
            {"service_name": "Haircut", "price": 20, "duration": 30},
            {"service_name": "Color", "price": "45.5", "duration": "60"}
        ]
    })
}
