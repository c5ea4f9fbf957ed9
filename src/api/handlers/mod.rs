//! Endpoint handlers.

pub mod chat;
pub mod resources;

use axum::Json;

/// Liveness message at the root path.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to the WellNest API" }))
}
