use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Build the API router. State is injected by the caller, so tests can
/// wire the same routes around stub components.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(crate::api::handlers::root))
        .route(
            "/api/v1/chat/message",
            post(crate::api::handlers::chat::post_message),
        )
        .route(
            "/api/v1/resources/",
            get(crate::api::handlers::resources::get_all_resources),
        )
        .route(
            "/api/v1/resources/{id}",
            get(crate::api::handlers::resources::get_resource_by_id),
        )
}
