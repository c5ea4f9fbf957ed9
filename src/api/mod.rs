//! HTTP API Handlers and Routes
//!
//! The REST layer for WellNest, built on the Axum web framework. This
//! layer is deliberately thin: handlers validate the wire shape via
//! serde and delegate straight to the chat orchestrator or static data.
//!
//! # API Endpoints
//!
//! ## Chat (`/api/v1/chat`)
//! - `POST /api/v1/chat/message` - Send a message, receive the chatbot's reply
//!
//! ## Resources (`/api/v1/resources`)
//! - `GET /api/v1/resources/` - List mental health resources
//! - `GET /api/v1/resources/{id}` - Get a single resource
//!
//! ## Liveness
//! - `GET /` - Welcome message
//!
//! The chat endpoint always answers 200 with a response string:
//! retrieval and generation failures degrade to fixed replies inside
//! the orchestrator rather than surfacing as HTTP errors.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use crate::types::{ChatMessageRequest, ChatMessageResponse, Resource};
use utoipa::OpenApi;

/// OpenAPI description of the public surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::chat::post_message,
        handlers::resources::get_all_resources,
        handlers::resources::get_resource_by_id,
    ),
    components(schemas(ChatMessageRequest, ChatMessageResponse, Resource)),
    tags(
        (name = "chat", description = "Retrieval-augmented chat"),
        (name = "resources", description = "Static mental health resources")
    )
)]
pub struct ApiDoc;
