use crate::AppState;
use crate::types::{ChatMessageRequest, ChatMessageResponse};
use axum::{Json, extract::State};

/// Chat with the wellness assistant
#[utoipa::path(
    post,
    path = "/api/v1/chat/message",
    request_body = ChatMessageRequest,
    responses(
        (status = 200, description = "Chat response", body = ChatMessageResponse),
        (status = 422, description = "Malformed request body")
    ),
    tag = "chat"
)]
pub async fn post_message(
    State(state): State<AppState>,
    Json(payload): Json<ChatMessageRequest>,
) -> Json<ChatMessageResponse> {
    // The handler's only job is to delegate to the orchestrator, which
    // always produces a response string.
    let response = state.orchestrator.respond(&payload.message).await;

    Json(ChatMessageResponse { response })
}
