use crate::types::{AppError, Resource, Result};
use axum::{Json, extract::Path};

/// Static resource catalog. A future iteration could source this from
/// a database; the chat knowledge base is independent of it.
pub fn dummy_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: 1,
            title: "Understanding Anxiety".to_string(),
            content: "Anxiety is a normal human emotion...".to_string(),
        },
        Resource {
            id: 2,
            title: "Techniques for Stress Management".to_string(),
            content: "Deep breathing exercises can help...".to_string(),
        },
    ]
}

/// List all mental health resources
#[utoipa::path(
    get,
    path = "/api/v1/resources/",
    responses(
        (status = 200, description = "All resources", body = [Resource])
    ),
    tag = "resources"
)]
pub async fn get_all_resources() -> Json<Vec<Resource>> {
    Json(dummy_resources())
}

/// Get a single resource by its ID
#[utoipa::path(
    get,
    path = "/api/v1/resources/{id}",
    params(("id" = u32, Path, description = "Resource identifier")),
    responses(
        (status = 200, description = "The resource", body = Resource),
        (status = 404, description = "Resource not found")
    ),
    tag = "resources"
)]
pub async fn get_resource_by_id(Path(id): Path<u32>) -> Result<Json<Resource>> {
    dummy_resources()
        .into_iter()
        .find(|r| r.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))
}
