use axum::{response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is running", body = MessageDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    Json(MessageDto::new("Server is running"))
}
