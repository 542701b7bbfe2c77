use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        request::{
            CreateRequestDto, CreatedRequestDto, RecentRequestDto, RequestDto,
            RequestListItemDto, RequestQueryDto, RequestStatsDto, UpdateRequestStatusDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::request::RequestFilter,
        service::request::RequestService, state::AppState,
    },
};

/// Tag for grouping service request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

/// Submit a service request from the public contact form.
///
/// No authentication required. The request starts as `New` unless the payload names another
/// listed status.
///
/// # Returns
/// - `201 Created` - Confirmation message and the stored request
/// - `400 Bad Request` - Field validation failed or the status is not listed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    request_body = CreateRequestDto,
    responses(
        (status = 201, description = "Successfully submitted request", body = CreatedRequestDto),
        (status = 400, description = "Invalid request data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = RequestService::new(&state.db).create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedRequestDto {
            message: "Request submitted successfully".to_string(),
            request: request.into_dto(),
        }),
    ))
}

/// List service requests, newest first.
///
/// `status` and `service` are exact matches where `all` disables the filter; `search` matches
/// name, email or service case-insensitively as a substring.
///
/// # Returns
/// - `200 OK` - Matching requests
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = REQUEST_TAG,
    security(("bearer_auth" = [])),
    params(RequestQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved requests", body = Vec<RequestListItemDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<RequestQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let requests = RequestService::new(&state.db)
        .list(RequestFilter::from_query(query))
        .await?;

    Ok(Json(
        requests
            .into_iter()
            .map(|r| r.into_list_item_dto())
            .collect::<Vec<_>>(),
    ))
}

/// The ten most recently dated requests.
///
/// # Returns
/// - `200 OK` - Recent requests, newest first
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/requests/recent",
    tag = REQUEST_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved recent requests", body = Vec<RecentRequestDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let requests = RequestService::new(&state.db).recent().await?;

    Ok(Json(
        requests
            .into_iter()
            .map(|r| r.into_recent_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Request counts by service and acquisition source, plus response-time statistics.
///
/// # Returns
/// - `200 OK` - Request statistics
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/requests/stats",
    tag = REQUEST_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully computed request statistics", body = RequestStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_request_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let stats = RequestService::new(&state.db).stats().await?;

    Ok(Json(stats.into_dto()))
}

/// Move a request to another status.
///
/// Any listed status is accepted from any current status.
///
/// # Returns
/// - `200 OK` - The updated request
/// - `400 Bad Request` - Missing or unlisted status
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No request with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestStatusDto,
    responses(
        (status = 200, description = "Successfully updated request status", body = RequestDto),
        (status = 400, description = "Invalid or missing status", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRequestStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let request = RequestService::new(&state.db)
        .update_status(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Request not found".to_string()))?;

    Ok(Json(request.into_dto()))
}

/// Delete a request.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No request with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Successfully deleted request", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    if !RequestService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Request not found".to_string()));
    }

    Ok(Json(MessageDto::new("Request deleted")))
}
