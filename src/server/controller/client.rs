use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        client::{ClientDto, CreateClientDto, UpdateClientDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "client";

/// List all clients in insertion order.
///
/// # Returns
/// - `200 OK` - Every stored client
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClientDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let clients = ClientService::new(&state.db).get_all().await?;

    Ok(Json(
        clients.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get a single client.
///
/// # Returns
/// - `200 OK` - The client
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No client with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let client = ClientService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    Ok(Json(client.into_dto()))
}

/// Create a client. The status starts as `Active`.
///
/// # Returns
/// - `201 Created` - The stored client
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `409 Conflict` - Email already used by another client
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Successfully created client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let client = ClientService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// Update the supplied fields of a client.
///
/// # Returns
/// - `200 OK` - The updated client
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No client with that id
/// - `409 Conflict` - Email already used by another client
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let client = ClientService::new(&state.db)
        .update(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

    Ok(Json(client.into_dto()))
}

/// Delete a client. Invoices referencing the client are kept.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No client with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Successfully deleted client", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    if !ClientService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Client not found".to_string()));
    }

    Ok(Json(MessageDto::new("Client deleted")))
}
