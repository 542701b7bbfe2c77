use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::department::DepartmentService,
        state::AppState,
    },
};

/// Tag for grouping department endpoints in OpenAPI documentation
pub static DEPARTMENT_TAG: &str = "department";

/// Create a department. The budget defaults to 0.
///
/// # Returns
/// - `201 Created` - The stored department
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `409 Conflict` - Name already used by another department
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateDepartmentDto,
    responses(
        (status = 201, description = "Successfully created department", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 409, description = "Department name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let department = DepartmentService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(department.into_dto())))
}

/// Update the supplied fields of a department.
///
/// Employees are matched to departments by name, so a rename detaches employees still carrying
/// the old label.
///
/// # Returns
/// - `200 OK` - The updated department
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No department with that id
/// - `409 Conflict` - Name already used by another department
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Department ID")),
    request_body = UpdateDepartmentDto,
    responses(
        (status = 200, description = "Successfully updated department", body = DepartmentDto),
        (status = 400, description = "Invalid department data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Department name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let department = DepartmentService::new(&state.db)
        .update(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

    Ok(Json(department.into_dto()))
}

/// Delete a department.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No department with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Successfully deleted department", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    if !DepartmentService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Department not found".to_string()));
    }

    Ok(Json(MessageDto::new("Department deleted")))
}
