use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        invoice::{CreateInvoiceDto, FinanceStatsDto, InvoiceDto, UpdateInvoiceDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::finance::FinanceService,
        state::AppState,
    },
};

/// Tag for grouping finance endpoints in OpenAPI documentation
pub static FINANCE_TAG: &str = "finance";

/// List all invoices, newest invoice date first.
///
/// # Returns
/// - `200 OK` - Every stored invoice
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/finance/invoices",
    tag = FINANCE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully retrieved invoices", body = Vec<InvoiceDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let invoices = FinanceService::new(&state.db).get_invoices().await?;

    Ok(Json(
        invoices
            .into_iter()
            .map(|i| i.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create an invoice. Status defaults to `Pending` and the due date to the invoice date.
///
/// # Returns
/// - `201 Created` - The stored invoice
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/finance/invoices",
    tag = FINANCE_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateInvoiceDto,
    responses(
        (status = 201, description = "Successfully created invoice", body = InvoiceDto),
        (status = 400, description = "Invalid invoice data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateInvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let invoice = FinanceService::new(&state.db).create_invoice(payload).await?;

    Ok((StatusCode::CREATED, Json(invoice.into_dto())))
}

/// Update the supplied fields of an invoice.
///
/// # Returns
/// - `200 OK` - The updated invoice
/// - `400 Bad Request` - Field validation failed
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No invoice with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/finance/invoices/{id}",
    tag = FINANCE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Invoice ID")),
    request_body = UpdateInvoiceDto,
    responses(
        (status = 200, description = "Successfully updated invoice", body = InvoiceDto),
        (status = 400, description = "Invalid invoice data", body = ValidationErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let invoice = FinanceService::new(&state.db)
        .update_invoice(id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Invoice not found".to_string()))?;

    Ok(Json(invoice.into_dto()))
}

/// Delete an invoice.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No invoice with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/finance/invoices/{id}",
    tag = FINANCE_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Successfully deleted invoice", body = MessageDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    if !FinanceService::new(&state.db).delete_invoice(id).await? {
        return Err(AppError::NotFound("Invoice not found".to_string()));
    }

    Ok(Json(MessageDto::new("Invoice deleted")))
}

/// Revenue totals, revenue by service and monthly revenue for the current year.
///
/// # Returns
/// - `200 OK` - Finance statistics
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/finance/stats",
    tag = FINANCE_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Successfully computed finance statistics", body = FinanceStatsDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_finance_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.identity_gate, &headers).require()?;

    let stats = FinanceService::new(&state.db).stats().await?;

    Ok(Json(stats.into_dto()))
}
