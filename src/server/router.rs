//! Route table and OpenAPI document.

use axum::{
    routing::{get, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, FieldErrorDto, MessageDto, ValidationErrorDto},
        client::{ClientDto, CreateClientDto, UpdateClientDto},
        department::{
            CreateDepartmentDto, DepartmentDto, DepartmentSummaryDto, UpdateDepartmentDto,
        },
        employee::{
            CreateEmployeeDto, DepartmentCountDto, EmployeeDto, EmployeeStatsDto, SalaryStatsDto,
            UpdateEmployeeDto,
        },
        invoice::{
            CreateInvoiceDto, FinanceStatsDto, InvoiceDto, MonthlyRevenueDto, ServiceRevenueDto,
            UpdateInvoiceDto,
        },
        request::{
            CreateRequestDto, CreatedRequestDto, RecentRequestDto, RequestDto,
            RequestListItemDto, RequestStatsDto, ServiceCountDto, SourceCountDto,
            UpdateRequestStatusDto,
        },
    },
    server::{
        controller::{client, department, employee, finance, health, request},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Back-office API",
        description = "Clients, staff, invoices and service requests with dashboard statistics"
    ),
    paths(
        health::health,
        request::create_request,
        request::get_requests,
        request::get_recent_requests,
        request::get_request_stats,
        request::update_request_status,
        request::delete_request,
        client::get_clients,
        client::get_client,
        client::create_client,
        client::update_client,
        client::delete_client,
        employee::get_employees,
        employee::create_employee,
        employee::update_employee,
        employee::delete_employee,
        employee::get_employee_stats,
        employee::get_department_stats,
        department::create_department,
        department::update_department,
        department::delete_department,
        finance::get_invoices,
        finance::create_invoice,
        finance::update_invoice,
        finance::delete_invoice,
        finance::get_finance_stats,
    ),
    components(schemas(
        ErrorDto,
        FieldErrorDto,
        ValidationErrorDto,
        MessageDto,
        ClientDto,
        CreateClientDto,
        UpdateClientDto,
        DepartmentDto,
        DepartmentSummaryDto,
        CreateDepartmentDto,
        UpdateDepartmentDto,
        EmployeeDto,
        CreateEmployeeDto,
        UpdateEmployeeDto,
        EmployeeStatsDto,
        SalaryStatsDto,
        DepartmentCountDto,
        InvoiceDto,
        CreateInvoiceDto,
        UpdateInvoiceDto,
        FinanceStatsDto,
        ServiceRevenueDto,
        MonthlyRevenueDto,
        RequestDto,
        RequestListItemDto,
        RecentRequestDto,
        CreateRequestDto,
        CreatedRequestDto,
        UpdateRequestStatusDto,
        RequestStatsDto,
        ServiceCountDto,
        SourceCountDto,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "request", description = "Service requests and their lifecycle"),
        (name = "client", description = "Client records"),
        (name = "employee", description = "Employees and staff statistics"),
        (name = "department", description = "Departments and budgets"),
        (name = "finance", description = "Invoices and revenue statistics"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Registers the bearer token scheme referenced by protected routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/requests",
            get(request::get_requests).post(request::create_request),
        )
        .route("/api/requests/recent", get(request::get_recent_requests))
        .route("/api/requests/stats", get(request::get_request_stats))
        .route(
            "/api/requests/{id}",
            put(request::update_request_status).delete(request::delete_request),
        )
        .route(
            "/api/clients",
            get(client::get_clients).post(client::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(client::get_client)
                .put(client::update_client)
                .delete(client::delete_client),
        )
        .route(
            "/api/employees",
            get(employee::get_employees).post(employee::create_employee),
        )
        .route("/api/employees/stats", get(employee::get_employee_stats))
        .route(
            "/api/employees/departments",
            get(employee::get_department_stats),
        )
        .route(
            "/api/employees/{id}",
            put(employee::update_employee).delete(employee::delete_employee),
        )
        .route(
            "/api/departments",
            axum::routing::post(department::create_department),
        )
        .route(
            "/api/departments/{id}",
            put(department::update_department).delete(department::delete_department),
        )
        .route(
            "/api/finance/invoices",
            get(finance::get_invoices).post(finance::create_invoice),
        )
        .route(
            "/api/finance/invoices/{id}",
            put(finance::update_invoice).delete(finance::delete_invoice),
        )
        .route("/api/finance/stats", get(finance::get_finance_stats))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
