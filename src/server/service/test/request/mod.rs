use crate::{
    model::request::{CreateRequestDto, UpdateRequestStatusDto},
    server::{
        error::AppError,
        model::request::{RequestFilter, RequestStatus},
        service::request::RequestService,
    },
};
use chrono::Duration;
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::utc_date, request::RequestFactory},
};

mod create;
mod stats;
mod update_status;

fn contact_form() -> CreateRequestDto {
    CreateRequestDto {
        name: Some("John Smith".to_string()),
        email: Some("john@example.com".to_string()),
        phone: Some("555-0100".to_string()),
        service: Some("Consulting".to_string()),
        description: Some("Quarterly review".to_string()),
        status: None,
        found_us: Some("Google".to_string()),
    }
}
