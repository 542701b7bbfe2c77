use crate::server::{
    data::request::RequestRepository,
    error::AppError,
    model::request::{CreateRequestParams, RequestFilter, RequestStatus},
};
use test_utils::{
    builder::TestBuilder,
    factory::{helpers::utc_date, request::RequestFactory},
};

mod find_filtered;
