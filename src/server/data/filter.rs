//! Query & filter builder for service requests.
//!
//! Status and service are exact matches pushed down to the store as a SeaORM [`Condition`].
//! The search term is a case-insensitive literal substring match against name, email or
//! service. SQLite's `lower()` only folds ASCII, so the search runs over the fetched rows with
//! Unicode lowercasing on both sides. All present parts are AND-ed together.

use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select};

use crate::server::model::request::{Request, RequestFilter};

/// Builds the store query for a request list, newest first.
///
/// An unrestricted filter adds no `WHERE` clause at all.
pub fn request_query(filter: &RequestFilter) -> Select<entity::request::Entity> {
    let mut query = entity::prelude::Request::find();

    if !filter.is_unrestricted() {
        query = query.filter(request_condition(filter));
    }

    query
        .order_by_desc(entity::request::Column::Date)
        .order_by_desc(entity::request::Column::Id)
}

/// Builds the exact-match store predicate for `status` and `service`.
pub fn request_condition(filter: &RequestFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = &filter.status {
        condition = condition.add(entity::request::Column::Status.eq(status.as_str()));
    }

    if let Some(service) = &filter.service {
        condition = condition.add(entity::request::Column::Service.eq(service.as_str()));
    }

    condition
}

/// Keeps the requests whose name, email or service contains `search`, ignoring case.
pub fn apply_search(requests: Vec<Request>, search: Option<&str>) -> Vec<Request> {
    let Some(search) = search else {
        return requests;
    };

    let needle = search.to_lowercase();

    requests
        .into_iter()
        .filter(|request| matches_search(request, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(request: &Request, needle: &str) -> bool {
    [&request.name, &request.email, &request.service]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
