//! Service request data repository.
//!
//! Besides plain CRUD this repository runs the filtered list query built by
//! [`request_query`] and the fixed "recent" query for the dashboard.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{
        filter::{apply_search, request_query},
        updated_row,
    },
    error::AppError,
    model::request::{CreateRequestParams, Request, RequestFilter, RequestStatus},
};

pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new request dated now.
    pub async fn create(&self, params: CreateRequestParams) -> Result<Request, AppError> {
        let now = Utc::now();

        let entity = entity::request::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            service: ActiveValue::Set(params.service),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            found_us: ActiveValue::Set(params.found_us),
            date: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Request::from_entity(entity)
    }

    /// Gets every request, newest first.
    pub async fn get_all(&self) -> Result<Vec<Request>, AppError> {
        self.find_filtered(&RequestFilter::default()).await
    }

    /// Gets the requests matching `filter`, newest first.
    pub async fn find_filtered(&self, filter: &RequestFilter) -> Result<Vec<Request>, AppError> {
        let requests = request_query(filter)
            .all(self.db)
            .await?
            .into_iter()
            .map(Request::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(apply_search(requests, filter.search.as_deref()))
    }

    /// Gets the `limit` most recently dated requests.
    pub async fn recent(&self, limit: u64) -> Result<Vec<Request>, AppError> {
        entity::prelude::Request::find()
            .order_by_desc(entity::request::Column::Date)
            .order_by_desc(entity::request::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Request::from_entity)
            .collect()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Request>, AppError> {
        entity::prelude::Request::find_by_id(id)
            .one(self.db)
            .await?
            .map(Request::from_entity)
            .transpose()
    }

    /// Sets the status of an existing request and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - The updated request
    /// - `Ok(None)` - No request with that id
    /// - `Err(AppError)` - The store failed
    pub async fn update_status(
        &self,
        id: i32,
        status: RequestStatus,
    ) -> Result<Option<Request>, AppError> {
        let entity = entity::request::ActiveModel {
            id: ActiveValue::Unchanged(id),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await;

        updated_row(entity)?.map(Request::from_entity).transpose()
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Request::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
