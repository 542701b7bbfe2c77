use sea_orm::DatabaseConnection;

use crate::{
    model::request::{CreateRequestDto, UpdateRequestStatusDto},
    server::{
        data::request::RequestRepository,
        error::AppError,
        model::{
            request::{CreateRequestParams, Request, RequestFilter},
            stats::RequestStats,
        },
        service::{
            aggregate, lifecycle,
            validation::{Rule, Validator},
        },
    },
};

/// Number of requests returned by the dashboard's recent list.
pub const RECENT_LIMIT: u64 = 10;

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a contact-form submission and stores it
    ///
    /// The request starts as `New` unless the payload names another listed status.
    pub async fn create(&self, dto: CreateRequestDto) -> Result<Request, AppError> {
        Validator::new()
            .text("name", dto.name.as_deref(), &[Rule::Required])
            .text("email", dto.email.as_deref(), &[Rule::Required, Rule::Email])
            .text("phone", dto.phone.as_deref(), &[Rule::Required])
            .text("service", dto.service.as_deref(), &[Rule::Required])
            .text("description", dto.description.as_deref(), &[Rule::Required])
            .finish()?;

        let status = lifecycle::initial_status(dto.status.as_deref())?;

        let request = RequestRepository::new(self.db)
            .create(CreateRequestParams::from_dto(dto, status))
            .await?;

        tracing::info!("Received request {} for {}", request.id, request.service);

        Ok(request)
    }

    /// Lists requests matching `filter`, newest first
    pub async fn list(&self, filter: RequestFilter) -> Result<Vec<Request>, AppError> {
        tracing::debug!("Listing requests with filter {:?}", filter);

        RequestRepository::new(self.db).find_filtered(&filter).await
    }

    pub async fn recent(&self) -> Result<Vec<Request>, AppError> {
        RequestRepository::new(self.db).recent(RECENT_LIMIT).await
    }

    /// Moves a request to a new status
    ///
    /// The target is checked against the lifecycle vocabulary before the store is read, so an
    /// invalid target never changes the record.
    /// Returns None if the request doesn't exist
    pub async fn update_status(
        &self,
        id: i32,
        dto: UpdateRequestStatusDto,
    ) -> Result<Option<Request>, AppError> {
        let target = lifecycle::resolve_transition_target(dto.status.as_deref())?;

        let repo = RequestRepository::new(self.db);

        let Some(current) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let Some(updated) = repo.update_status(id, target).await? else {
            return Ok(None);
        };

        lifecycle::log_transition(id, current.status, updated.status);

        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = RequestRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted request {}", id);
        }

        Ok(deleted)
    }

    /// Computes request statistics from a fresh read
    pub async fn stats(&self) -> Result<RequestStats, AppError> {
        let requests = RequestRepository::new(self.db).get_all().await?;

        Ok(aggregate::request_stats(&requests))
    }
}
