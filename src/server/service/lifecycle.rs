//! Service request lifecycle rules.
//!
//! The lifecycle only enforces vocabulary membership: any listed status is an acceptable
//! target from any current status. Rejection happens before the store is touched.

use crate::server::{error::AppError, model::request::RequestStatus};

/// Resolves the target of a status update.
///
/// # Returns
/// - `Ok(RequestStatus)` - `target` is one of New, Contacted, In Progress, Completed, Cancelled
/// - `Err(AppError::InvalidStatus)` - `target` is missing or outside the vocabulary
pub fn resolve_transition_target(target: Option<&str>) -> Result<RequestStatus, AppError> {
    let Some(label) = target else {
        return Err(AppError::InvalidStatus("<missing>".to_string()));
    };

    RequestStatus::from_label(label).ok_or_else(|| AppError::InvalidStatus(label.to_string()))
}

/// Resolves the status a new request starts in.
///
/// Requests start as `New` unless the payload names another status from the vocabulary.
pub fn initial_status(requested: Option<&str>) -> Result<RequestStatus, AppError> {
    match requested {
        None => Ok(RequestStatus::default()),
        Some(label) if label.trim().is_empty() => Ok(RequestStatus::default()),
        Some(label) => resolve_transition_target(Some(label)),
    }
}

/// Logs a transition; leaving a terminal state is allowed but worth a trace.
pub fn log_transition(id: i32, from: RequestStatus, to: RequestStatus) {
    if from.is_terminal() && from != to {
        tracing::info!(
            "Request {} reopened from terminal status {} to {}",
            id,
            from.as_str(),
            to.as_str()
        );
    } else {
        tracing::info!(
            "Request {} status {} -> {}",
            id,
            from.as_str(),
            to.as_str()
        );
    }
}
