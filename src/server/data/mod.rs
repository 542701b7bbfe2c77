//! Record store layer.
//!
//! One repository per collection. Repositories use SeaORM entity models internally and hand
//! domain models back to the service layer; status labels are parsed at this boundary. The
//! request filter builder lives in [`filter`].

pub mod client;
pub mod department;
pub mod employee;
pub mod filter;
pub mod invoice;
pub mod request;

use sea_orm::DbErr;

use crate::server::error::AppError;

/// Treats an update that matched no row as a missing record.
///
/// The row can be deleted between the load and the write of an update; that is reported as
/// `None` so callers answer with NotFound rather than a store failure.
fn updated_row<M>(result: Result<M, DbErr>) -> Result<Option<M>, AppError> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(DbErr::RecordNotUpdated) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod test;
