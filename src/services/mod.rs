use thiserror::Error;

use crate::repository::errors::RepositoryError;
use crate::services::export::RenderError;

pub mod export;
pub mod forms;
pub mod report;

/// Failures surfaced by the service layer.
///
/// Store trouble stays a typed error so callers can tell "the store is down"
/// from "the user has not filled in anything yet" (`Ok(None)` from the
/// loaders).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("export failed: {0}")]
    Export(#[from] RenderError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
