//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod salon;
pub mod service;

use std::sync::Arc;

use crate::application::services::{DirectoryError, DirectoryServiceImpl};
use crate::infrastructure::repositories::{SqliteSalonRepository, SqliteServiceRepository};
use crate::infrastructure::storage::LocalImageStore;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Directory service wired to the SQLite repositories
pub(crate) type AppDirectoryService =
    DirectoryServiceImpl<SqliteSalonRepository, SqliteServiceRepository, LocalImageStore>;

/// Build the directory service from the shared store handle
pub(crate) fn directory_service(state: &AppState) -> AppDirectoryService {
    DirectoryServiceImpl::new(
        Arc::new(SqliteSalonRepository::new(state.db.clone())),
        Arc::new(SqliteServiceRepository::new(state.db.clone())),
        state.images.clone(),
        state.image_paths.clone(),
    )
}

/// Parse a numeric path identifier
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {} ID", entity)))
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::SalonNotFound(_) | DirectoryError::ServiceNotFound(_) => {
                AppError::NotFound(e.to_string())
            }
            DirectoryError::Validation(msg) => AppError::Validation(msg),
            DirectoryError::Integrity(msg) => AppError::Conflict(msg),
            DirectoryError::Unexpected(detail) => AppError::Internal(detail),
        }
    }
}
