//! Service entity and repository trait.
//!
//! Maps to the `services` table. A service always belongs to exactly one
//! salon and is deleted with it.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// A priced offering of a salon.
///
/// Maps to the `services` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - salon_id: INTEGER NOT NULL REFERENCES salons(id) ON DELETE CASCADE
/// - service_name: TEXT NOT NULL
/// - price: REAL NOT NULL DEFAULT 0
/// - duration: INTEGER NOT NULL DEFAULT 0 (minutes)
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: i64,
    pub salon_id: i64,
    pub service_name: String,
    pub price: f64,
    /// Duration in minutes
    pub duration: i64,
}

/// A validated service ready to be inserted under a salon.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub service_name: String,
    pub price: f64,
    pub duration: i64,
}

/// Repository trait for Service data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Find a service by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError>;

    /// All services of a salon, in insertion order.
    async fn find_by_salon_id(&self, salon_id: i64) -> Result<Vec<Service>, AppError>;

    /// Every service of every salon, in insertion order.
    async fn find_all(&self) -> Result<Vec<Service>, AppError>;

    /// Insert a service under a salon.
    ///
    /// Returns `AppError::Conflict` if the salon does not exist.
    async fn create(&self, salon_id: i64, service: &NewService) -> Result<Service, AppError>;

    /// Overwrite the stored service with the given values.
    async fn update(&self, service: &Service) -> Result<Service, AppError>;

    /// Delete a single service.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
