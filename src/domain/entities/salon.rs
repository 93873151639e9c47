//! Salon entity and repository trait.
//!
//! Maps to the `salons` table in the database schema.

use async_trait::async_trait;

use super::service::{NewService, Service};
use crate::shared::error::AppError;

/// Represents a salon listing in the directory.
///
/// Maps to the `salons` table:
/// - id: INTEGER PRIMARY KEY AUTOINCREMENT
/// - name: TEXT NOT NULL
/// - tagline, description, address, city, phone: TEXT NULL
/// - image: TEXT NULL (stored filename, not a path)
#[derive(Debug, Clone, PartialEq)]
pub struct Salon {
    /// Generated primary key
    pub id: i64,

    /// Display name (never blank)
    pub name: String,

    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,

    /// Filename of the uploaded image, if any
    pub image: Option<String>,
}

/// The text scalars of a salon.
///
/// Creation and update both write every one of these fields; an absent
/// optional field is stored as NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalonFields {
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl SalonFields {
    /// Check the domain rule for salon scalars: the name must not be blank.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name: Salon name is required".to_string());
        }
        Ok(())
    }
}

/// Repository trait for Salon data access operations.
///
/// Writes that touch both salons and services run in a single transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalonRepository: Send + Sync {
    /// List every salon in insertion order.
    async fn find_all(&self) -> Result<Vec<Salon>, AppError>;

    /// Find a salon by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Salon>, AppError>;

    /// Check whether a salon exists.
    async fn exists(&self, id: i64) -> Result<bool, AppError>;

    /// Insert a salon and its initial services atomically.
    async fn create_with_services(
        &self,
        fields: &SalonFields,
        image: Option<String>,
        services: &[NewService],
    ) -> Result<(Salon, Vec<Service>), AppError>;

    /// Overwrite the salon scalars and append services atomically.
    ///
    /// Returns `AppError::NotFound` if the salon does not exist.
    async fn update_with_services(
        &self,
        id: i64,
        fields: &SalonFields,
        services: &[NewService],
    ) -> Result<Salon, AppError>;

    /// Delete a salon; its services are removed by the cascading foreign key.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
