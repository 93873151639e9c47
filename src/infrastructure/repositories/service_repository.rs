//! Service Repository Implementation
//!
//! SQLite implementation of the ServiceRepository trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::{NewService, Service, ServiceRepository};
use crate::shared::error::AppError;

/// Database row representation of the services table.
#[derive(Debug, sqlx::FromRow)]
pub(super) struct ServiceRow {
    id: i64,
    salon_id: i64,
    service_name: String,
    price: f64,
    duration: i64,
}

impl ServiceRow {
    pub(super) fn into_service(self) -> Service {
        Service {
            id: self.id,
            salon_id: self.salon_id,
            service_name: self.service_name,
            price: self.price,
            duration: self.duration,
        }
    }
}

/// Translate a failed service write, surfacing dangling salon references
/// and rejected values.
pub(super) fn map_write_error(e: sqlx::Error, salon_id: i64) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            AppError::Conflict(format!("Salon {} does not exist", salon_id))
        }
        sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
            AppError::Validation(format!("service rejected by the store: {}", db_err.message()))
        }
        _ => AppError::Database(e),
    }
}

/// SQLite service repository implementation.
#[derive(Clone)]
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new SqliteServiceRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Service>, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, salon_id, service_name, price, duration FROM services WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_service()))
    }

    async fn find_by_salon_id(&self, salon_id: i64) -> Result<Vec<Service>, AppError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
            SELECT id, salon_id, service_name, price, duration
            FROM services
            WHERE salon_id = ?
            ORDER BY id
            "#,
        )
        .bind(salon_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_service()).collect())
    }

    async fn find_all(&self) -> Result<Vec<Service>, AppError> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, salon_id, service_name, price, duration FROM services ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_service()).collect())
    }

    async fn create(&self, salon_id: i64, service: &NewService) -> Result<Service, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            INSERT INTO services (salon_id, service_name, price, duration)
            VALUES (?, ?, ?, ?)
            RETURNING id, salon_id, service_name, price, duration
            "#,
        )
        .bind(salon_id)
        .bind(&service.service_name)
        .bind(service.price)
        .bind(service.duration)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, salon_id))?;

        Ok(row.into_service())
    }

    async fn update(&self, service: &Service) -> Result<Service, AppError> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            UPDATE services
            SET service_name = ?,
                price = ?,
                duration = ?
            WHERE id = ?
            RETURNING id, salon_id, service_name, price, duration
            "#,
        )
        .bind(&service.service_name)
        .bind(service.price)
        .bind(service.duration)
        .bind(service.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, service.salon_id))?
        .ok_or_else(|| AppError::NotFound(format!("Service {} not found", service.id)))?;

        Ok(row.into_service())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service {} not found", id)));
        }

        Ok(())
    }
}
