//! Salon Repository Implementation
//!
//! SQLite implementation of the SalonRepository trait.

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::service_repository::{map_write_error, ServiceRow};
use crate::domain::{NewService, Salon, SalonFields, SalonRepository, Service};
use crate::shared::error::AppError;

/// Database row representation of the salons table.
#[derive(Debug, sqlx::FromRow)]
struct SalonRow {
    id: i64,
    name: String,
    tagline: Option<String>,
    description: Option<String>,
    address: Option<String>,
    city: Option<String>,
    phone: Option<String>,
    image: Option<String>,
}

impl SalonRow {
    fn into_salon(self) -> Salon {
        Salon {
            id: self.id,
            name: self.name,
            tagline: self.tagline,
            description: self.description,
            address: self.address,
            city: self.city,
            phone: self.phone,
            image: self.image,
        }
    }
}

/// SQLite salon repository implementation.
#[derive(Clone)]
pub struct SqliteSalonRepository {
    pool: SqlitePool,
}

impl SqliteSalonRepository {
    /// Create a new SqliteSalonRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert services under a salon inside an open transaction.
    async fn insert_services(
        tx: &mut Transaction<'static, Sqlite>,
        salon_id: i64,
        services: &[NewService],
    ) -> Result<Vec<Service>, AppError> {
        let mut created = Vec::with_capacity(services.len());

        for service in services {
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
            .fetch_one(&mut **tx)
            .await
            .map_err(|e| map_write_error(e, salon_id))?;

            created.push(row.into_service());
        }

        Ok(created)
    }
}

#[async_trait]
impl SalonRepository for SqliteSalonRepository {
    async fn find_all(&self) -> Result<Vec<Salon>, AppError> {
        let rows = sqlx::query_as::<_, SalonRow>(
            r#"
            SELECT id, name, tagline, description, address, city, phone, image
            FROM salons
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_salon()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Salon>, AppError> {
        let row = sqlx::query_as::<_, SalonRow>(
            r#"
            SELECT id, name, tagline, description, address, city, phone, image
            FROM salons
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_salon()))
    }

    async fn exists(&self, id: i64) -> Result<bool, AppError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM salons WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(found != 0)
    }

    async fn create_with_services(
        &self,
        fields: &SalonFields,
        image: Option<String>,
        services: &[NewService],
    ) -> Result<(Salon, Vec<Service>), AppError> {
        // Dropping the transaction on any error rolls everything back
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, SalonRow>(
            r#"
            INSERT INTO salons (name, tagline, description, address, city, phone, image)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, name, tagline, description, address, city, phone, image
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.tagline)
        .bind(&fields.description)
        .bind(&fields.address)
        .bind(&fields.city)
        .bind(&fields.phone)
        .bind(&image)
        .fetch_one(&mut *tx)
        .await?;

        let salon = row.into_salon();
        let created = Self::insert_services(&mut tx, salon.id, services).await?;

        tx.commit().await?;

        Ok((salon, created))
    }

    async fn update_with_services(
        &self,
        id: i64,
        fields: &SalonFields,
        services: &[NewService],
    ) -> Result<Salon, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, SalonRow>(
            r#"
            UPDATE salons
            SET name = ?,
                tagline = ?,
                description = ?,
                address = ?,
                city = ?,
                phone = ?
            WHERE id = ?
            RETURNING id, name, tagline, description, address, city, phone, image
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.tagline)
        .bind(&fields.description)
        .bind(&fields.address)
        .bind(&fields.city)
        .bind(&fields.phone)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Salon {} not found", id)))?;

        Self::insert_services(&mut tx, id, services).await?;

        tx.commit().await?;

        Ok(row.into_salon())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM salons WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Salon {} not found", id)));
        }

        Ok(())
    }
}
