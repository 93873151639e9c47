//! Directory Service
//!
//! The salon directory operations: listing, reading and writing salons
//! together with their services.
//!
//! Rules enforced here, independent of the transport:
//! - a salon name is required and never blank
//! - every service write requires a non-blank `service_name`; `price` and
//!   `duration` default to zero when absent and must otherwise coerce
//! - updating a salon replaces all of its text scalars and *appends* the
//!   supplied services; existing services are kept
//! - a service is only ever written under an existing salon

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    coerce_duration, coerce_price, ImagePaths, ImageStore, ImageUpload, NewService, Salon,
    SalonFields, SalonRepository, Service, ServiceRepository,
};
use crate::shared::error::AppError;

/// Directory service trait
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// List all salons in the requested projection
    async fn list_salons(&self, view: SalonView) -> Result<SalonListing, DirectoryError>;

    /// Get a salon with its services
    async fn get_salon(&self, id: i64) -> Result<SalonDto, DirectoryError>;

    /// Create a salon, its initial services and optionally its image, as one unit
    async fn create_salon(
        &self,
        request: SalonInputDto,
        image: Option<ImageUpload>,
    ) -> Result<SalonDto, DirectoryError>;

    /// Replace the salon's text fields and append the given services
    async fn update_salon(&self, id: i64, request: SalonInputDto) -> Result<SalonDto, DirectoryError>;

    /// Delete a salon and all of its services
    async fn delete_salon(&self, id: i64) -> Result<(), DirectoryError>;

    /// List the services of a salon
    async fn list_services(&self, salon_id: i64) -> Result<Vec<ServiceDto>, DirectoryError>;

    /// Create a service under an existing salon
    async fn create_service(&self, salon_id: i64, spec: ServiceSpecDto) -> Result<ServiceDto, DirectoryError>;

    /// Partially update a service; omitted fields keep their value
    async fn update_service(&self, id: i64, patch: ServicePatchDto) -> Result<ServiceDto, DirectoryError>;

    /// Delete a single service
    async fn delete_service(&self, id: i64) -> Result<(), DirectoryError>;
}

/// Projection of the salon listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalonView {
    /// Every field plus the services of each salon
    #[default]
    Full,
    /// Id, name, tagline, city and image display path
    Summary,
}

/// Salon listing in one of the two projections
#[derive(Debug, Clone, PartialEq)]
pub enum SalonListing {
    Full(Vec<SalonDto>),
    Summary(Vec<SalonSummaryDto>),
}

impl SalonListing {
    pub fn len(&self) -> usize {
        match self {
            SalonListing::Full(salons) => salons.len(),
            SalonListing::Summary(salons) => salons.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Project either listing down to summaries.
    pub fn into_summaries(self) -> Vec<SalonSummaryDto> {
        match self {
            SalonListing::Full(salons) => salons.into_iter().map(SalonSummaryDto::from).collect(),
            SalonListing::Summary(salons) => salons,
        }
    }
}

/// Salon create/update input
#[derive(Debug, Clone, Default)]
pub struct SalonInputDto {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub services: Vec<ServiceSpecDto>,
}

/// Service input as received; numeric fields are coerced explicitly
#[derive(Debug, Clone, Default)]
pub struct ServiceSpecDto {
    pub service_name: Option<String>,
    pub price: Option<Value>,
    pub duration: Option<Value>,
}

/// Partial service update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct ServicePatchDto {
    pub service_name: Option<String>,
    pub price: Option<Value>,
    pub duration: Option<Value>,
}

/// Salon data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct SalonDto {
    pub id: i64,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub image_path: String,
    pub services: Vec<ServiceDto>,
}

impl SalonDto {
    pub fn from_salon(salon: Salon, services: Vec<Service>, paths: &ImagePaths) -> Self {
        Self {
            image_path: paths.display_path(salon.image.as_deref()),
            id: salon.id,
            name: salon.name,
            tagline: salon.tagline,
            description: salon.description,
            address: salon.address,
            city: salon.city,
            phone: salon.phone,
            image: salon.image,
            services: services.into_iter().map(ServiceDto::from).collect(),
        }
    }
}

/// Salon summary data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct SalonSummaryDto {
    pub id: i64,
    pub name: String,
    pub tagline: Option<String>,
    pub city: Option<String>,
    pub image_path: String,
}

impl SalonSummaryDto {
    pub fn from_salon(salon: Salon, paths: &ImagePaths) -> Self {
        Self {
            image_path: paths.display_path(salon.image.as_deref()),
            id: salon.id,
            name: salon.name,
            tagline: salon.tagline,
            city: salon.city,
        }
    }
}

impl From<SalonDto> for SalonSummaryDto {
    fn from(dto: SalonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            tagline: dto.tagline,
            city: dto.city,
            image_path: dto.image_path,
        }
    }
}

/// Service data transfer object
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDto {
    pub id: i64,
    pub salon_id: i64,
    pub service_name: String,
    pub price: f64,
    pub duration: i64,
}

impl From<Service> for ServiceDto {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            salon_id: service.salon_id,
            service_name: service.service_name,
            price: service.price,
            duration: service.duration,
        }
    }
}

/// Directory service errors
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Salon {0} not found")]
    SalonNotFound(i64),

    #[error("Service {0} not found")]
    ServiceNotFound(i64),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<AppError> for DirectoryError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Validation(msg) | AppError::BadRequest(msg) => DirectoryError::Validation(msg),
            AppError::Conflict(msg) => DirectoryError::Integrity(msg),
            other => DirectoryError::Unexpected(other.to_string()),
        }
    }
}

/// DirectoryService implementation
pub struct DirectoryServiceImpl<S, V, I>
where
    S: SalonRepository,
    V: ServiceRepository,
    I: ImageStore,
{
    salon_repo: Arc<S>,
    service_repo: Arc<V>,
    image_store: Arc<I>,
    image_paths: ImagePaths,
}

impl<S, V, I> DirectoryServiceImpl<S, V, I>
where
    S: SalonRepository,
    V: ServiceRepository,
    I: ImageStore,
{
    pub fn new(salon_repo: Arc<S>, service_repo: Arc<V>, image_store: Arc<I>, image_paths: ImagePaths) -> Self {
        Self {
            salon_repo,
            service_repo,
            image_store,
            image_paths,
        }
    }

    async fn ensure_salon(&self, id: i64) -> Result<(), DirectoryError> {
        if self.salon_repo.exists(id).await? {
            Ok(())
        } else {
            Err(DirectoryError::SalonNotFound(id))
        }
    }

    async fn load_salon(&self, id: i64) -> Result<SalonDto, DirectoryError> {
        let salon = self
            .salon_repo
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::SalonNotFound(id))?;
        let services = self.service_repo.find_by_salon_id(id).await?;

        Ok(SalonDto::from_salon(salon, services, &self.image_paths))
    }
}

/// Turn raw salon input into validated scalars and services.
fn validate_salon(request: SalonInputDto) -> Result<(SalonFields, Vec<NewService>), DirectoryError> {
    let fields = SalonFields {
        name: request.name.unwrap_or_default().trim().to_string(),
        tagline: request.tagline,
        description: request.description,
        address: request.address,
        city: request.city,
        phone: request.phone,
    };
    fields.validate().map_err(DirectoryError::Validation)?;

    let services = request
        .services
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            validate_service(spec).map_err(|msg| DirectoryError::Validation(format!("services[{}].{}", i, msg)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((fields, services))
}

/// The single validation rule shared by every service creation path.
fn validate_service(spec: &ServiceSpecDto) -> Result<NewService, String> {
    let service_name = required_service_name(spec.service_name.as_deref())?;
    let price = coerce_price(spec.price.as_ref())?;
    let duration = coerce_duration(spec.duration.as_ref())?;

    Ok(NewService {
        service_name,
        price,
        duration,
    })
}

fn required_service_name(name: Option<&str>) -> Result<String, String> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err("service_name: Service name is required".to_string()),
    }
}

#[async_trait]
impl<S, V, I> DirectoryService for DirectoryServiceImpl<S, V, I>
where
    S: SalonRepository + 'static,
    V: ServiceRepository + 'static,
    I: ImageStore + 'static,
{
    async fn list_salons(&self, view: SalonView) -> Result<SalonListing, DirectoryError> {
        let salons = self.salon_repo.find_all().await?;

        match view {
            SalonView::Summary => Ok(SalonListing::Summary(
                salons
                    .into_iter()
                    .map(|s| SalonSummaryDto::from_salon(s, &self.image_paths))
                    .collect(),
            )),
            SalonView::Full => {
                let mut by_salon: HashMap<i64, Vec<Service>> = HashMap::new();
                for service in self.service_repo.find_all().await? {
                    by_salon.entry(service.salon_id).or_default().push(service);
                }

                Ok(SalonListing::Full(
                    salons
                        .into_iter()
                        .map(|s| {
                            let services = by_salon.remove(&s.id).unwrap_or_default();
                            SalonDto::from_salon(s, services, &self.image_paths)
                        })
                        .collect(),
                ))
            }
        }
    }

    async fn get_salon(&self, id: i64) -> Result<SalonDto, DirectoryError> {
        self.load_salon(id).await
    }

    async fn create_salon(
        &self,
        request: SalonInputDto,
        image: Option<ImageUpload>,
    ) -> Result<SalonDto, DirectoryError> {
        let (fields, services) = validate_salon(request)?;

        let stored_image = match image {
            Some(upload) => Some(self.image_store.save(upload).await?),
            None => None,
        };

        let result = self
            .salon_repo
            .create_with_services(&fields, stored_image.clone(), &services)
            .await;

        let (salon, created) = match result {
            Ok(created) => created,
            Err(e) => {
                if let Some(filename) = &stored_image {
                    if let Err(remove_err) = self.image_store.remove(filename).await {
                        tracing::warn!(%filename, error = %remove_err, "Failed to remove orphaned salon image");
                    }
                }
                return Err(e.into());
            }
        };

        tracing::info!(salon_id = salon.id, services = created.len(), "Salon created");
        Ok(SalonDto::from_salon(salon, created, &self.image_paths))
    }

    async fn update_salon(&self, id: i64, request: SalonInputDto) -> Result<SalonDto, DirectoryError> {
        self.ensure_salon(id).await?;
        let (fields, services) = validate_salon(request)?;

        self.salon_repo
            .update_with_services(id, &fields, &services)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => DirectoryError::SalonNotFound(id),
                e => e.into(),
            })?;

        tracing::info!(salon_id = id, appended_services = services.len(), "Salon updated");
        self.load_salon(id).await
    }

    async fn delete_salon(&self, id: i64) -> Result<(), DirectoryError> {
        self.salon_repo.delete(id).await.map_err(|e| match e {
            AppError::NotFound(_) => DirectoryError::SalonNotFound(id),
            e => e.into(),
        })?;

        tracing::info!(salon_id = id, "Salon deleted");
        Ok(())
    }

    async fn list_services(&self, salon_id: i64) -> Result<Vec<ServiceDto>, DirectoryError> {
        self.ensure_salon(salon_id).await?;
        let services = self.service_repo.find_by_salon_id(salon_id).await?;

        Ok(services.into_iter().map(ServiceDto::from).collect())
    }

    async fn create_service(&self, salon_id: i64, spec: ServiceSpecDto) -> Result<ServiceDto, DirectoryError> {
        self.ensure_salon(salon_id).await?;
        let new_service = validate_service(&spec).map_err(DirectoryError::Validation)?;

        let service = self.service_repo.create(salon_id, &new_service).await?;

        tracing::info!(salon_id, service_id = service.id, "Service created");
        Ok(ServiceDto::from(service))
    }

    async fn update_service(&self, id: i64, patch: ServicePatchDto) -> Result<ServiceDto, DirectoryError> {
        let mut service = self
            .service_repo
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::ServiceNotFound(id))?;

        if let Some(name) = patch.service_name {
            service.service_name = required_service_name(Some(&name)).map_err(DirectoryError::Validation)?;
        }
        if let Some(price) = patch.price.as_ref().filter(|v| !v.is_null()) {
            service.price = coerce_price(Some(price)).map_err(DirectoryError::Validation)?;
        }
        if let Some(duration) = patch.duration.as_ref().filter(|v| !v.is_null()) {
            service.duration = coerce_duration(Some(duration)).map_err(DirectoryError::Validation)?;
        }

        let updated = self.service_repo.update(&service).await.map_err(|e| match e {
            AppError::NotFound(_) => DirectoryError::ServiceNotFound(id),
            e => e.into(),
        })?;

        tracing::debug!(service_id = id, "Service updated");
        Ok(ServiceDto::from(updated))
    }

    async fn delete_service(&self, id: i64) -> Result<(), DirectoryError> {
        self.service_repo.delete(id).await.map_err(|e| match e {
            AppError::NotFound(_) => DirectoryError::ServiceNotFound(id),
            e => e.into(),
        })?;

        tracing::debug!(service_id = id, "Service deleted");
        Ok(())
    }
}
