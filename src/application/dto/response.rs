//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::{SalonDto, SalonSummaryDto, ServiceDto};

/// Salon response with its services
#[derive(Debug, Serialize)]
pub struct SalonResponse {
    pub id: i64,
    pub name: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    /// Stored filename
    pub image: Option<String>,
    /// Path to display, falling back to the placeholder image
    pub image_url: String,
    pub services: Vec<ServiceResponse>,
}

impl From<SalonDto> for SalonResponse {
    fn from(dto: SalonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            tagline: dto.tagline,
            description: dto.description,
            address: dto.address,
            city: dto.city,
            phone: dto.phone,
            image: dto.image,
            image_url: dto.image_path,
            services: dto.services.into_iter().map(ServiceResponse::from).collect(),
        }
    }
}

/// Salon summary response
#[derive(Debug, Serialize)]
pub struct SalonSummaryResponse {
    pub id: i64,
    pub name: String,
    pub tagline: Option<String>,
    pub city: Option<String>,
    /// Display path (`uploads/<file>` or the placeholder)
    pub image: String,
}

impl From<SalonSummaryDto> for SalonSummaryResponse {
    fn from(dto: SalonSummaryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            tagline: dto.tagline,
            city: dto.city,
            image: dto.image_path,
        }
    }
}

/// Service response
#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub salon_id: i64,
    pub service_name: String,
    pub price: f64,
    pub duration: i64,
}

impl From<ServiceDto> for ServiceResponse {
    fn from(dto: ServiceDto) -> Self {
        Self {
            id: dto.id,
            salon_id: dto.salon_id,
            service_name: dto.service_name,
            price: dto.price,
            duration: dto.duration,
        }
    }
}

/// Counted salon listing
#[derive(Debug, Serialize)]
pub struct SalonListResponse<T> {
    pub count: usize,
    pub salons: Vec<T>,
}

impl<T> SalonListResponse<T> {
    pub fn new(salons: Vec<T>) -> Self {
        Self {
            count: salons.len(),
            salons,
        }
    }
}

/// Salon write acknowledgement
#[derive(Debug, Serialize)]
pub struct SalonEnvelope {
    pub message: &'static str,
    pub salon: SalonResponse,
}

/// Service write acknowledgement
#[derive(Debug, Serialize)]
pub struct ServiceEnvelope {
    pub message: &'static str,
    pub service: ServiceResponse,
}

/// Plain acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
