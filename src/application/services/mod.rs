//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **DirectoryService**: Salons and their services, image uploads

pub mod directory_service;

pub use directory_service::{
    DirectoryError, DirectoryService, DirectoryServiceImpl, SalonDto, SalonInputDto, SalonListing,
    SalonSummaryDto, SalonView, ServiceDto, ServicePatchDto, ServiceSpecDto,
};
