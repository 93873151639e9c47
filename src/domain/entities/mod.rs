//! # Domain Entities
//!
//! Core domain entities of the salon directory.
//!
//! - **Salon**: a business listing (parent record)
//! - **Service**: a priced offering belonging to exactly one salon
//! - **ImageUpload**: an image received with a new salon listing
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer.

mod image;
mod salon;
mod service;

pub use image::{ImageStore, ImageUpload, ALLOWED_IMAGE_EXTENSIONS};
pub use salon::{Salon, SalonFields, SalonRepository};
pub use service::{NewService, Service, ServiceRepository};

#[cfg(test)]
pub use image::MockImageStore;
#[cfg(test)]
pub use salon::MockSalonRepository;
#[cfg(test)]
pub use service::MockServiceRepository;
