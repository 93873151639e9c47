//! # Domain Layer
//!
//! The domain layer contains the data model of the salon directory.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Salon and Service records, repository and image store traits
//! - **value_objects**: Numeric coercion and image display paths
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - A service never exists without its salon

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
