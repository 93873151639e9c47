//! Repository Implementations
//!
//! SQLite implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **SalonRepository** - Salon listings, including the transactional
//!   salon + services writes
//! - **ServiceRepository** - Individual service records
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::SqlitePool;
//! use crate::infrastructure::repositories::{SqliteSalonRepository, SqliteServiceRepository};
//!
//! fn setup_repositories(pool: SqlitePool) {
//!     let salon_repo = SqliteSalonRepository::new(pool.clone());
//!     let service_repo = SqliteServiceRepository::new(pool);
//! }
//! ```

pub mod salon_repository;
pub mod service_repository;

pub use salon_repository::SqliteSalonRepository;
pub use service_repository::SqliteServiceRepository;
