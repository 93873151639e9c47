//! # Salon Directory Library
//!
//! This crate provides a salon directory backend with:
//! - RESTful HTTP API for salons and their services
//! - Multipart image uploads for salon listings
//! - SQLite for persistent storage
//!
//! ## Architecture
//!
//! - **Domain Layer**: Salon/Service entities, repository traits, value objects
//! - **Application Layer**: The directory service and DTOs
//! - **Infrastructure Layer**: Database, repositories and image storage
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! salon_directory/
//! +-- config/         Configuration management
//! +-- domain/         Entities, value objects, and traits
//! +-- application/    Directory service and DTOs
//! +-- infrastructure/ Database, repositories, image storage
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Data model
pub mod domain;

// Application layer - Directory service
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
