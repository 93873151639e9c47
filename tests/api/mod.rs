//! API Tests
//!
//! End-to-end tests for REST API endpoints.

mod health_tests;
mod salon_tests;
mod service_tests;
