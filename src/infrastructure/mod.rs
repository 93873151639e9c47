//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool and migrations (SQLite)
//! - Repository implementations
//! - Local image storage

pub mod database;
pub mod repositories;
pub mod storage;
