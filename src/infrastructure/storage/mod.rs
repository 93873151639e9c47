//! Image Storage
//!
//! Filesystem implementation of the domain `ImageStore` trait.

pub mod local_image_store;

pub use local_image_store::{sanitize_filename, LocalImageStore};
