//! Value Objects
//!
//! Small immutable helpers shared by the directory operations.

mod image_path;
mod numeric;

pub use image_path::ImagePaths;
pub use numeric::{coerce_duration, coerce_price};
