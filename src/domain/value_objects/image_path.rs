//! Display paths for salon images.

/// Composes the path clients use to display a salon image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePaths {
    public_prefix: String,
    default_image: String,
}

impl ImagePaths {
    pub fn new(public_prefix: impl Into<String>, default_image: impl Into<String>) -> Self {
        Self {
            public_prefix: public_prefix.into().trim_end_matches('/').to_string(),
            default_image: default_image.into(),
        }
    }

    /// `<prefix>/<filename>` for stored images, the placeholder otherwise.
    pub fn display_path(&self, image: Option<&str>) -> String {
        match image {
            Some(filename) if !filename.is_empty() => {
                if self.public_prefix.is_empty() {
                    filename.to_string()
                } else {
                    format!("{}/{}", self.public_prefix, filename)
                }
            }
            _ => self.default_image.clone(),
        }
    }
}

impl Default for ImagePaths {
    fn default() -> Self {
        Self::new("uploads", "images/default.jpg")
    }
}
