//! Local Filesystem Image Store
//!
//! Writes uploaded salon images into a single uploads directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::{ImageStore, ImageUpload, ALLOWED_IMAGE_EXTENSIONS};
use crate::shared::error::AppError;

/// Image store backed by a local directory.
///
/// Files are keyed by their sanitized filename. An existing file is never
/// overwritten: a clashing upload is stored as `<stem>-<n>.<ext>`.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory images are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the uploads directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, upload: ImageUpload) -> Result<String, AppError> {
        let filename = sanitize_filename(&upload.filename).ok_or_else(|| {
            AppError::Validation(format!("image: unusable filename '{}'", upload.filename))
        })?;

        let (stem, extension) = filename.rsplit_once('.').unwrap_or((filename.as_str(), ""));
        if !ALLOWED_IMAGE_EXTENSIONS.contains(&extension.to_ascii_lowercase().as_str()) {
            return Err(AppError::Validation(format!(
                "image: unsupported file type '.{}', expected one of {}",
                extension,
                ALLOWED_IMAGE_EXTENSIONS.join(", ")
            )));
        }

        self.ensure_dir().await?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let candidate = if attempt == 0 {
                filename.clone()
            } else {
                format!("{}-{}.{}", stem, attempt, extension)
            };
            let path = self.dir.join(&candidate);

            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => file,
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            if let Err(e) = write_all(&mut file, &upload.data).await {
                drop(file);
                let _ = tokio::fs::remove_file(&path).await;
                return Err(e.into());
            }

            tracing::debug!(path = %path.display(), bytes = upload.data.len(), "Stored salon image");
            return Ok(candidate);
        }

        Err(AppError::Conflict(format!(
            "image: no free filename left for '{}'",
            filename
        )))
    }

    async fn remove(&self, filename: &str) -> Result<(), AppError> {
        let Some(safe) = sanitize_filename(filename) else {
            return Ok(());
        };

        match tokio::fs::remove_file(self.dir.join(safe)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Numbered variants tried before giving up on a clashing filename
const MAX_NAME_ATTEMPTS: u32 = 1000;

async fn write_all(file: &mut File, data: &[u8]) -> std::io::Result<()> {
    file.write_all(data).await?;
    file.flush().await
}

/// Reduce a client-supplied filename to a safe, flat ASCII name.
///
/// Directory components are discarded, whitespace runs become `_`, and
/// only ASCII alphanumerics, `.`, `_` and `-` survive. Leading and trailing
/// dots and underscores are stripped so the result can never be hidden or
/// refer to a parent directory. Returns `None` when nothing usable remains.
pub fn sanitize_filename(raw: &str) -> Option<String> {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let joined = base.split_whitespace().collect::<Vec<_>>().join("_");
    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let trimmed = filtered.trim_matches(|c| c == '.' || c == '_');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
