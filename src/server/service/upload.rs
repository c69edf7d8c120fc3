//! Storage of uploaded product images.
//!
//! Images are written into the configured upload directory under a generated name
//! and exposed by the router under [`UPLOAD_URL_PREFIX`]. The stored extension comes
//! from the file's leading bytes, never from the client, so the static file server
//! only ever serves JPEG, PNG, GIF or WebP content types.

use rand::Rng;
use std::path::Path;

use crate::server::{error::AppError, model::product::ImageUpload};

/// Public URL prefix under which the upload directory is served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

/// Largest accepted image, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Writes and removes image files inside the upload directory.
pub struct ImageStore<'a> {
    upload_dir: &'a Path,
}

impl<'a> ImageStore<'a> {
    pub fn new(upload_dir: &'a Path) -> Self {
        Self { upload_dir }
    }

    /// Validates and stores an uploaded image.
    ///
    /// # Returns
    /// - `Ok(String)` - Public path of the stored file, e.g. `/uploads/1733850000000-Ab12.png`
    /// - `Err(AppError::BadRequest)` - Not an image, empty, larger than `MAX_UPLOAD_BYTES`,
    ///   or not one of the accepted [`ImageFormat`]s
    /// - `Err(AppError::IoErr)` - Failed to write the file
    pub async fn save(&self, upload: ImageUpload) -> Result<String, AppError> {
        let content_type = upload.content_type.as_deref().unwrap_or_default();

        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest(
                "Uploaded file must be an image".to_string(),
            ));
        }
        if upload.bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded image is empty".to_string()));
        }
        if upload.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::BadRequest(format!(
                "Uploaded image exceeds {} bytes",
                MAX_UPLOAD_BYTES
            )));
        }

        let Some(format) = ImageFormat::sniff(&upload.bytes) else {
            return Err(AppError::BadRequest(
                "Unsupported image format, expected JPEG, PNG, GIF or WebP".to_string(),
            ));
        };

        let file_name = format!(
            "{}-{}.{}",
            chrono::Utc::now().timestamp_millis(),
            random_suffix(),
            format.extension()
        );

        tokio::fs::write(self.upload_dir.join(&file_name), &upload.bytes).await?;

        tracing::debug!("Stored product image {}", file_name);

        Ok(format!("{}/{}", UPLOAD_URL_PREFIX, file_name))
    }

    /// Deletes a previously stored image given its public path.
    ///
    /// Paths outside the upload prefix are ignored. Failures are logged, not returned.
    pub async fn remove(&self, public_path: &str) {
        let Some(file_name) = stored_file_name(public_path) else {
            tracing::warn!("Not removing image outside upload directory: {}", public_path);
            return;
        };

        if let Err(err) = tokio::fs::remove_file(self.upload_dir.join(file_name)).await {
            tracing::warn!("Failed to remove image {}: {}", public_path, err);
        }
    }
}

/// Extracts the bare file name from `/uploads/<name>`, rejecting anything that could
/// escape the upload directory.
fn stored_file_name(public_path: &str) -> Option<&str> {
    let file_name = public_path
        .strip_prefix(UPLOAD_URL_PREFIX)?
        .strip_prefix('/')?;

    let is_plain = !file_name.is_empty()
        && file_name != ".."
        && !file_name.contains(['/', '\\']);

    is_plain.then_some(file_name)
}

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageFormat {
    /// Detects the format from the file signature.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WEBP" {
            Some(Self::Webp)
        } else {
            None
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

fn random_suffix() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";
    const SUFFIX_LENGTH: usize = 12;

    let mut rng = rand::rng();

    (0..SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
