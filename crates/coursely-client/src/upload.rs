//! File uploads for the avatar and video endpoints.

use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::error::{ApiError, ApiResult};

/// An in-memory file ready to be attached to a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Wraps bytes that are already in memory.
    pub fn from_bytes(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        FileUpload {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Reads `path` and guesses its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Upload(format!("{}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        Ok(FileUpload {
            mime: mime_for(path).to_string(),
            file_name,
            bytes,
        })
    }

    /// Builds a form with this file as the only field, named `field`.
    pub(crate) fn into_form(self, field: &'static str) -> ApiResult<Form> {
        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| ApiError::Upload(e.to_string()))?;
        Ok(Form::new().part(field, part))
    }
}

/// MIME type for the file extensions the storefront uploads.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        _ => "application/octet-stream",
    }
}
