use std::path::Path;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::error::GenerationError;

/// A file sent inline with a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAttachment {
    pub file_name: String,
    pub mime_type: String,
    /// Base64 payload.
    pub data: String,
}

impl InlineAttachment {
    #[must_use]
    pub fn from_bytes(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            data: BASE64.encode(bytes),
        }
    }

    /// Read an image or text file from disk.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::UnsupportedAttachment` for file types other
    /// than images, `.txt` and `.md`, and `GenerationError::Attachment` if the
    /// file cannot be read.
    pub async fn read(path: &Path) -> Result<Self, GenerationError> {
        let mime_type = mime_for(path)?;
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
        Ok(Self::from_bytes(file_name, mime_type, &bytes))
    }
}

fn mime_for(path: &Path) -> Result<&'static str, GenerationError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "heic" => Ok("image/heic"),
        "txt" => Ok("text/plain"),
        "md" => Ok("text/markdown"),
        _ => Err(GenerationError::UnsupportedAttachment(
            path.display().to_string(),
        )),
    }
}
