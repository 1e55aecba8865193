//! Image file to data URL conversion.
//!
//! The movie form sends images inline as `data:` URLs. Conversion fails
//! with an [`UploadError`], which the UI shows as a modal-level toast.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cinepass_api::ClassifiedError;
use std::path::Path;
use thiserror::Error;

/// Image types the API accepts
pub const ACCEPTED_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Why an image could not be converted
#[derive(Debug, Error)]
pub enum UploadError {
    /// Zero bytes
    #[error("{0} is empty")]
    Empty(String),

    /// Over the configured limit
    #[error("{name} is {size} bytes; the limit is {max} bytes")]
    TooLarge {
        /// File name
        name: String,
        /// Actual size
        size: usize,
        /// Limit
        max: usize,
    },

    /// Not an accepted image type
    #[error("{name} has unsupported type {content_type}")]
    UnsupportedType {
        /// File name
        name: String,
        /// Detected or declared type
        content_type: String,
    },

    /// Reading the file failed
    #[error("could not read {name}: {source}")]
    Read {
        /// File name
        name: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl From<UploadError> for ClassifiedError {
    fn from(error: UploadError) -> Self {
        Self::Upload(error.to_string())
    }
}

/// A picked image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// File name
    pub name: String,
    /// MIME type
    pub content_type: String,
    /// Contents
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Image with an explicit type
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read `path`, taking the type from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Read`] if the file cannot be read.
    pub async fn read(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Read {
            name: name.clone(),
            source,
        })?;
        let content_type = content_type_for(path).unwrap_or("application/octet-stream");
        Ok(Self::new(name, content_type, bytes))
    }
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// `data:` URL for `file`.
///
/// # Errors
///
/// Returns an [`UploadError`] if the file is empty, larger than
/// `max_bytes`, or not an accepted image type.
pub fn convert_file(file: &ImageFile, max_bytes: usize) -> Result<String, UploadError> {
    if file.bytes.is_empty() {
        return Err(UploadError::Empty(file.name.clone()));
    }
    if file.bytes.len() > max_bytes {
        return Err(UploadError::TooLarge {
            name: file.name.clone(),
            size: file.bytes.len(),
            max: max_bytes,
        });
    }
    if !ACCEPTED_TYPES.contains(&file.content_type.as_str()) {
        return Err(UploadError::UnsupportedType {
            name: file.name.clone(),
            content_type: file.content_type.clone(),
        });
    }

    tracing::debug!(name = %file.name, size = file.bytes.len(), "Image converted");
    Ok(format!(
        "data:{};base64,{}",
        file.content_type,
        STANDARD.encode(&file.bytes)
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cinepass_api::Feedback;

    fn png(bytes: &[u8]) -> ImageFile {
        ImageFile::new("poster.png", "image/png", bytes.to_vec())
    }

    #[test]
    fn test_data_url() {
        assert_eq!(
            convert_file(&png(b"hi"), 1024).unwrap(),
            "data:image/png;base64,aGk="
        );
    }

    #[test]
    fn test_limits() {
        assert!(matches!(convert_file(&png(b""), 1024), Err(UploadError::Empty(_))));
        assert!(matches!(
            convert_file(&png(&[0; 11]), 10),
            Err(UploadError::TooLarge { size: 11, max: 10, .. })
        ));
        assert!(matches!(
            convert_file(&ImageFile::new("movie.gif", "image/gif", vec![1]), 10),
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_upload_error_is_modal_toast() {
        let error: ClassifiedError = convert_file(&png(&[0; 11]), 10).unwrap_err().into();
        assert!(matches!(error.feedback(), Feedback::ModalToast(message) if message.contains("limit")));
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let error = ImageFile::read("/definitely/not/here.png").await.unwrap_err();
        assert!(matches!(error, UploadError::Read { ref name, .. } if name == "here.png"));
    }

    #[tokio::test]
    async fn test_read_detects_type() {
        let path = std::env::temp_dir().join(format!("cinepass-upload-{}.JPG", std::process::id()));
        tokio::fs::write(&path, b"\xff\xd8\xff").await.unwrap();

        let file = ImageFile::read(&path).await.unwrap();
        assert_eq!(file.content_type, "image/jpeg");
        assert!(convert_file(&file, 1024).unwrap().starts_with("data:image/jpeg;base64,"));

        tokio::fs::remove_file(&path).await.unwrap();
    }
}
