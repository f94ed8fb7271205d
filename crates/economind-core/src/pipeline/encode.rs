//! Image loading and base64 encoding.

use crate::error::PipelineError;
use crate::llm::ImageInput;
use std::path::PathBuf;

/// Where the image for a request comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// A file on local disk
    Path(PathBuf),
    /// Bytes already in memory (e.g. a multipart upload)
    Bytes(Vec<u8>),
}

/// Encodes images for embedding in a request payload.
///
/// No size or format validation happens here; the bytes are passed through
/// as-is.
pub struct ImageEncoder;

impl ImageEncoder {
    /// Read the source and produce its base64 form.
    pub async fn encode(source: &ImageSource) -> Result<ImageInput, PipelineError> {
        match source {
            ImageSource::Path(path) => {
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| PipelineError::ImageRead {
                        path: path.clone(),
                        message: e.to_string(),
                    })?;
                tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);
                Ok(ImageInput::from_bytes(&bytes))
            }
            ImageSource::Bytes(bytes) => Ok(ImageInput::from_bytes(bytes)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;

    #[tokio::test]
    async fn test_encode_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let bytes: Vec<u8> = (0..1024u32).map(|i| (i * 31 % 256) as u8).collect();
        std::fs::write(&path, &bytes).unwrap();

        let input = ImageEncoder::encode(&ImageSource::Path(path)).await.unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(input.data)
            .unwrap();
        assert_eq!(decoded, bytes);
    }

    #[tokio::test]
    async fn test_encode_is_deterministic() {
        let source = ImageSource::Bytes(b"not really an image".to_vec());
        let a = ImageEncoder::encode(&source).await.unwrap();
        let b = ImageEncoder::encode(&source).await.unwrap();
        assert_eq!(a.data, b.data);
    }

    #[tokio::test]
    async fn test_missing_file_is_image_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.jpg");

        let err = ImageEncoder::encode(&ImageSource::Path(path.clone()))
            .await
            .unwrap_err();
        match err {
            PipelineError::ImageRead { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected ImageRead, got {other:?}"),
        }
    }
}
