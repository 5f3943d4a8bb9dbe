//! Base64 transport encoding
//!
//! The bridge write primitive takes text, so a payload is encoded once
//! per crossing. No size ceiling is enforced here; the host imposes its
//! own payload limits.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{BlobError, CodecError};
use crate::Result;

/// An opaque binary payload whose read is asynchronous and can fail.
///
/// The rendered report arrives as a host-owned blob; reading it out is a
/// host operation that may reject or return nothing.
#[async_trait::async_trait]
pub trait BlobSource: Send + Sync {
    async fn read(&self) -> std::result::Result<Vec<u8>, BlobError>;
}

/// Encode a payload for the text-only bridge boundary.
pub fn encode(bytes: &[u8]) -> Result<String> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }
    Ok(STANDARD.encode(bytes))
}

/// Decode a payload previously produced by [`encode`].
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(CodecError::Empty);
    }
    STANDARD
        .decode(text)
        .map_err(|e| CodecError::Invalid(e.to_string()))
}

/// Read a blob out of the host and encode it.
///
/// A failing read yields [`CodecError::ReadFailed`] and an empty read
/// yields [`CodecError::Empty`]; a partial result is never returned.
pub async fn encode_source(source: &dyn BlobSource) -> Result<String> {
    let bytes = source.read().await?;
    encode(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticBlob(Vec<u8>);

    #[async_trait::async_trait]
    impl BlobSource for StaticBlob {
        async fn read(&self) -> std::result::Result<Vec<u8>, BlobError> {
            Ok(self.0.clone())
        }
    }

    struct FailingBlob;

    #[async_trait::async_trait]
    impl BlobSource for FailingBlob {
        async fn read(&self) -> std::result::Result<Vec<u8>, BlobError> {
            Err(BlobError("reader error".to_string()))
        }
    }

    #[test]
    fn test_round_trip() {
        let payload = b"%PDF-1.4 report body".to_vec();
        let encoded = encode(&payload).unwrap();
        assert_eq!(decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_round_trip_binary() {
        let payload: Vec<u8> = (0u8..=255).collect();
        let encoded = encode(&payload).unwrap();
        assert_eq!(decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn test_empty_payload_rejected() {
        assert!(matches!(encode(&[]), Err(CodecError::Empty)));
        assert!(matches!(decode(""), Err(CodecError::Empty)));
    }

    #[test]
    fn test_invalid_text_rejected() {
        assert!(matches!(
            decode("not base64 at all!"),
            Err(CodecError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_encode_source() {
        let blob = StaticBlob(b"report".to_vec());
        let encoded = encode_source(&blob).await.unwrap();
        assert_eq!(decode(&encoded).unwrap(), b"report");
    }

    #[tokio::test]
    async fn test_encode_source_read_failure() {
        let result = encode_source(&FailingBlob).await;
        assert!(matches!(result, Err(CodecError::ReadFailed(_))));
    }

    #[tokio::test]
    async fn test_encode_source_empty_read() {
        let result = encode_source(&StaticBlob(Vec::new())).await;
        assert!(matches!(result, Err(CodecError::Empty)));
    }
}
