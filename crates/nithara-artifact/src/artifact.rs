//! Rendered artifact payload

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use nithara_codec::{BlobError, BlobSource};

use crate::error::ArtifactError;
use crate::name::normalize_file_name;
use crate::Result;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const PDF_EXTENSION: &str = ".pdf";

/// An immutable rendered document ready for delivery.
///
/// Created once per export request by the renderer; owned by the
/// orchestrator for the duration of one export call. Strategies only
/// ever read it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    bytes: Vec<u8>,
    file_name: String,
    content_type: String,
}

impl Artifact {
    /// Build an artifact from in-memory bytes.
    ///
    /// The suggested name is normalized here so every downstream
    /// consumer sees the same filename.
    pub fn new(
        bytes: Vec<u8>,
        suggested_name: &str,
        extension: &str,
        content_type: &str,
    ) -> Result<Self> {
        if bytes.is_empty() {
            return Err(ArtifactError::EmptyPayload);
        }

        Ok(Self {
            bytes,
            file_name: normalize_file_name(suggested_name, extension),
            content_type: content_type.to_string(),
        })
    }

    /// Build a PDF artifact, the only kind the report pages produce.
    pub fn pdf(bytes: Vec<u8>, suggested_name: &str) -> Result<Self> {
        Self::new(bytes, suggested_name, PDF_EXTENSION, PDF_CONTENT_TYPE)
    }

    /// Build an artifact by reading a host-owned blob.
    ///
    /// A failing or empty read is an error, never a partial artifact.
    pub async fn from_source(
        source: &dyn BlobSource,
        suggested_name: &str,
        extension: &str,
        content_type: &str,
    ) -> Result<Self> {
        let bytes = source
            .read()
            .await
            .map_err(nithara_codec::CodecError::ReadFailed)?;
        if bytes.is_empty() {
            return Err(ArtifactError::Codec(nithara_codec::CodecError::Empty));
        }

        Self::new(bytes, suggested_name, extension, content_type)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// SHA-256 hex fingerprint of the payload, for delivery logs.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.bytes);
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }
}

#[async_trait::async_trait]
impl BlobSource for Artifact {
    async fn read(&self) -> std::result::Result<Vec<u8>, BlobError> {
        Ok(self.bytes.clone())
    }
}
