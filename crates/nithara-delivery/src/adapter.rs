//! Delivery adapters
//!
//! `NativeAdapter` stages everything through the text-only bridge;
//! `BrowserAdapter` hands the payload to browser primitives directly.
//! Platforms do not accept raw bytes for file sharing, so the native
//! share path always stages an ephemeral copy first and shares its URI.

use std::sync::Arc;

use nithara_artifact::{Artifact, ExportMetadata};

use crate::bridge::{NativeBridge, ShareRequest};
use crate::error::{PersistenceError, ShareError};
use crate::handle::{Durability, Handle};
use crate::web::WebHost;

/// The delivery contract shared by both host variants.
#[async_trait::async_trait]
pub trait DeliveryAdapter: Send + Sync {
    /// Write a copy of the artifact to the requested durability tier.
    async fn persist(
        &self,
        artifact: &Artifact,
        durability: Durability,
    ) -> Result<Handle, PersistenceError>;

    /// Hand the artifact to the host share surface.
    async fn share(&self, artifact: &Artifact, metadata: &ExportMetadata)
        -> Result<(), ShareError>;
}

/// Bridge-backed delivery for native shells.
#[derive(Clone)]
pub struct NativeAdapter {
    bridge: Arc<dyn NativeBridge>,
}

impl NativeAdapter {
    pub fn new(bridge: Arc<dyn NativeBridge>) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &Arc<dyn NativeBridge> {
        &self.bridge
    }
}

#[async_trait::async_trait]
impl DeliveryAdapter for NativeAdapter {
    async fn persist(
        &self,
        artifact: &Artifact,
        durability: Durability,
    ) -> Result<Handle, PersistenceError> {
        let data = nithara_codec::encode_source(artifact).await?;

        // Durable writes may land in a folder that does not exist yet.
        let recursive = durability == Durability::Durable;
        let uri = self
            .bridge
            .write_file(artifact.file_name(), &data, durability.directory(), recursive)
            .await
            .map_err(|e| PersistenceError::Write(e.to_string()))?;

        if url::Url::parse(&uri).is_err() {
            return Err(PersistenceError::InvalidHandle(uri));
        }

        tracing::info!(
            file_name = %artifact.file_name(),
            durability = %durability,
            uri = %uri,
            "Persisted artifact via native bridge"
        );

        Ok(Handle::new(uri, durability))
    }

    async fn share(
        &self,
        artifact: &Artifact,
        metadata: &ExportMetadata,
    ) -> Result<(), ShareError> {
        let staged = self.persist(artifact, Durability::Ephemeral).await?;

        let request = ShareRequest {
            title: metadata.share_title().to_string(),
            text: metadata.share_text().to_string(),
            url: staged.uri.clone(),
            files: vec![staged.uri.clone()],
        };

        self.bridge.share(request).await?;

        tracing::info!(
            file_name = %artifact.file_name(),
            uri = %staged.uri,
            "Shared artifact via native share sheet"
        );

        Ok(())
    }
}

/// Browser-backed delivery for plain web hosts.
#[derive(Clone)]
pub struct BrowserAdapter {
    host: Arc<dyn WebHost>,
}

impl BrowserAdapter {
    pub fn new(host: Arc<dyn WebHost>) -> Self {
        Self { host }
    }

    /// Open the artifact in a new viewing surface for manual saving.
    pub async fn open_viewer(&self, artifact: &Artifact) -> Result<Handle, PersistenceError> {
        let viewer_url = self
            .host
            .open_document(artifact.bytes(), artifact.content_type())
            .await
            .map_err(|e| PersistenceError::Write(e.to_string()))?;

        tracing::info!(
            file_name = %artifact.file_name(),
            url = %viewer_url,
            "Opened artifact in viewer"
        );

        Ok(Handle::new(viewer_url, Durability::Ephemeral))
    }
}

#[async_trait::async_trait]
impl DeliveryAdapter for BrowserAdapter {
    async fn persist(
        &self,
        artifact: &Artifact,
        durability: Durability,
    ) -> Result<Handle, PersistenceError> {
        // A browser download cannot promise a tier; durability is
        // recorded on the handle as advisory only.
        self.host
            .trigger_download(artifact.file_name(), artifact.bytes())
            .await
            .map_err(|e| PersistenceError::Write(e.to_string()))?;

        tracing::info!(
            file_name = %artifact.file_name(),
            "Triggered browser download"
        );

        Ok(Handle::new(artifact.file_name().to_string(), durability))
    }

    async fn share(
        &self,
        artifact: &Artifact,
        metadata: &ExportMetadata,
    ) -> Result<(), ShareError> {
        if !self
            .host
            .can_share_files(artifact.file_name(), artifact.content_type())
        {
            return Err(ShareError::PlatformRejected(
                "Host does not support file attachments".to_string(),
            ));
        }

        self.host
            .share_files(
                artifact.file_name(),
                artifact.bytes(),
                metadata.share_title(),
                metadata.share_text(),
            )
            .await?;

        tracing::info!(
            file_name = %artifact.file_name(),
            "Shared artifact via web share surface"
        );

        Ok(())
    }
}
