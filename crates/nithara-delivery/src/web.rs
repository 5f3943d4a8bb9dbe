//! Browser host seam

use crate::error::WebHostError;

/// Delivery primitives exposed by a browser runtime.
#[async_trait::async_trait]
pub trait WebHost: Send + Sync {
    /// Start an anchor-style download of the payload.
    async fn trigger_download(&self, file_name: &str, bytes: &[u8]) -> Result<(), WebHostError>;

    /// Would the host accept this file as a share attachment?
    ///
    /// Pure capability query; asking must not open any dialog.
    fn can_share_files(&self, file_name: &str, content_type: &str) -> bool;

    /// Invoke the host share surface with the payload attached.
    /// Implementations map a user dismissal to [`WebHostError::Aborted`].
    async fn share_files(
        &self,
        file_name: &str,
        bytes: &[u8],
        title: &str,
        text: &str,
    ) -> Result<(), WebHostError>;

    /// Open the payload in a new viewing surface and return its URL.
    async fn open_document(&self, bytes: &[u8], content_type: &str)
        -> Result<String, WebHostError>;
}
