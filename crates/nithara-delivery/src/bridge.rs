//! Native bridge seam
//!
//! The app shell injects an implementation of this trait; everything the
//! adapter needs from the shell crosses here as text.

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;
use crate::handle::StorageDirectory;

/// Result of a bridge permission query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
}

/// Payload handed to the bridge share primitive.
///
/// The staged file URI rides in both `url` and `files`: some Android
/// share targets only read one of the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
    pub files: Vec<String>,
}

/// Storage and share primitives exposed by a native shell.
#[async_trait::async_trait]
pub trait NativeBridge: Send + Sync {
    /// Write base64 text to a file in the given directory tier and
    /// return the resulting file URI.
    async fn write_file(
        &self,
        path: &str,
        data: &str,
        directory: StorageDirectory,
        recursive: bool,
    ) -> Result<String, BridgeError>;

    /// Invoke the platform share sheet. Implementations map a user
    /// dismissal to [`BridgeError::Aborted`].
    async fn share(&self, request: ShareRequest) -> Result<(), BridgeError>;

    /// Query storage permission without prompting.
    async fn check_permissions(&self) -> Result<PermissionState, BridgeError>;

    /// Prompt the user for storage permission.
    async fn request_permissions(&self) -> Result<PermissionState, BridgeError>;
}
