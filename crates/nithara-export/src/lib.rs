//! Nithara Export
//!
//! Delivers a rendered report to the user across whatever host the page
//! happens to be running in: native shell with a full plugin bridge, a
//! degraded shell, a browser with OS file sharing, or a plain browser.
//! One orchestrator instance per export call; no state crosses calls.

mod error;
mod orchestrator;
mod outcome;
mod phase;
mod report;
mod strategy;

pub use error::ExportError;
pub use orchestrator::Exporter;
pub use outcome::{ExportOutcome, FailureKind};
pub use phase::ExportPhase;
pub use report::{ExportNotice, ExportNotifier, Reporter, TracingNotifier};
pub use strategy::{strategy_plan, ExportIntent, Strategy};

// Re-export the component crates' surfaces
pub use nithara_artifact::{
    normalize_file_name, Artifact, ArtifactError, ExportMetadata, PDF_CONTENT_TYPE, PDF_EXTENSION,
};
pub use nithara_codec::{BlobError, BlobSource, CodecError};
pub use nithara_delivery::{
    BridgeError, BrowserAdapter, DeliveryAdapter, Durability, Handle, NativeAdapter, NativeBridge,
    PermissionState, PersistenceError, ShareError, ShareRequest, StorageDirectory, WebHost,
    WebHostError,
};
pub use nithara_host::{detect, CapabilityProfile, HostInspector};

pub type Result<T> = std::result::Result<T, ExportError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
