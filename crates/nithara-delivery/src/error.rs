//! Delivery error types
//!
//! Share failures keep user cancellation distinct from platform refusal
//! and transport faults; the orchestrator treats them very differently.

use thiserror::Error;

/// Raw failure from a native bridge primitive.
#[derive(Error, Debug, Clone)]
pub enum BridgeError {
    #[error("User dismissed the dialog")]
    Aborted,

    #[error("Platform rejected the call: {0}")]
    Rejected(String),

    #[error("Bridge call failed: {0}")]
    Transport(String),
}

/// Raw failure from a browser host primitive.
#[derive(Error, Debug, Clone)]
pub enum WebHostError {
    #[error("User dismissed the dialog")]
    Aborted,

    #[error("Not supported by this host: {0}")]
    Unsupported(String),

    #[error("Host operation failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Codec error: {0}")]
    Codec(#[from] nithara_codec::CodecError),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Host returned an unusable file handle: {0}")]
    InvalidHandle(String),
}

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Share cancelled by user")]
    UserCancelled,

    #[error("Platform rejected the share: {0}")]
    PlatformRejected(String),

    #[error("Share transport failure: {0}")]
    TransportFailure(String),

    #[error("Failed to stage file for sharing: {0}")]
    Staging(#[from] PersistenceError),
}

impl From<BridgeError> for ShareError {
    fn from(e: BridgeError) -> Self {
        match e {
            BridgeError::Aborted => ShareError::UserCancelled,
            BridgeError::Rejected(reason) => ShareError::PlatformRejected(reason),
            BridgeError::Transport(reason) => ShareError::TransportFailure(reason),
        }
    }
}

impl From<WebHostError> for ShareError {
    fn from(e: WebHostError) -> Self {
        match e {
            WebHostError::Aborted => ShareError::UserCancelled,
            WebHostError::Unsupported(reason) => ShareError::PlatformRejected(reason),
            WebHostError::Failed(reason) => ShareError::TransportFailure(reason),
        }
    }
}

impl ShareError {
    /// User cancellation is a decision, not a fault; it is never retried.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ShareError::UserCancelled)
    }
}
