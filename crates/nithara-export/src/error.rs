//! Export error types

use thiserror::Error;

use crate::outcome::FailureKind;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Codec error: {0}")]
    Codec(#[from] nithara_codec::CodecError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] nithara_delivery::PersistenceError),

    #[error("Share error: {0}")]
    Share(#[from] nithara_delivery::ShareError),
}

impl ExportError {
    /// Cancellation halts the state machine; everything else falls back.
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            ExportError::Share(nithara_delivery::ShareError::UserCancelled)
        )
    }

    pub fn failure_kind(&self) -> FailureKind {
        use nithara_delivery::{PersistenceError, ShareError};

        match self {
            ExportError::Codec(_) => FailureKind::Codec,
            ExportError::Persistence(PersistenceError::Codec(_)) => FailureKind::Codec,
            ExportError::Persistence(_) => FailureKind::Persistence,
            ExportError::Share(ShareError::UserCancelled) => FailureKind::UserCancelled,
            ExportError::Share(ShareError::PlatformRejected(_)) => FailureKind::PlatformRejected,
            ExportError::Share(ShareError::TransportFailure(_)) => FailureKind::TransportFailure,
            ExportError::Share(ShareError::Staging(PersistenceError::Codec(_))) => {
                FailureKind::Codec
            }
            ExportError::Share(ShareError::Staging(_)) => FailureKind::Persistence,
        }
    }
}
