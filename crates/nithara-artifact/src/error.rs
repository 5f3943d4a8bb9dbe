//! Artifact error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact payload is empty")]
    EmptyPayload,

    #[error("Codec error: {0}")]
    Codec(#[from] nithara_codec::CodecError),
}
