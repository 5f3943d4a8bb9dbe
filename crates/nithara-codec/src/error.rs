//! Codec error types

use thiserror::Error;

/// Failure reported by a [`BlobSource`](crate::BlobSource) read.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct BlobError(pub String);

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Blob read failed: {0}")]
    ReadFailed(#[from] BlobError),

    #[error("Payload is empty")]
    Empty,

    #[error("Invalid transport encoding: {0}")]
    Invalid(String),
}
