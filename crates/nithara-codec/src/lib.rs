//! Nithara Transport Codec
//!
//! The native bridge only carries text, so binary report payloads are
//! base64-encoded before crossing it and decoded on the way back.

mod error;
mod transport;

pub use error::{BlobError, CodecError};
pub use transport::{decode, encode, encode_source, BlobSource};

pub type Result<T> = std::result::Result<T, CodecError>;
