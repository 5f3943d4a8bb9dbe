//! Persisted file handles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How long a persisted copy is expected to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Durability {
    /// Cache-like location, may be reclaimed by the host
    Ephemeral,
    /// Documents-like location, survives until the user deletes it
    Durable,
}

impl Durability {
    pub fn directory(&self) -> StorageDirectory {
        match self {
            Durability::Ephemeral => StorageDirectory::Cache,
            Durability::Durable => StorageDirectory::Documents,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Durability::Ephemeral => "ephemeral",
            Durability::Durable => "durable",
        }
    }
}

impl std::fmt::Display for Durability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage location token understood by the native bridge.
///
/// Passed over the boundary as its string form; the uppercase tokens are
/// what the bridge filesystem plugin accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageDirectory {
    Cache,
    Documents,
}

impl StorageDirectory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageDirectory::Cache => "CACHE",
            StorageDirectory::Documents => "DOCUMENTS",
        }
    }
}

impl std::fmt::Display for StorageDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Location of a delivered copy.
///
/// Opaque to callers: a bridge file URI, a viewer URL, or the bare
/// filename of an anchor download, depending on which adapter produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Handle {
    pub uri: String,
    pub durability: Durability,
    pub created_at: DateTime<Utc>,
}

impl Handle {
    pub fn new(uri: String, durability: Durability) -> Self {
        Self {
            uri,
            durability,
            created_at: Utc::now(),
        }
    }
}
