//! Terminal export outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use nithara_delivery::Handle;

use crate::strategy::Strategy;

/// Why a delivery attempt (or the whole export) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    UserCancelled,
    PlatformRejected,
    TransportFailure,
    Codec,
    Persistence,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::UserCancelled => "user-cancelled",
            FailureKind::PlatformRejected => "platform-rejected",
            FailureKind::TransportFailure => "transport-failure",
            FailureKind::Codec => "codec",
            FailureKind::Persistence => "persistence",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terminal record of one export call. Returned to the caller, never
/// persisted; repeated calls produce independent outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOutcome {
    pub call_id: Uuid,
    pub succeeded: bool,
    pub strategy_used: Option<Strategy>,
    pub handle: Option<Handle>,
    pub cause: Option<FailureKind>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ExportOutcome {
    pub fn is_cancelled(&self) -> bool {
        self.cause == Some(FailureKind::UserCancelled)
    }
}
