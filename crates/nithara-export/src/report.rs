//! Result reporting
//!
//! Maps terminal orchestrator states to user-visible notices.
//! Cancellation is an expected path and never raises an alarm.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use nithara_artifact::Artifact;
use nithara_delivery::Handle;

use crate::outcome::FailureKind;
use crate::strategy::Strategy;

/// A user-facing notice about a finished (or manual-action) export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportNotice {
    /// A copy landed somewhere the user can keep it
    Saved { file_name: String, location: String },
    /// The share sheet took the document
    Shared,
    /// The document was opened for the user to save by hand
    ManualSaveRequired { file_name: String },
    /// Every strategy failed
    Failed { cause: FailureKind },
}

impl ExportNotice {
    /// Display text for hosts that surface notices as toasts or dialogs.
    pub fn message(&self) -> String {
        match self {
            ExportNotice::Saved { file_name, .. } => {
                format!("Report saved to your device as {}", file_name)
            }
            ExportNotice::Shared => "Report handed to the share sheet".to_string(),
            ExportNotice::ManualSaveRequired { file_name } => format!(
                "The report was opened in a new view; save {} from there",
                file_name
            ),
            ExportNotice::Failed { cause } => {
                format!("Could not deliver the report ({})", cause)
            }
        }
    }
}

/// Surface for terminal notices; the embedding app decides how they look.
pub trait ExportNotifier: Send + Sync {
    fn notify(&self, notice: &ExportNotice);
}

/// Default notifier that writes notices to the log.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl ExportNotifier for TracingNotifier {
    fn notify(&self, notice: &ExportNotice) {
        match notice {
            ExportNotice::Failed { .. } => tracing::warn!("{}", notice.message()),
            _ => tracing::info!("{}", notice.message()),
        }
    }
}

/// Maps terminal states to notices, respecting the failure taxonomy.
#[derive(Clone)]
pub struct Reporter {
    notifier: Arc<dyn ExportNotifier>,
}

impl Reporter {
    pub fn new(notifier: Arc<dyn ExportNotifier>) -> Self {
        Self { notifier }
    }

    /// A strategy delivered the artifact.
    pub fn delivered(&self, strategy: Strategy, artifact: &Artifact, handle: Option<&Handle>) {
        match strategy {
            Strategy::NativeSave | Strategy::BrowserDownload => {
                self.notifier.notify(&ExportNotice::Saved {
                    file_name: artifact.file_name().to_string(),
                    location: handle.map(|h| h.uri.clone()).unwrap_or_default(),
                });
            }
            Strategy::NativeShare | Strategy::WebShare => {
                self.notifier.notify(&ExportNotice::Shared);
            }
            // The manual notice was already raised when the viewer opened
            Strategy::ManualPrompt | Strategy::NewTabFallback => {}
        }
    }

    /// The document was opened for manual saving.
    pub fn manual_open(&self, artifact: &Artifact) {
        self.notifier.notify(&ExportNotice::ManualSaveRequired {
            file_name: artifact.file_name().to_string(),
        });
    }

    /// The user cancelled. Expected path: no notice, no alarm.
    pub fn cancelled(&self) {}

    /// Every strategy failed, including the last resort.
    pub fn exhausted(&self, cause: FailureKind) {
        self.notifier.notify(&ExportNotice::Failed { cause });
    }
}
