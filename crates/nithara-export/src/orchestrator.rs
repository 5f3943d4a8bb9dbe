//! Export orchestrator
//!
//! Walks the ordered strategy list for the detected capability profile,
//! classifying each failure as cancel, fall back, or exhaust. One
//! instance of the call state machine per export; strategies execute
//! strictly sequentially because each may have an observable side effect.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use nithara_artifact::{Artifact, ExportMetadata};
use nithara_delivery::{
    BrowserAdapter, DeliveryAdapter, Durability, Handle, NativeAdapter, NativeBridge,
    PermissionState, WebHost,
};
use nithara_host::{detect, HostInspector};

use crate::error::ExportError;
use crate::outcome::{ExportOutcome, FailureKind};
use crate::phase::ExportPhase;
use crate::report::{ExportNotifier, Reporter};
use crate::strategy::{strategy_plan, ExportIntent, Strategy};

/// Entry point for report delivery.
///
/// Holds only injected collaborators; every call to
/// [`export_artifact`](Exporter::export_artifact) runs on its own state
/// machine instance and re-probes the host from scratch.
pub struct Exporter {
    probe: Arc<dyn HostInspector>,
    native: NativeAdapter,
    browser: BrowserAdapter,
    reporter: Reporter,
}

impl Exporter {
    pub fn new(
        probe: Arc<dyn HostInspector>,
        bridge: Arc<dyn NativeBridge>,
        web: Arc<dyn WebHost>,
        notifier: Arc<dyn ExportNotifier>,
    ) -> Self {
        Self {
            probe,
            native: NativeAdapter::new(bridge),
            browser: BrowserAdapter::new(web),
            reporter: Reporter::new(notifier),
        }
    }

    /// Deliver the artifact per the caller's intent.
    ///
    /// Terminal failures are encoded in the outcome record rather than
    /// returned as `Err`; the last-resort path absorbs the final error.
    pub async fn export_artifact(
        &self,
        artifact: Artifact,
        intent: ExportIntent,
        metadata: ExportMetadata,
    ) -> ExportOutcome {
        ExportCall::new().run(self, artifact, intent, metadata).await
    }
}

/// Per-call state machine. Constructed fresh for every export; nothing
/// here survives the call.
struct ExportCall {
    id: Uuid,
    phase: ExportPhase,
    started_at: DateTime<Utc>,
}

impl ExportCall {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: ExportPhase::Idle,
            started_at: Utc::now(),
        }
    }

    async fn run(
        mut self,
        exporter: &Exporter,
        artifact: Artifact,
        intent: ExportIntent,
        metadata: ExportMetadata,
    ) -> ExportOutcome {
        self.advance(ExportPhase::Probing);
        let profile = detect(exporter.probe.as_ref(), artifact.content_type());
        let plan = strategy_plan(profile, intent);

        tracing::info!(
            call_id = %self.id,
            profile = %profile,
            intent = %intent,
            file_name = %artifact.file_name(),
            "Starting export"
        );

        if plan.iter().any(Strategy::uses_native_bridge) {
            self.ensure_permissions(exporter).await;
        }

        let mut last_failure = None;
        for (index, strategy) in plan.iter().enumerate() {
            self.advance(ExportPhase::Attempting(index));
            tracing::info!(call_id = %self.id, strategy = %strategy, "Attempting delivery");

            match self.attempt(exporter, *strategy, &artifact, &metadata).await {
                Ok(handle) => {
                    self.advance(ExportPhase::Succeeded);
                    exporter
                        .reporter
                        .delivered(*strategy, &artifact, handle.as_ref());
                    return self.outcome(true, Some(*strategy), handle, None);
                }
                Err(e) if e.is_cancellation() => {
                    self.advance(ExportPhase::Cancelled);
                    tracing::info!(call_id = %self.id, strategy = %strategy, "Cancelled by user");
                    exporter.reporter.cancelled();
                    return self.outcome(false, None, None, Some(FailureKind::UserCancelled));
                }
                Err(e) => {
                    tracing::warn!(
                        call_id = %self.id,
                        strategy = %strategy,
                        error = %e,
                        "Strategy failed, falling back"
                    );
                    last_failure = Some(e.failure_kind());
                }
            }
        }

        self.advance(ExportPhase::Exhausted);
        let cause = last_failure.unwrap_or(FailureKind::TransportFailure);
        self.last_resort(exporter, &artifact, cause).await
    }

    /// All ordered strategies failed; open the document directly in a
    /// viewing surface. No further fallback exists either way.
    async fn last_resort(
        self,
        exporter: &Exporter,
        artifact: &Artifact,
        cause: FailureKind,
    ) -> ExportOutcome {
        tracing::warn!(call_id = %self.id, cause = %cause, "Plan exhausted, trying viewer");

        match exporter.browser.open_viewer(artifact).await {
            Ok(handle) => {
                exporter.reporter.manual_open(artifact);
                self.outcome(true, Some(Strategy::NewTabFallback), Some(handle), None)
            }
            Err(e) => {
                tracing::error!(call_id = %self.id, error = %e, "Last-resort viewer failed");
                exporter.reporter.exhausted(cause);
                self.outcome(false, None, None, Some(cause))
            }
        }
    }

    async fn attempt(
        &self,
        exporter: &Exporter,
        strategy: Strategy,
        artifact: &Artifact,
        metadata: &ExportMetadata,
    ) -> Result<Option<Handle>, ExportError> {
        match strategy {
            Strategy::NativeShare => {
                exporter.native.share(artifact, metadata).await?;
                Ok(None)
            }
            Strategy::NativeSave => Ok(Some(
                exporter.native.persist(artifact, Durability::Durable).await?,
            )),
            Strategy::WebShare => {
                exporter.browser.share(artifact, metadata).await?;
                Ok(None)
            }
            Strategy::BrowserDownload => Ok(Some(
                exporter
                    .browser
                    .persist(artifact, Durability::Ephemeral)
                    .await?,
            )),
            Strategy::ManualPrompt => {
                exporter.reporter.manual_open(artifact);
                Ok(Some(exporter.browser.open_viewer(artifact).await?))
            }
            Strategy::NewTabFallback => Ok(Some(exporter.browser.open_viewer(artifact).await?)),
        }
    }

    /// Best-effort permission round before the first native strategy.
    /// A failure of the check itself is swallowed; permission problems
    /// surface naturally as rejections from the strategy.
    async fn ensure_permissions(&self, exporter: &Exporter) {
        let bridge = exporter.native.bridge();

        match bridge.check_permissions().await {
            Ok(PermissionState::Granted) => {}
            Ok(state) => {
                tracing::debug!(call_id = %self.id, state = ?state, "Requesting storage permission");
                if let Err(e) = bridge.request_permissions().await {
                    tracing::warn!(
                        call_id = %self.id,
                        error = %e,
                        "Permission request failed, attempting strategy anyway"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    call_id = %self.id,
                    error = %e,
                    "Permission check failed, attempting strategy anyway"
                );
            }
        }
    }

    fn advance(&mut self, next: ExportPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "invalid phase transition {:?} -> {:?}",
            self.phase,
            next
        );
        self.phase = next;
    }

    fn outcome(
        self,
        succeeded: bool,
        strategy_used: Option<Strategy>,
        handle: Option<Handle>,
        cause: Option<FailureKind>,
    ) -> ExportOutcome {
        ExportOutcome {
            call_id: self.id,
            succeeded,
            strategy_used,
            handle,
            cause,
            started_at: self.started_at,
            finished_at: Utc::now(),
        }
    }
}
