//! Export call state machine
//!
//! ```text
//! Idle
//!   ↓ probe
//! Probing
//!   ↓ plan selected
//! Attempting(i)
//!   ↓ success / cancel / next strategy / list exhausted
//! Succeeded | Cancelled | Attempting(i+1) | Exhausted
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportPhase {
    /// Call constructed, nothing probed yet
    Idle,
    /// Asking the host what it can do
    Probing,
    /// Executing strategy `i` of the selected plan
    Attempting(usize),
    /// A strategy delivered the artifact
    Succeeded,
    /// The user dismissed a dialog; never falls through to more strategies
    Cancelled,
    /// Every strategy in the plan failed
    Exhausted,
}

impl ExportPhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: ExportPhase) -> bool {
        match (self, target) {
            (ExportPhase::Idle, ExportPhase::Probing) => true,
            // The first strategy of a plan
            (ExportPhase::Probing, ExportPhase::Attempting(0)) => true,
            // An empty plan cannot happen, but probing may still exhaust
            (ExportPhase::Probing, ExportPhase::Exhausted) => true,
            // A strategy settles, or hands over to the next in order
            (ExportPhase::Attempting(_), ExportPhase::Succeeded) => true,
            (ExportPhase::Attempting(_), ExportPhase::Cancelled) => true,
            (ExportPhase::Attempting(_), ExportPhase::Exhausted) => true,
            (ExportPhase::Attempting(i), ExportPhase::Attempting(j)) => j == i + 1,
            _ => false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExportPhase::Succeeded | ExportPhase::Cancelled | ExportPhase::Exhausted
        )
    }
}
