//! Delivery strategies and the profile/intent plan table
//!
//! The plan for each profile × intent pair is fixed configuration, not
//! caller-negotiable. Wire names match the historical helper's `method`
//! strings so delivery logs stay comparable across app versions.

use serde::{Deserialize, Serialize};

use nithara_host::CapabilityProfile;

/// What the caller wants done with the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportIntent {
    /// Hand the document to a share surface
    Share,
    /// Put the document somewhere the user can keep it
    Save,
}

impl ExportIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportIntent::Share => "share",
            ExportIntent::Save => "save",
        }
    }
}

impl std::fmt::Display for ExportIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One concrete attempt to deliver the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Stage through the bridge filesystem, then the platform share sheet
    NativeShare,
    /// Durable write through the bridge filesystem
    NativeSave,
    /// Host share surface with the file attached
    WebShare,
    /// Anchor-style browser download
    BrowserDownload,
    /// Ask the user to save manually from an opened view
    ManualPrompt,
    /// Last resort: open the document in a new viewing surface
    NewTabFallback,
}

impl Strategy {
    /// Strategies that go through the native bridge and therefore want
    /// a best-effort permission check first.
    pub fn uses_native_bridge(&self) -> bool {
        matches!(self, Strategy::NativeShare | Strategy::NativeSave)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::NativeShare => "native-share",
            Strategy::NativeSave => "native-save",
            Strategy::WebShare => "web-share",
            Strategy::BrowserDownload => "browser-download",
            Strategy::ManualPrompt => "manual-prompt",
            Strategy::NewTabFallback => "new-tab-fallback",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native-share" => Ok(Strategy::NativeShare),
            "native-save" => Ok(Strategy::NativeSave),
            "web-share" => Ok(Strategy::WebShare),
            "browser-download" => Ok(Strategy::BrowserDownload),
            "manual-prompt" => Ok(Strategy::ManualPrompt),
            "new-tab-fallback" => Ok(Strategy::NewTabFallback),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

/// The ordered strategy list for a profile and intent.
pub fn strategy_plan(profile: CapabilityProfile, intent: ExportIntent) -> &'static [Strategy] {
    use Strategy::*;

    match (profile, intent) {
        (CapabilityProfile::NativeFull, ExportIntent::Share) => {
            &[NativeShare, WebShare, BrowserDownload]
        }
        (CapabilityProfile::NativeFull, ExportIntent::Save) => &[NativeSave, BrowserDownload],
        (CapabilityProfile::NativePartial, ExportIntent::Share) => &[WebShare, BrowserDownload],
        (CapabilityProfile::NativePartial, ExportIntent::Save) => &[BrowserDownload],
        (CapabilityProfile::BrowserNativeShare, ExportIntent::Share) => {
            &[WebShare, BrowserDownload]
        }
        (CapabilityProfile::BrowserNativeShare, ExportIntent::Save) => &[BrowserDownload],
        (CapabilityProfile::BrowserPlain, _) => &[BrowserDownload, ManualPrompt],
    }
}
