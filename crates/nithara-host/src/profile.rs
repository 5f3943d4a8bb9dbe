//! Capability profiles

use serde::{Deserialize, Serialize};

/// What the current host environment can do for delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapabilityProfile {
    /// Native bridge present with both storage and share primitives
    NativeFull,
    /// Native bridge present but at least one primitive missing
    NativePartial,
    /// No bridge, host OS exposes file sharing
    BrowserNativeShare,
    /// No bridge, no OS share surface
    BrowserPlain,
}

impl CapabilityProfile {
    /// True when a native shell hosts the page, even a degraded one.
    ///
    /// A bridge with no primitives still changes which fallback prompts
    /// are appropriate, so it must never read as a plain browser.
    pub fn is_native(&self) -> bool {
        matches!(
            self,
            CapabilityProfile::NativeFull | CapabilityProfile::NativePartial
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityProfile::NativeFull => "native-full",
            CapabilityProfile::NativePartial => "native-partial",
            CapabilityProfile::BrowserNativeShare => "browser-native-share",
            CapabilityProfile::BrowserPlain => "browser-plain",
        }
    }
}

impl std::fmt::Display for CapabilityProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CapabilityProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native-full" => Ok(CapabilityProfile::NativeFull),
            "native-partial" => Ok(CapabilityProfile::NativePartial),
            "browser-native-share" => Ok(CapabilityProfile::BrowserNativeShare),
            "browser-plain" => Ok(CapabilityProfile::BrowserPlain),
            _ => Err(format!("Unknown capability profile: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round_trip_names() {
        for profile in [
            CapabilityProfile::NativeFull,
            CapabilityProfile::NativePartial,
            CapabilityProfile::BrowserNativeShare,
            CapabilityProfile::BrowserPlain,
        ] {
            assert_eq!(
                CapabilityProfile::from_str(profile.as_str()).unwrap(),
                profile
            );
        }
    }

    #[test]
    fn test_is_native() {
        assert!(CapabilityProfile::NativeFull.is_native());
        assert!(CapabilityProfile::NativePartial.is_native());
        assert!(!CapabilityProfile::BrowserNativeShare.is_native());
        assert!(!CapabilityProfile::BrowserPlain.is_native());
    }
}
