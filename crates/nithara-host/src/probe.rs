//! Capability detection
//!
//! Detection order matters: the bridge is checked before any web share
//! capability, because a native shell with missing plugins must degrade
//! to `NativePartial`, not masquerade as a browser.

use crate::profile::CapabilityProfile;

/// Point-in-time queries against the ambient host.
///
/// Implementations must be side-effect free; every query reflects the
/// host as it is right now.
pub trait HostInspector: Send + Sync {
    /// Does a native bridge object exist and report itself active?
    fn bridge_active(&self) -> bool;

    /// Does the bridge expose a storage (filesystem write) primitive?
    fn bridge_has_storage(&self) -> bool;

    /// Does the bridge expose a share-sheet primitive?
    fn bridge_has_share(&self) -> bool;

    /// Can the host runtime share a file attachment of this type?
    fn web_can_share_files(&self, content_type: &str) -> bool;
}

/// Classify the host into a capability profile.
///
/// Never fails: an undetectable bridge is `BrowserPlain`, not an error.
pub fn detect(host: &dyn HostInspector, content_type: &str) -> CapabilityProfile {
    let profile = if host.bridge_active() {
        if host.bridge_has_storage() && host.bridge_has_share() {
            CapabilityProfile::NativeFull
        } else {
            CapabilityProfile::NativePartial
        }
    } else if host.web_can_share_files(content_type) {
        CapabilityProfile::BrowserNativeShare
    } else {
        CapabilityProfile::BrowserPlain
    };

    tracing::debug!(profile = %profile, "Detected host capability profile");
    profile
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeHost {
        bridge: bool,
        storage: bool,
        share: bool,
        web_share: bool,
    }

    impl HostInspector for FakeHost {
        fn bridge_active(&self) -> bool {
            self.bridge
        }

        fn bridge_has_storage(&self) -> bool {
            self.storage
        }

        fn bridge_has_share(&self) -> bool {
            self.share
        }

        fn web_can_share_files(&self, _content_type: &str) -> bool {
            self.web_share
        }
    }

    #[test]
    fn test_native_full() {
        let host = FakeHost {
            bridge: true,
            storage: true,
            share: true,
            web_share: false,
        };
        assert_eq!(
            detect(&host, "application/pdf"),
            CapabilityProfile::NativeFull
        );
    }

    #[test]
    fn test_native_partial_missing_share() {
        let host = FakeHost {
            bridge: true,
            storage: true,
            share: false,
            web_share: false,
        };
        assert_eq!(
            detect(&host, "application/pdf"),
            CapabilityProfile::NativePartial
        );
    }

    #[test]
    fn test_bridge_without_primitives_is_still_native() {
        // Even a web-share capable runtime must not win over an active
        // bridge that lost both plugins.
        let host = FakeHost {
            bridge: true,
            storage: false,
            share: false,
            web_share: true,
        };
        assert_eq!(
            detect(&host, "application/pdf"),
            CapabilityProfile::NativePartial
        );
    }

    #[test]
    fn test_browser_native_share() {
        let host = FakeHost {
            bridge: false,
            storage: false,
            share: false,
            web_share: true,
        };
        assert_eq!(
            detect(&host, "application/pdf"),
            CapabilityProfile::BrowserNativeShare
        );
    }

    #[test]
    fn test_browser_plain() {
        let host = FakeHost {
            bridge: false,
            storage: false,
            share: false,
            web_share: false,
        };
        assert_eq!(
            detect(&host, "application/pdf"),
            CapabilityProfile::BrowserPlain
        );
    }
}
