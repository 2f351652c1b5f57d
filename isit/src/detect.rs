//! Environment detectors over a platform provider

use isit_core::{HostOs, Platform};

use crate::host::HostPlatform;

/// Environment checks computed from an injected platform provider
///
/// Wraps any [`Platform`] and answers the five environment questions.
/// User-agent matching lowercases the reported string before substring
/// search, so fixture capitalization does not matter.
#[derive(Debug, Clone)]
pub struct Detector<P: Platform> {
    platform: P,
}

impl Detector<HostPlatform> {
    /// Detector bound to the current process
    pub const fn host() -> Self {
        Detector {
            platform: HostPlatform::new(),
        }
    }
}

impl<P: Platform> Detector<P> {
    /// Wrap a platform provider
    pub fn new(platform: P) -> Self {
        Detector { platform }
    }

    /// Get the wrapped provider
    pub fn platform(&self) -> &P {
        &self.platform
    }

    fn agent_contains(&self, token: &str) -> bool {
        match self.platform.user_agent() {
            Some(agent) => agent.to_lowercase().contains(token),
            None => false,
        }
    }

    /// Check whether a windowed user-agent environment is present
    pub fn is_browser(&self) -> bool {
        self.platform.has_window()
    }

    /// Check whether the environment is Windows
    ///
    /// In a browser context the user agent decides (`"windows nt"`);
    /// otherwise the host OS family does.
    pub fn is_windows(&self) -> bool {
        if self.is_browser() {
            self.agent_contains("windows nt")
        } else {
            self.platform.host_os() == HostOs::Windows
        }
    }

    /// Check whether the environment is a Mac
    ///
    /// In a browser context: `"mac os x"` in the user agent, excluding
    /// iPhones, whose agents also carry that token. Otherwise the host
    /// OS family decides.
    pub fn is_mac(&self) -> bool {
        if self.is_browser() {
            self.agent_contains("mac os x") && !self.agent_contains("iphone os")
        } else {
            self.platform.host_os() == HostOs::MacOs
        }
    }

    /// Check whether the client is an iPhone (`"iphone os"` in the agent)
    ///
    /// Browser-only: reports false without a window.
    pub fn is_iphone(&self) -> bool {
        self.is_browser() && self.agent_contains("iphone os")
    }

    /// Check whether the client runs inside WeChat (`"micromessenger"`)
    ///
    /// Browser-only: reports false without a window.
    pub fn is_weixin(&self) -> bool {
        self.is_browser() && self.agent_contains("micromessenger")
    }
}

/// Check whether the current process is a browser environment
pub fn is_browser() -> bool {
    Detector::host().is_browser()
}

/// Check whether the current process runs on Windows
pub fn is_windows() -> bool {
    Detector::host().is_windows()
}

/// Check whether the current process runs on a Mac
pub fn is_mac() -> bool {
    Detector::host().is_mac()
}

/// Check whether the current process is an iPhone browser client
pub fn is_iphone() -> bool {
    Detector::host().is_iphone()
}

/// Check whether the current process runs inside WeChat
pub fn is_weixin() -> bool {
    Detector::host().is_weixin()
}
