//! Fixed-answer platform provider

use isit_core::{HostOs, Platform};

/// Platform facts fixed up front
///
/// The seam for tests and for embedders with out-of-band platform
/// knowledge. Starts with no window, no user agent, and `HostOs::Other`;
/// the `with_*` methods fill in individual facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedPlatform {
    window: bool,
    user_agent: Option<String>,
    host_os: HostOs,
}

impl FixedPlatform {
    /// Create a provider with nothing present
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a windowed user-agent environment as present or absent
    pub fn with_window(mut self, window: bool) -> Self {
        self.window = window;
        self
    }

    /// Set the user-agent string
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Set the host OS family
    pub fn with_host_os(mut self, host_os: HostOs) -> Self {
        self.host_os = host_os;
        self
    }
}

impl Default for FixedPlatform {
    fn default() -> Self {
        FixedPlatform {
            window: false,
            user_agent: None,
            host_os: HostOs::Other,
        }
    }
}

impl Platform for FixedPlatform {
    fn has_window(&self) -> bool {
        self.window
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    fn host_os(&self) -> HostOs {
        self.host_os
    }
}
