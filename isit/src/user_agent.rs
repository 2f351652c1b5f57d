//! User-agent platform provider

use isit_core::{HostOs, Platform};

/// Platform facts for a browser client known only by its user-agent string
///
/// The shape a server-side caller has when classifying a client: a window
/// is assumed present, and the host OS family is `HostOs::Other` because
/// the provider describes a remote client, not this host. Every check
/// answers from the user agent alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentPlatform {
    user_agent: String,
}

impl UserAgentPlatform {
    /// Create a provider from a client's user-agent string
    pub fn new(user_agent: &str) -> Self {
        UserAgentPlatform {
            user_agent: user_agent.to_string(),
        }
    }
}

impl Platform for UserAgentPlatform {
    fn has_window(&self) -> bool {
        true
    }

    fn user_agent(&self) -> Option<&str> {
        Some(&self.user_agent)
    }

    fn host_os(&self) -> HostOs {
        HostOs::Other
    }
}
