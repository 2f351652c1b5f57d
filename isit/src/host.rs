//! Host process platform provider

use isit_core::{HostOs, Platform};

/// Platform facts for the running process
///
/// A plain process has no window and no user agent, so browser-only
/// checks report false against it; the OS family comes from the
/// compile-time `std::env::consts::OS` name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostPlatform;

impl HostPlatform {
    /// Create a provider for the current process
    pub const fn new() -> Self {
        HostPlatform
    }
}

impl Platform for HostPlatform {
    fn has_window(&self) -> bool {
        false
    }

    fn user_agent(&self) -> Option<&str> {
        None
    }

    fn host_os(&self) -> HostOs {
        HostOs::from_name(std::env::consts::OS)
    }
}
