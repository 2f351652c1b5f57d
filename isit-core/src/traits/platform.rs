//! Platform abstraction for host-facing checks

use core::fmt;

/// Host operating-system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HostOs {
    /// Windows
    Windows,
    /// macOS
    MacOs,
    /// Linux
    Linux,
    /// Anything else (BSDs, mobile targets, unknown hosts)
    Other,
}

impl HostOs {
    /// Classify an OS name as reported by `std::env::consts::OS`
    pub fn from_name(name: &str) -> Self {
        match name {
            "windows" => HostOs::Windows,
            "macos" => HostOs::MacOs,
            "linux" => HostOs::Linux,
            _ => HostOs::Other,
        }
    }

    /// Get the canonical lowercase name for this family
    pub const fn as_str(&self) -> &'static str {
        match self {
            HostOs::Windows => "windows",
            HostOs::MacOs => "macos",
            HostOs::Linux => "linux",
            HostOs::Other => "other",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source of platform facts for environment checks
///
/// Implementations answer three questions: whether a windowed user agent
/// is present, what that user agent string is, and which OS family the
/// host belongs to. Checks in the `isit` crate are generic over this
/// trait, so tests can substitute fixed answers for real host state.
pub trait Platform {
    /// Whether a browser-style windowed environment is present
    fn has_window(&self) -> bool;

    /// The user agent string, if one exists
    ///
    /// `None` means no user agent is available; checks that consult the
    /// user agent report false in that case.
    fn user_agent(&self) -> Option<&str>;

    /// The operating-system family of the host
    fn host_os(&self) -> HostOs;
}
