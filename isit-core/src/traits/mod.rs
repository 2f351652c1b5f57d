//! Trait definitions for pluggable host state

pub mod platform;

pub use platform::{HostOs, Platform};
