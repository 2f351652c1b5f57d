//! Isit - Boolean Predicates for Values, Strings, and Hosts
//!
//! This library provides standalone boolean checks: value-shape classification,
//! string format validation, and environment detection through pluggable
//! platform providers.
//!
//! ## Architecture
//!
//! Isit follows a clean definitions/implementation separation:
//!
//! - **isit-core**: Pure value model, predicate definitions, and the platform
//!   trait (no host access)
//! - **isit**: Concrete platform providers and the JSON bridge
//!
//! ## Quick Start
//!
//! ```rust
//! use isit::{is_array, is_json, is_leap, Detector, FixedPlatform, Value};
//!
//! // Value classification
//! let value = Value::from(vec![Value::Number(1.0)]);
//! assert!(is_array(&value));
//!
//! // Format validation
//! assert!(is_leap(2024));
//! assert!(is_json("[1, 2, 3]"));
//!
//! // Environment detection against explicit platform facts
//! let detector = Detector::new(
//!     FixedPlatform::new()
//!         .with_window(true)
//!         .with_user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
//! );
//! assert!(detector.is_windows());
//! ```
//!
//! ## Features
//!
//! - **Value model**: a closed tagged union standing in for "any value"
//! - **Format validators**: email, cellphone, HTML tag shapes, CJK text, case
//! - **Platform injection**: detectors read host facts through a trait, so
//!   tests substitute fixed answers for real host state
//! - **`serde` feature** (default): JSON parsing and `serde_json::Value`
//!   interop

// Re-export the core model and predicate definitions
pub use isit_core::{
    // Value model
    same_value, Value, ValueKind,
    // Platform abstraction
    HostOs, Platform,
    // Value classification
    is_array, is_empty, is_false, is_object, is_primitive,
    // String and year validators
    is_cellphone, is_chinese, is_email, is_html, is_leap, is_lower_cased, is_upper_cased,
};

// Implementation modules
pub mod detect;
pub mod fixed;
pub mod host;
#[cfg(feature = "serde")]
pub mod json;
pub mod user_agent;

// Public exports
pub use detect::{is_browser, is_iphone, is_mac, is_weixin, is_windows, Detector};
pub use fixed::FixedPlatform;
pub use host::HostPlatform;
pub use user_agent::UserAgentPlatform;

// JSON support
#[cfg(feature = "serde")]
pub use json::{is_json, parse_value};
