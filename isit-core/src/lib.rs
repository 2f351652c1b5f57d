//! Isit Core - Dynamic Value Model and Predicate Definitions
//!
//! This crate provides the value model and the pure predicate functions
//! for boolean classification of values, strings, and years

pub mod predicate;
pub mod traits;
pub mod value;

pub use predicate::*;
pub use traits::*;
pub use value::*;
