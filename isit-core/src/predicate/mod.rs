//! Predicate definitions
//!
//! Every function here is pure: a value or string in, a `bool` out, no
//! host state consulted. Host-facing checks live in the `isit` crate,
//! which injects platform facts through [`crate::traits::Platform`].

pub mod classify;
pub mod date;
pub mod format;
pub mod text;

pub use classify::{is_array, is_empty, is_false, is_object, is_primitive};
pub use date::is_leap;
pub use format::{is_cellphone, is_email, is_html};
pub use text::{is_chinese, is_lower_cased, is_upper_cased};
