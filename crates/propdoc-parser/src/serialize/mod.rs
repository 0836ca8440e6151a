//! Canonical display strings for types and values.
//!
//! Both serializers are total. Types fall back to `"any"` (missing) or
//! `"unknown"` (unsupported); values fall back to the empty string so an
//! absent default never renders as a visible placeholder.

mod types;
mod values;

pub use types::{serialize_type, serialize_type_or_any};
pub use values::serialize_value;
