//! Prelude module for the range_calendar crate.
//!
//! Re-exports the derive_more macros used across the crate.

pub use derive_more::{Deref, Display};
