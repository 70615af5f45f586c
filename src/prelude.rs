//! Prelude module for the sambat crate.
//!
//! Re-exports the derive macros used across the date and progress types.

pub use derive_more::Display;
