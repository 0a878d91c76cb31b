//! Prelude module for date_range_checker.
//!
//! Re-exports the derive macros shared across modules.

pub use derive_more::Display;
