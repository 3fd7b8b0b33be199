//! Prelude module for iso_week_date crate.
//!
//! Re-exports the derive_more macros the value types derive.

pub use derive_more::Display;
