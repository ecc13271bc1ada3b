//! Core types and trait definitions for the Atlas country cache.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod country;
pub mod error;
pub mod merge;
pub mod source;
pub mod store;

pub use error::{Error, Result};
