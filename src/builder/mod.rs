//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder and macros for wiring stores with
//! minimal boilerplate while keeping construction errors explicit.

pub mod macros;
pub mod store;

pub use store::StoreBuilder;
