//! Middleware: interceptors around dispatch.
//!
//! ```text
//! dispatch → m1 → m2 → … → base dispatch → reducer → subscribers
//! ```
//!
//! Middleware is attached with [`apply_middleware`], which produces a store
//! [`Enhancer`](crate::Enhancer). Each middleware receives a
//! [`MiddlewareApi`] (state reader plus the store's original dispatch) and
//! the next dispatch in the chain.

mod apply;
mod logging;

pub use apply::{apply_middleware, Middleware, MiddlewareApi};
pub use logging::LoggingMiddleware;
