//! LoggingMiddleware - traces every action passing through the chain

use super::apply::{Middleware, MiddlewareApi};
use crate::store::{Dispatch, DispatchResult};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::Debug;
use tracing::{debug, warn};

/// Logs each action before it continues, and the resulting state after.
///
/// Always passes the action on. Events are emitted at `debug`; a rejected
/// action is logged at `warn`.
#[derive(Debug, Clone)]
pub struct LoggingMiddleware {
    store: Cow<'static, str>,
    log_state: bool,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self {
            store: Cow::Borrowed("store"),
            log_state: true,
        }
    }

    /// Label events with a store name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            store: name.into(),
            ..Self::new()
        }
    }

    /// Skip the state dump after each action (large states are noisy).
    pub fn without_state(mut self) -> Self {
        self.log_state = false;
        self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Debug> Middleware<S> for LoggingMiddleware {
    fn handle(&self, _api: &MiddlewareApi<S>, action: Value, next: &Dispatch<S>) -> DispatchResult<S> {
        debug!(store = %self.store, %action, "action");

        let result = next.call(action);
        match &result {
            Ok(state) if self.log_state => debug!(store = %self.store, ?state, "next state"),
            Ok(_) => {}
            Err(err) => warn!(store = %self.store, error = %err, "action rejected"),
        }
        result
    }
}
