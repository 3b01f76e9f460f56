//! Builder for constructing stores.

use crate::combinators::compose;
use crate::core::Reducer;
use crate::error::ConfigError;
use crate::middleware::{apply_middleware, Middleware};
use crate::store::{create_store, Enhancer, Store};

/// Builder for constructing stores with a fluent API.
///
/// Middleware added with [`middleware`](Self::middleware) is installed
/// through [`apply_middleware`] as the innermost enhancer. Enhancers added
/// with [`enhancer`](Self::enhancer) wrap it, the first one outermost.
///
/// # Example
///
/// ```rust
/// use oneway::{Action, LoggingMiddleware, StoreBuilder};
///
/// let store = StoreBuilder::new()
///     .reducer(|n: &u32, action: &Action| if action.is("inc") { n + 1 } else { *n })
///     .initial_state(0)
///     .middleware(LoggingMiddleware::named("counter"))
///     .build()
///     .unwrap();
///
/// store.dispatch(Action::new("inc")).unwrap();
/// assert_eq!(store.get_state(), 1);
/// ```
pub struct StoreBuilder<S: 'static> {
    reducer: Option<Reducer<S>>,
    initial_state: Option<S>,
    middlewares: Vec<Box<dyn Middleware<S>>>,
    enhancers: Vec<Enhancer<S>>,
}

impl<S: Clone + 'static> StoreBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            initial_state: None,
            middlewares: Vec::new(),
            enhancers: Vec::new(),
        }
    }

    /// Set the root reducer (required).
    pub fn reducer(mut self, reducer: impl Into<Reducer<S>>) -> Self {
        self.reducer = Some(reducer.into());
        self
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: S) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Append a middleware. Earlier middleware runs first.
    pub fn middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<S> + 'static,
    {
        self.middlewares.push(Box::new(middleware));
        self
    }

    /// Append a store enhancer.
    pub fn enhancer(mut self, enhancer: Enhancer<S>) -> Self {
        self.enhancers.push(enhancer);
        self
    }

    /// Build the store.
    /// Returns an error if the reducer or initial state is missing.
    pub fn build(self) -> Result<Store<S>, ConfigError> {
        let reducer = self.reducer.ok_or(ConfigError::MissingReducer)?;
        let initial_state = self.initial_state.ok_or(ConfigError::MissingInitialState)?;

        let mut enhancers = self.enhancers;
        if !self.middlewares.is_empty() {
            enhancers.push(apply_middleware(self.middlewares));
        }

        let enhancer: Option<Enhancer<S>> = match enhancers.len() {
            0 => None,
            1 => enhancers.pop(),
            _ => Some(Box::new(compose(enhancers))),
        };

        Ok(create_store(reducer, initial_state, enhancer))
    }
}

impl<S: Clone + 'static> Default for StoreBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
