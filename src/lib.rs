//! Oneway: a minimal unidirectional state container
//!
//! One state cell, changed only by dispatching actions through a pure
//! reducer. Subscribers hear about every change, in the order they
//! registered, before `dispatch` returns. Middleware wraps dispatch to
//! observe, rewrite or block actions.
//!
//! # Core Concepts
//!
//! - **Action**: a JSON object with a `type` field, validated at dispatch
//! - **Reducer**: pure `(state, action) -> state`
//! - **Store**: owns the state; `get_state`, `dispatch`, `subscribe`
//! - **Middleware**: interceptors composed right to left around dispatch
//! - **Enhancer**: a wrapper around store construction
//!
//! Everything is single-threaded and synchronous. A dispatch issued from a
//! subscriber or middleware runs to completion before the outer dispatch
//! continues.
//!
//! # Example
//!
//! ```rust
//! use oneway::{apply_middleware, create_store, Action, LoggingMiddleware, Middleware};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Todos {
//!     items: Vec<String>,
//! }
//!
//! fn todos(state: &Todos, action: &Action) -> Todos {
//!     match (action.type_str(), action.get("text").and_then(|t| t.as_str())) {
//!         (Some("add"), Some(text)) => {
//!             let mut items = state.items.clone();
//!             items.push(text.to_string());
//!             Todos { items }
//!         }
//!         _ => state.clone(),
//!     }
//! }
//!
//! let middlewares: Vec<Box<dyn Middleware<Todos>>> = vec![Box::new(LoggingMiddleware::named("todos"))];
//! let store = create_store(todos, Todos { items: vec![] }, Some(apply_middleware(middlewares)));
//!
//! let renders = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&renders);
//! store.subscribe(move || counter.set(counter.get() + 1));
//!
//! store.dispatch(Action::new("add").with("text", "write docs")).unwrap();
//!
//! assert_eq!(store.get_state().items, vec!["write docs"]);
//! assert_eq!(renders.get(), 1);
//! ```

pub mod builder;
pub mod combinators;
pub mod core;
pub mod error;
pub mod middleware;
pub mod store;

// Re-export commonly used types
pub use builder::StoreBuilder;
pub use combinators::{
    bind_action_creators, combine_reducers, compose, ActionCreator, BoundActionCreator,
    BoundActionCreators, SliceReducer,
};
pub use crate::core::{Action, Reducer};
pub use error::{ConfigError, Error, ValidationError};
pub use middleware::{apply_middleware, LoggingMiddleware, Middleware, MiddlewareApi};
pub use store::{
    create_store, Dispatch, DispatchResult, Enhancer, Store, StoreCreator, Subscription,
};
