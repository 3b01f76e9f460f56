//! The store: one state cell, one reducer, an ordered subscriber list.

use super::dispatch::{Dispatch, DispatchResult};
use super::subscription::{Subscribers, Subscription};
use crate::core::{Action, Reducer};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Function that builds a store from a reducer and an initial state.
pub type StoreCreator<S> = Rc<dyn Fn(Reducer<S>, S) -> Store<S>>;

/// Wraps store construction.
///
/// An enhancer receives the creator it would otherwise have used and returns
/// the creator to use instead. [`apply_middleware`](crate::apply_middleware)
/// is one.
pub type Enhancer<S> = Box<dyn Fn(StoreCreator<S>) -> StoreCreator<S>>;

/// State shared by every handle onto one store.
pub(crate) struct StoreCell<S> {
    state: RefCell<S>,
    subscribers: Rc<Subscribers>,
}

impl<S: Clone> StoreCell<S> {
    pub(crate) fn get_state(&self) -> S {
        self.state.borrow().clone()
    }
}

/// Single source of truth for a piece of application state.
///
/// The state only changes through [`Store::dispatch`]. Every successful
/// dispatch replaces the state and then calls each subscriber, in
/// registration order, before returning.
///
/// Single-threaded by construction (`Rc`/`RefCell`). Re-entrant calls from
/// subscribers and middleware are allowed and run to completion before the
/// outer dispatch resumes.
///
/// # Example
///
/// ```rust
/// use oneway::{create_store, Action};
///
/// let store = create_store(
///     |count: &i64, action: &Action| match action.type_str() {
///         Some("inc") => count + 1,
///         Some("dec") => count - 1,
///         _ => *count,
///     },
///     0,
///     None,
/// );
///
/// store.dispatch(Action::new("inc")).unwrap();
/// store.dispatch(Action::new("inc")).unwrap();
/// assert_eq!(store.get_state(), 2);
/// ```
pub struct Store<S> {
    cell: Rc<StoreCell<S>>,
    dispatch: Dispatch<S>,
}

/// Create a store.
///
/// Without an enhancer the store starts at `initial_state` with no
/// subscribers. With one, construction is handed over entirely: the result is
/// `enhancer(base_creator)(reducer, initial_state)`. The creator passed to the
/// enhancer builds plain stores and takes no enhancer of its own.
pub fn create_store<S, R>(reducer: R, initial_state: S, enhancer: Option<Enhancer<S>>) -> Store<S>
where
    S: Clone + 'static,
    R: Into<Reducer<S>>,
{
    let reducer = reducer.into();
    match enhancer {
        Some(enhance) => {
            debug!("store construction delegated to enhancer");
            let create = enhance(base_creator());
            create(reducer, initial_state)
        }
        None => Store::new(reducer, initial_state),
    }
}

/// The creator handed to enhancers.
pub fn base_creator<S: Clone + 'static>() -> StoreCreator<S> {
    Rc::new(Store::<S>::new)
}

impl<S: Clone + 'static> Store<S> {
    fn new(reducer: Reducer<S>, initial_state: S) -> Self {
        let cell = Rc::new(StoreCell {
            state: RefCell::new(initial_state),
            subscribers: Rc::new(Subscribers::default()),
        });
        let dispatch = base_dispatch(Rc::clone(&cell), reducer);
        Self { cell, dispatch }
    }

    /// Clone of the current state.
    pub fn get_state(&self) -> S {
        self.cell.get_state()
    }

    /// Dispatch an action through the store's dispatch chain.
    ///
    /// Returns the state the reducer produced for this action, even if a
    /// subscriber dispatched again before the call returned. Fails with a
    /// validation error if the value is not a JSON object with a `type` field;
    /// the state is untouched in that case.
    pub fn dispatch(&self, action: impl Into<serde_json::Value>) -> DispatchResult<S> {
        self.dispatch.call(action)
    }
}

impl<S> Store<S> {
    /// Read the current state without cloning it.
    ///
    /// The state is borrowed for the duration of `f`; dispatching from inside
    /// `f` panics. Use [`Store::get_state`] where `f` needs to dispatch.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        f(&self.cell.state.borrow())
    }

    /// Register a callback to run after every successful dispatch.
    ///
    /// Callbacks run in registration order with no arguments. Registering the
    /// same callback twice makes it run twice. A callback added while
    /// subscribers are being notified first runs on the next dispatch.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.cell.subscribers.add(Rc::new(callback))
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.cell.subscribers.len()
    }

    /// Handle to the store's dispatch, middleware included.
    pub fn dispatcher(&self) -> Dispatch<S> {
        self.dispatch.clone()
    }

    pub(crate) fn cell(&self) -> Rc<StoreCell<S>> {
        Rc::clone(&self.cell)
    }

    /// The same store with its dispatch swapped out.
    pub(crate) fn with_dispatch(self, dispatch: Dispatch<S>) -> Self {
        Self {
            cell: self.cell,
            dispatch,
        }
    }
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            dispatch: self.dispatch.clone(),
        }
    }
}

/// Validate, reduce, replace, notify.
///
/// The state is borrowed only while the reducer runs and never while
/// subscribers run, so subscribers may dispatch again. A reducer that panics
/// leaves the state as it was.
fn base_dispatch<S: Clone + 'static>(cell: Rc<StoreCell<S>>, reducer: Reducer<S>) -> Dispatch<S> {
    Dispatch::new(move |raw| {
        let action = Action::try_from(raw).inspect_err(|err| {
            warn!(error = %err, "rejected dispatched value");
        })?;
        trace!(action_type = %action.action_type(), "reducing action");

        let next = {
            let current = cell.state.borrow();
            reducer.reduce(&current, &action)
        };
        let returned = next.clone();
        *cell.state.borrow_mut() = next;

        let subscribers = cell.subscribers.snapshot();
        for subscriber in &subscribers {
            subscriber();
        }
        trace!(notified = subscribers.len(), "subscribers notified");

        Ok(returned)
    })
}
