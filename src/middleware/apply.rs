//! Middleware trait and chain composition.

use crate::combinators::compose;
use crate::core::Reducer;
use crate::store::{Dispatch, DispatchResult, Enhancer, StoreCell, StoreCreator};
use serde_json::Value;
use std::rc::Rc;
use tracing::debug;

/// Reduced view of a store handed to middleware.
///
/// `dispatch` is the store's original dispatch, captured once when the chain
/// is built. Calling it skips every middleware. To re-enter the full chain a
/// middleware must hold the store's composed dispatch
/// ([`Store::dispatcher`](crate::Store::dispatcher)) instead.
pub struct MiddlewareApi<S> {
    cell: Rc<StoreCell<S>>,
    dispatch: Dispatch<S>,
}

impl<S: Clone> MiddlewareApi<S> {
    /// Current state of the underlying store.
    pub fn get_state(&self) -> S {
        self.cell.get_state()
    }
}

impl<S> MiddlewareApi<S> {
    /// Dispatch through the store's original (base) dispatch.
    pub fn dispatch(&self, action: impl Into<Value>) -> DispatchResult<S> {
        self.dispatch.call(action)
    }

    /// Handle to the original dispatch.
    pub fn dispatcher(&self) -> &Dispatch<S> {
        &self.dispatch
    }
}

impl<S> Clone for MiddlewareApi<S> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            dispatch: self.dispatch.clone(),
        }
    }
}

/// Interceptor sitting between `dispatch` and the reducer.
///
/// A middleware can:
/// - Inspect the raw action and the current state
/// - Rewrite the action before passing it on
/// - Dispatch further actions via `api`
/// - Block the action by returning without calling `next`
///
/// Blocking is not an error: later middleware, the reducer and the
/// subscribers simply do not run for that call.
///
/// Closures of the matching shape implement this trait.
///
/// # Example
///
/// ```rust
/// use oneway::{apply_middleware, create_store, Action, Dispatch, DispatchResult, Middleware, MiddlewareApi};
/// use serde_json::Value;
///
/// let drop_noise = |api: &MiddlewareApi<i64>, action: Value, next: &Dispatch<i64>| -> DispatchResult<i64> {
///     if action["type"] == "noise" {
///         return Ok(api.get_state());
///     }
///     next.call(action)
/// };
/// let middlewares: Vec<Box<dyn Middleware<i64>>> = vec![Box::new(drop_noise)];
///
/// let store = create_store(
///     |n: &i64, _: &Action| n + 1,
///     0,
///     Some(apply_middleware(middlewares)),
/// );
///
/// store.dispatch(Action::new("noise")).unwrap();
/// store.dispatch(Action::new("signal")).unwrap();
/// assert_eq!(store.get_state(), 1);
/// ```
pub trait Middleware<S> {
    /// Handle one dispatched value.
    ///
    /// # Parameters
    /// - `api`: read access to the state and the original dispatch
    /// - `action`: the raw dispatched value, not yet validated
    /// - `next`: the rest of the chain; ends in the base dispatch
    fn handle(&self, api: &MiddlewareApi<S>, action: Value, next: &Dispatch<S>) -> DispatchResult<S>;
}

impl<S, F> Middleware<S> for F
where
    F: Fn(&MiddlewareApi<S>, Value, &Dispatch<S>) -> DispatchResult<S>,
{
    fn handle(&self, api: &MiddlewareApi<S>, action: Value, next: &Dispatch<S>) -> DispatchResult<S> {
        self(api, action, next)
    }
}

type Transformer<S> = Box<dyn Fn(Dispatch<S>) -> Dispatch<S>>;

/// Build an enhancer that routes every dispatch through `middlewares`.
///
/// The first middleware is outermost: it sees the action first and its code
/// after `next` runs last. With middlewares `[m1, m2]` each logging around
/// `next`, one dispatch logs `m1-before, m2-before, m2-after, m1-after`.
///
/// The enhanced store shares state and subscribers with the base store; only
/// its dispatch differs.
pub fn apply_middleware<S>(middlewares: Vec<Box<dyn Middleware<S>>>) -> Enhancer<S>
where
    S: Clone + 'static,
{
    let middlewares: Rc<Vec<Rc<dyn Middleware<S>>>> =
        Rc::new(middlewares.into_iter().map(Rc::from).collect());

    Box::new(move |create: StoreCreator<S>| -> StoreCreator<S> {
        let middlewares = Rc::clone(&middlewares);
        Rc::new(move |reducer: Reducer<S>, initial_state: S| {
            let store = create(reducer, initial_state);
            let api = MiddlewareApi {
                cell: store.cell(),
                dispatch: store.dispatcher(),
            };

            let transformers: Vec<Transformer<S>> = middlewares
                .iter()
                .map(|middleware| transformer(Rc::clone(middleware), api.clone()))
                .collect();

            debug!(middlewares = transformers.len(), "middleware chain composed");
            let dispatch = compose(transformers)(store.dispatcher());
            store.with_dispatch(dispatch)
        })
    })
}

fn transformer<S: 'static>(middleware: Rc<dyn Middleware<S>>, api: MiddlewareApi<S>) -> Transformer<S> {
    Box::new(move |next: Dispatch<S>| {
        let middleware = Rc::clone(&middleware);
        let api = api.clone();
        Dispatch::new(move |action| middleware.handle(&api, action, &next))
    })
}
