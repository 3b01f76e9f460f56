//! The reducer contract.
//!
//! A reducer is a pure function computing the next state from the current
//! state and an action. It receives the state by reference and returns a new
//! value, so in-place mutation of the stored state is impossible.

use super::action::Action;
use std::rc::Rc;

/// Pure transition function `(state, action) -> state`.
///
/// Cheap to clone; clones share the same function.
///
/// # Example
///
/// ```rust
/// use oneway::{Action, Reducer};
///
/// let counter = Reducer::new(|count: &i64, action: &Action| {
///     if action.is("inc") {
///         count + 1
///     } else {
///         *count
///     }
/// });
///
/// assert_eq!(counter.reduce(&1, &Action::new("inc")), 2);
/// assert_eq!(counter.reduce(&1, &Action::new("noop")), 1);
/// ```
pub struct Reducer<S> {
    f: Rc<dyn Fn(&S, &Action) -> S>,
}

impl<S> Reducer<S> {
    /// Wrap a reducer function.
    ///
    /// The function must be pure: deterministic, no side effects.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&S, &Action) -> S + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Compute the next state.
    pub fn reduce(&self, state: &S, action: &Action) -> S {
        (self.f)(state, action)
    }
}

impl<S> Clone for Reducer<S> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<S, F> From<F> for Reducer<S>
where
    F: Fn(&S, &Action) -> S + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}
