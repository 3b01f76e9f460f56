//! Dispatch handles.

use crate::error::Error;
use serde_json::Value;
use std::rc::Rc;

/// Outcome of a dispatch: the state after the call, or why it was refused.
pub type DispatchResult<S> = Result<S, Error>;

/// A callable dispatch function.
///
/// Raw values go in untouched; validation happens at the base of the chain,
/// so middleware may observe or rewrite a value before it is checked.
/// Cloning yields another handle to the same function.
pub struct Dispatch<S> {
    f: Rc<dyn Fn(Value) -> DispatchResult<S>>,
}

impl<S> Dispatch<S> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value) -> DispatchResult<S> + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Dispatch an action (or anything convertible to a JSON value).
    pub fn call(&self, action: impl Into<Value>) -> DispatchResult<S> {
        (self.f)(action.into())
    }

    /// True when both handles point at the same function.
    pub fn same_as(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.f), Rc::as_ptr(&other.f))
    }
}

impl<S> Clone for Dispatch<S> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<S> std::fmt::Debug for Dispatch<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatch")
            .field("ptr", &Rc::as_ptr(&self.f).cast::<()>())
            .finish()
    }
}
