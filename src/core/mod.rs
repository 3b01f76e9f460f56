//! Core value types: actions and reducers.
//!
//! Everything in this module is pure. State lives in the store; these types
//! only describe how it may change.

mod action;
mod reducer;

pub use action::{validate, Action, TYPE_KEY};
pub use reducer::Reducer;
