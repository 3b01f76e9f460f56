//! The store and its construction hook.
//!
//! A [`Store`] owns one state value and one ordered subscriber list. Its
//! dispatch validates the incoming value, runs the reducer, swaps the state
//! and notifies subscribers, all synchronously.

mod dispatch;
mod store;
mod subscription;

pub use dispatch::{Dispatch, DispatchResult};
pub(crate) use store::StoreCell;
pub use store::{base_creator, create_store, Enhancer, Store, StoreCreator};
pub use subscription::Subscription;
