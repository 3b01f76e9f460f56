//! Structural helpers layered on the store.
//!
//! - [`compose`]: right-to-left function composition
//! - [`combine_reducers`]: one reducer per key of an object-shaped state
//! - [`bind_action_creators`]: action creators that dispatch on call

mod bind;
mod combine;
mod compose;

pub use bind::{bind_action_creators, ActionCreator, BoundActionCreator, BoundActionCreators};
pub use combine::{combine_reducers, SliceReducer};
pub use compose::compose;
