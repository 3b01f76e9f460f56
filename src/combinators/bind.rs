//! Binding action creators to a dispatch function.

use crate::error::ConfigError;
use crate::store::{Dispatch, DispatchResult};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Zero-argument function producing an action.
pub struct ActionCreator {
    f: Rc<dyn Fn() -> Value>,
}

impl ActionCreator {
    pub fn new<F, A>(f: F) -> Self
    where
        F: Fn() -> A + 'static,
        A: Into<Value>,
    {
        Self {
            f: Rc::new(move || f().into()),
        }
    }

    /// Build the action without dispatching it.
    pub fn create(&self) -> Value {
        (self.f)()
    }
}

impl Clone for ActionCreator {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

/// An action creator that dispatches what it creates.
pub struct BoundActionCreator<S> {
    creator: ActionCreator,
    dispatch: Dispatch<S>,
}

impl<S> BoundActionCreator<S> {
    /// Create the action and dispatch it once.
    pub fn call(&self) -> DispatchResult<S> {
        self.dispatch.call(self.creator.create())
    }
}

impl<S> Clone for BoundActionCreator<S> {
    fn clone(&self) -> Self {
        Self {
            creator: self.creator.clone(),
            dispatch: self.dispatch.clone(),
        }
    }
}

/// Bound action creators, keyed like their input.
pub struct BoundActionCreators<S> {
    bound: BTreeMap<String, BoundActionCreator<S>>,
}

impl<S> BoundActionCreators<S> {
    pub fn get(&self, key: &str) -> Option<&BoundActionCreator<S>> {
        self.bound.get(key)
    }

    /// Call the creator bound under `key`. `None` if there is no such key.
    pub fn call(&self, key: &str) -> Option<DispatchResult<S>> {
        self.get(key).map(BoundActionCreator::call)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bound.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

/// Wrap each action creator so that calling it dispatches its result.
///
/// Every wrapper owns its own creator, so calling one key never runs
/// another key's creator. A key that appears more than once is a
/// [`ConfigError::DuplicateCreatorKey`], the same way
/// [`combine_reducers`](crate::combine_reducers) treats a repeated reducer key.
///
/// # Example
///
/// ```rust
/// use oneway::{bind_action_creators, create_store, Action, ActionCreator};
///
/// let store = create_store(
///     |n: &i64, action: &Action| if action.is("inc") { n + 1 } else { n - 1 },
///     0,
///     None,
/// );
/// let actions = bind_action_creators(
///     [
///         ("inc", ActionCreator::new(|| Action::new("inc"))),
///         ("dec", ActionCreator::new(|| Action::new("dec"))),
///     ],
///     &store.dispatcher(),
/// )
/// .unwrap();
///
/// actions.call("inc").unwrap().unwrap();
/// actions.call("inc").unwrap().unwrap();
/// actions.call("dec").unwrap().unwrap();
/// assert_eq!(store.get_state(), 1);
/// ```
pub fn bind_action_creators<I, K, S>(
    creators: I,
    dispatch: &Dispatch<S>,
) -> Result<BoundActionCreators<S>, ConfigError>
where
    I: IntoIterator<Item = (K, ActionCreator)>,
    K: Into<String>,
{
    let mut bound = BTreeMap::new();
    for (key, creator) in creators {
        match bound.entry(key.into()) {
            Entry::Occupied(entry) => {
                return Err(ConfigError::DuplicateCreatorKey {
                    key: entry.key().clone(),
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(BoundActionCreator {
                    creator,
                    dispatch: dispatch.clone(),
                });
            }
        }
    }

    Ok(BoundActionCreators { bound })
}
