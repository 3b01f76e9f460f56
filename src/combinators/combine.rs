//! Combining per-key reducers into one whole-state reducer.

use crate::core::{Action, Reducer};
use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::debug;

/// Reducer for one key of an object-shaped state.
///
/// Receives `None` when the key is absent from the state, and is expected to
/// supply its own default in that case.
pub struct SliceReducer {
    f: Rc<dyn Fn(Option<&Value>, &Action) -> Value>,
}

impl SliceReducer {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Option<&Value>, &Action) -> Value + 'static,
    {
        Self { f: Rc::new(f) }
    }

    pub fn reduce(&self, slice: Option<&Value>, action: &Action) -> Value {
        (self.f)(slice, action)
    }
}

impl Clone for SliceReducer {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

/// Combine per-key reducers into a reducer over a JSON object.
///
/// The result maps every registered key `k` to `reducers[k](state.get(k),
/// action)`. Keys present in the state but not registered are dropped from
/// the output. A state that is not an object is treated as having every key
/// absent.
///
/// Registrations are checked here, before any dispatch: an empty key or a
/// key registered twice is a [`ConfigError`].
///
/// # Example
///
/// ```rust
/// use oneway::{combine_reducers, create_store, Action, SliceReducer};
/// use serde_json::{json, Value};
///
/// let count = SliceReducer::new(|slice: Option<&Value>, action: &Action| {
///     let n = slice.and_then(Value::as_i64).unwrap_or(0);
///     json!(if action.is("inc") { n + 1 } else { n })
/// });
/// let last = SliceReducer::new(|slice: Option<&Value>, action: &Action| {
///     if action.is("@@init") {
///         slice.cloned().unwrap_or(Value::Null)
///     } else {
///         action.action_type().clone()
///     }
/// });
///
/// let root = combine_reducers([("count", count), ("last", last)]).unwrap();
/// let store = create_store(root, json!({}), None);
///
/// store.dispatch(Action::new("inc")).unwrap();
/// assert_eq!(store.get_state(), json!({ "count": 1, "last": "inc" }));
/// ```
pub fn combine_reducers<I, K>(reducers: I) -> Result<Reducer<Value>, ConfigError>
where
    I: IntoIterator<Item = (K, SliceReducer)>,
    K: Into<String>,
{
    let mut seen = HashSet::new();
    let mut slices = Vec::new();
    for (key, reducer) in reducers {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyReducerKey);
        }
        if !seen.insert(key.clone()) {
            return Err(ConfigError::DuplicateReducerKey { key });
        }
        slices.push((key, reducer));
    }
    debug!(keys = slices.len(), "reducers combined");

    Ok(Reducer::new(move |state: &Value, action: &Action| {
        let current = state.as_object();

        if let Some(current) = current {
            let dropped: Vec<&str> = current
                .keys()
                .filter(|key| !seen.contains(*key))
                .map(String::as_str)
                .collect();
            if !dropped.is_empty() {
                debug!(?dropped, "state keys without a reducer dropped");
            }
        }

        let mut next = Map::new();
        for (key, reducer) in &slices {
            let slice = current.and_then(|fields| fields.get(key));
            next.insert(key.clone(), reducer.reduce(slice, action));
        }
        Value::Object(next)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn counter() -> SliceReducer {
        SliceReducer::new(|slice: Option<&Value>, action: &Action| {
            let n = slice.and_then(Value::as_i64).unwrap_or(0);
            if action.is("inc") {
                json!(n + 1)
            } else {
                json!(n)
            }
        })
    }

    fn recorder() -> SliceReducer {
        SliceReducer::new(|slice: Option<&Value>, action: &Action| {
            let mut seen = slice
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            seen.push(action.action_type().clone());
            Value::Array(seen)
        })
    }

    #[test]
    fn each_key_gets_its_own_slice() {
        let root = combine_reducers([("a", counter()), ("b", recorder())]).unwrap();
        let state = json!({ "a": 4, "b": ["x"] });

        let next = root.reduce(&state, &Action::new("inc"));

        assert_eq!(next, json!({ "a": 5, "b": ["x", "inc"] }));
    }

    #[test]
    fn absent_keys_reach_reducer_as_none() {
        let root = combine_reducers([("a", counter()), ("b", recorder())]).unwrap();

        let next = root.reduce(&json!({}), &Action::new("noop"));

        assert_eq!(next, json!({ "a": 0, "b": ["noop"] }));
    }

    #[test]
    fn non_object_state_counts_as_empty() {
        let root = combine_reducers([("a", counter())]).unwrap();
        assert_eq!(root.reduce(&Value::Null, &Action::new("inc")), json!({ "a": 1 }));
    }

    #[test]
    fn unregistered_keys_are_dropped() {
        let root = combine_reducers([("a", counter())]).unwrap();

        let next = root.reduce(&json!({ "a": 1, "extra": true }), &Action::new("noop"));

        assert_eq!(next, json!({ "a": 1 }));
    }

    #[test]
    fn input_state_is_not_modified() {
        let root = combine_reducers([("a", counter())]).unwrap();
        let state = json!({ "a": 1 });

        let _ = root.reduce(&state, &Action::new("inc"));

        assert_eq!(state, json!({ "a": 1 }));
    }

    #[test]
    fn duplicate_keys_fail_at_combination() {
        let result = combine_reducers([("a", counter()), ("a", recorder())]);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicateReducerKey { key }) if key == "a"
        ));
    }

    #[test]
    fn empty_key_fails_at_combination() {
        let result = combine_reducers([("", counter())]);
        assert!(matches!(result, Err(ConfigError::EmptyReducerKey)));
    }

    #[test]
    fn empty_mapping_yields_empty_object() {
        let root = combine_reducers(Vec::<(String, SliceReducer)>::new()).unwrap();
        assert_eq!(root.reduce(&json!({ "a": 1 }), &Action::new("x")), json!({}));
    }
}
