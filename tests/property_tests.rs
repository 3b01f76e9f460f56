//! Property-based tests for the store contract.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use oneway::{
    apply_middleware, bind_action_creators, combine_reducers, compose, create_store, Action,
    ActionCreator, Dispatch, DispatchResult, Error, Middleware, MiddlewareApi, SliceReducer,
    ValidationError,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum Op {
    Add(i64),
    Mul(i64),
    Reset,
}

impl Op {
    fn to_action(&self) -> Action {
        match self {
            Op::Add(n) => Action::new("add").with("n", *n),
            Op::Mul(n) => Action::new("mul").with("n", *n),
            Op::Reset => Action::new("reset"),
        }
    }
}

fn arithmetic(state: &i64, action: &Action) -> i64 {
    let n = action.get("n").and_then(Value::as_i64).unwrap_or(0);
    match action.type_str() {
        Some("add") => state.wrapping_add(n),
        Some("mul") => state.wrapping_mul(n),
        Some("reset") => 0,
        _ => *state,
    }
}

prop_compose! {
    fn arbitrary_op()(variant in 0..3u8, n in -1000i64..1000) -> Op {
        match variant {
            0 => Op::Add(n),
            1 => Op::Mul(n),
            _ => Op::Reset,
        }
    }
}

fn arbitrary_non_object() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
        prop::collection::vec(any::<i32>(), 0..4).prop_map(|v| json!(v)),
    ]
}

fn arbitrary_untyped_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-su-z][a-z]{0,6}", any::<i32>(), 0..5).prop_map(|fields| {
        Value::Object(fields.into_iter().map(|(k, v)| (k, json!(v))).collect::<Map<_, _>>())
    })
}

proptest! {
    #[test]
    fn initial_state_is_observable(initial in any::<i64>()) {
        let store = create_store(arithmetic, initial, None);
        prop_assert_eq!(store.get_state(), initial);
    }

    #[test]
    fn dispatch_applies_reducer(
        initial in -1000i64..1000,
        ops in prop::collection::vec(arbitrary_op(), 0..20)
    ) {
        let store = create_store(arithmetic, initial, None);
        let mut expected = initial;

        for op in &ops {
            let action = op.to_action();
            expected = arithmetic(&expected, &action);
            let returned = store.dispatch(action).unwrap();
            prop_assert_eq!(returned, expected);
            prop_assert_eq!(store.get_state(), expected);
        }
    }

    #[test]
    fn missing_type_is_rejected_and_state_kept(
        initial in any::<i64>(),
        value in arbitrary_untyped_object()
    ) {
        let store = create_store(arithmetic, initial, None);

        let err = store.dispatch(value).unwrap_err();

        prop_assert_eq!(err, Error::Validation(ValidationError::MissingType));
        prop_assert_eq!(store.get_state(), initial);
    }

    #[test]
    fn non_objects_are_rejected(value in arbitrary_non_object()) {
        let store = create_store(arithmetic, 1, None);

        let err = store.dispatch(value).unwrap_err();

        let is_not_an_object = matches!(err, Error::Validation(ValidationError::NotAnObject { .. }));
        prop_assert!(is_not_an_object);
        prop_assert_eq!(store.get_state(), 1);
    }

    #[test]
    fn subscribers_fire_once_per_dispatch_in_order(
        subscribers in 1usize..6,
        dispatches in 0usize..6
    ) {
        let store = create_store(arithmetic, 0, None);
        let log = Rc::new(RefCell::new(Vec::new()));
        for id in 0..subscribers {
            let log = Rc::clone(&log);
            let _ = store.subscribe(move || log.borrow_mut().push(id));
        }

        for _ in 0..dispatches {
            store.dispatch(Action::new("add").with("n", 1)).unwrap();
        }

        let expected: Vec<usize> = (0..dispatches).flat_map(|_| 0..subscribers).collect();
        prop_assert_eq!(&*log.borrow(), &expected);
    }

    #[test]
    fn combined_reducer_matches_per_key_reducers(
        a in proptest::option::of(-100i64..100),
        b in proptest::option::of(-100i64..100),
        op in arbitrary_op()
    ) {
        let ra = |slice: Option<&Value>, action: &Action| {
            json!(arithmetic(&slice.and_then(Value::as_i64).unwrap_or(0), action))
        };
        let rb = |slice: Option<&Value>, action: &Action| {
            json!(arithmetic(&slice.and_then(Value::as_i64).unwrap_or(1), action).wrapping_neg())
        };
        let root = combine_reducers([
            ("a", SliceReducer::new(ra)),
            ("b", SliceReducer::new(rb)),
        ])
        .unwrap();

        let mut state = Map::new();
        if let Some(a) = a {
            state.insert("a".to_string(), json!(a));
        }
        if let Some(b) = b {
            state.insert("b".to_string(), json!(b));
        }
        let state = Value::Object(state);
        let action = op.to_action();

        let expected = json!({
            "a": ra(state.get("a"), &action),
            "b": rb(state.get("b"), &action),
        });
        prop_assert_eq!(root.reduce(&state, &action), expected);
    }

    #[test]
    fn middleware_nesting_is_symmetric(count in 0usize..6) {
        let log: Rc<RefCell<Vec<String>>> = Rc::default();
        let middlewares: Vec<Box<dyn Middleware<i64>>> = (0..count)
            .map(|i| {
                let log = Rc::clone(&log);
                let m: Box<dyn Middleware<i64>> = Box::new(
                    move |_: &MiddlewareApi<i64>, action: Value, next: &Dispatch<i64>| -> DispatchResult<i64> {
                        log.borrow_mut().push(format!("m{i}-before"));
                        let result = next.call(action);
                        log.borrow_mut().push(format!("m{i}-after"));
                        result
                    },
                );
                m
            })
            .collect();
        let reducer_log = Rc::clone(&log);
        let store = create_store(
            move |n: &i64, _: &Action| {
                reducer_log.borrow_mut().push("reducer".to_string());
                n + 1
            },
            0,
            Some(apply_middleware(middlewares)),
        );

        store.dispatch(Action::new("go")).unwrap();

        let mut expected: Vec<String> = (0..count).map(|i| format!("m{i}-before")).collect();
        expected.push("reducer".to_string());
        expected.extend((0..count).rev().map(|i| format!("m{i}-after")));
        prop_assert_eq!(&*log.borrow(), &expected);
    }

    #[test]
    fn compose_identities(x in any::<i32>()) {
        let f = |n: i64| n.wrapping_mul(3);
        let g = |n: i64| n.wrapping_sub(7);
        let h = |n: i64| n.wrapping_add(11);
        let x = i64::from(x);

        let fns = vec![f as fn(i64) -> i64, g, h];
        prop_assert_eq!(compose(fns)(x), f(g(h(x))));
        prop_assert_eq!(compose(Vec::<fn(i64) -> i64>::new())(x), x);
        prop_assert_eq!(compose(vec![f])(x), f(x));
        prop_assert_eq!(oneway::compose!(f, g, h)(x), f(g(h(x))));
    }

    #[test]
    fn bound_creators_dispatch_their_own_action(
        calls in prop::collection::vec(0usize..3, 0..12)
    ) {
        let keys = ["inc", "dec", "reset"];
        let dispatched: Rc<RefCell<Vec<Value>>> = Rc::default();
        let sink = Rc::clone(&dispatched);
        let dispatch: Dispatch<()> = Dispatch::new(move |action| {
            sink.borrow_mut().push(action);
            Ok(())
        });
        let bound = bind_action_creators(
            keys.iter().map(|key| {
                let key = *key;
                (key, ActionCreator::new(move || Action::new(key)))
            }),
            &dispatch,
        )
        .unwrap();

        for &i in &calls {
            bound.call(keys[i]).unwrap().unwrap();
        }

        let expected: Vec<Value> = calls.iter().map(|&i| json!({ "type": keys[i] })).collect();
        prop_assert_eq!(&*dispatched.borrow(), &expected);
    }
}
