//! Counter and todo list sharing one store.
//!
//! Run with `RUST_LOG=debug` to see the logging middleware.

use oneway::{
    bind_action_creators, combine_reducers, Action, ActionCreator, SliceReducer, StoreBuilder,
};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

fn counter(slice: Option<&Value>, action: &Action) -> Value {
    let n = slice.and_then(Value::as_i64).unwrap_or(0);
    match action.type_str() {
        Some("counter/inc") => json!(n + 1),
        Some("counter/dec") => json!(n - 1),
        _ => json!(n),
    }
}

fn todos(slice: Option<&Value>, action: &Action) -> Value {
    let mut items = slice.and_then(Value::as_array).cloned().unwrap_or_default();
    if action.is("todos/add") {
        if let Some(text) = action.get("text") {
            items.push(text.clone());
        }
    }
    Value::Array(items)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let root = combine_reducers([
        ("counter", SliceReducer::new(counter)),
        ("todos", SliceReducer::new(todos)),
    ])?;

    let store = StoreBuilder::new()
        .reducer(root)
        .initial_state(json!({}))
        .middleware(oneway::LoggingMiddleware::named("demo"))
        .build()?;

    let reader = store.clone();
    let _render = store.subscribe(move || println!("state: {}", reader.get_state()));

    let actions = bind_action_creators(
        [
            ("inc", ActionCreator::new(|| Action::new("counter/inc"))),
            ("dec", ActionCreator::new(|| Action::new("counter/dec"))),
        ],
        &store.dispatcher(),
    )?;

    for key in ["inc", "inc", "dec"] {
        if let Some(result) = actions.call(key) {
            result?;
        }
    }
    store.dispatch(Action::new("todos/add").with("text", "write docs"))?;

    if let Err(err) = store.dispatch(json!("not an action")) {
        println!("rejected: {err}");
    }

    Ok(())
}
