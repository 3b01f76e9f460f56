//! Error types for store construction and dispatch.

use thiserror::Error;

/// Errors raised while assembling a store or a combined reducer.
///
/// Reducers and enhancers are typed closures, so "not callable" cannot
/// happen. What remains checkable at construction time is a missing or
/// ambiguous registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Reducer not specified. Call .reducer(f) before .build()")]
    MissingReducer,

    #[error("Initial state not specified. Call .initial_state(state) before .build()")]
    MissingInitialState,

    #[error("Reducer registered twice for key '{key}'")]
    DuplicateReducerKey { key: String },

    #[error("Reducer key must not be empty")]
    EmptyReducerKey,

    #[error("Action creator registered twice for key '{key}'")]
    DuplicateCreatorKey { key: String },
}

/// Errors raised when a dispatched value is not a well-formed action.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a plain record (null, primitive or array).
    #[error("Action must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Action must have a 'type' field")]
    MissingType,
}

/// Any error surfaced by the store API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// True when the error came from action validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
