//! Error types for hookline.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HooklineError`] - Top-level error type for all hookline operations
//! - [`DispatchError`] - Errors during event dispatch
//! - [`HookError`] - Errors from hook pipelines

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all hookline operations.
#[derive(Error, Debug)]
pub enum HooklineError {
    /// An error occurred during event dispatch.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// An error occurred in a hook pipeline.
    #[error("hook error: {0}")]
    Hook(#[from] HookError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur during event dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener failed. The failure is never swallowed by the dispatcher.
    #[error("listener for event `{event}` failed")]
    Listener {
        /// Name of the event being delivered.
        event: String,
        /// The listener's own error.
        #[source]
        source: BoxError,
    },

    /// The record already carries a target from an earlier firing.
    #[error("event `{event}` has already been dispatched")]
    AlreadyDispatched {
        /// Name of the event.
        event: String,
    },

    /// Listeners kept firing nested events past the configured limit.
    #[error("nested dispatch of `{event}` exceeded the maximum depth of {max_depth}")]
    DepthExceeded {
        /// Name of the event that would have gone one level too deep.
        event: String,
        /// The configured limit.
        max_depth: usize,
    },
}

/// Errors that can occur in hook pipelines.
#[derive(Error, Debug)]
pub enum HookError {
    /// A callback returned nothing; the rest of the pipeline was skipped.
    #[error("hook `{hook}` at position {position} produced no response")]
    MissingResponse {
        /// Hook name.
        hook: String,
        /// Position of the silent callback.
        position: i32,
    },

    /// A callback was registered for a different value type.
    #[error("hook `{hook}` at position {position} does not accept values of type `{expected}`")]
    TypeMismatch {
        /// Hook name.
        hook: String,
        /// Position of the mismatched callback.
        position: i32,
        /// Type name of the value being piped.
        expected: &'static str,
    },

    /// A callback failed with its own error.
    #[error("hook `{hook}` at position {position} failed")]
    Callback {
        /// Hook name.
        hook: String,
        /// Position of the failing callback.
        position: i32,
        /// The callback's error.
        #[source]
        source: BoxError,
    },
}

impl HookError {
    /// Name of the hook the error came from.
    pub fn hook(&self) -> &str {
        match self {
            HookError::MissingResponse { hook, .. }
            | HookError::TypeMismatch { hook, .. }
            | HookError::Callback { hook, .. } => hook,
        }
    }

    /// Whether this is a missing-response failure.
    pub fn is_missing_response(&self) -> bool {
        matches!(self, HookError::MissingResponse { .. })
    }
}

// Convenience conversions
impl From<BoxError> for HooklineError {
    fn from(err: BoxError) -> Self {
        HooklineError::Custom(err)
    }
}
