//! Listener results and their conversions.

use crate::error::BoxError;

/// What a listener wants to happen after it ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Flow {
    /// Keep delivering to the remaining listeners of the current pass.
    #[default]
    Continue,
    /// Skip the remaining listeners of the current pass.
    Stop,
}

impl Flow {
    /// Whether this is [`Flow::Stop`].
    pub fn is_stop(self) -> bool {
        matches!(self, Flow::Stop)
    }
}

/// Trait for converting a listener's return value into a [`Flow`].
///
/// # Default Implementations
///
/// - `()` → Continue
/// - `bool` → `true` = Continue, `false` = Stop
/// - `Flow` → As is
/// - `Result<T, E>` → Delegates to inner `T` or propagates error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a listener",
    label = "missing `IntoFlow` implementation",
    note = "Listeners return `()`, `bool`, `Flow` or a `Result` wrapping one of them."
)]
pub trait IntoFlow {
    /// Convert into a flow decision, or the listener's error.
    fn into_flow(self) -> Result<Flow, BoxError>;
}

impl IntoFlow for () {
    fn into_flow(self) -> Result<Flow, BoxError> {
        Ok(Flow::Continue)
    }
}

impl IntoFlow for bool {
    fn into_flow(self) -> Result<Flow, BoxError> {
        Ok(if self { Flow::Continue } else { Flow::Stop })
    }
}

impl IntoFlow for Flow {
    fn into_flow(self) -> Result<Flow, BoxError> {
        Ok(self)
    }
}

impl<T, E> IntoFlow for Result<T, E>
where
    T: IntoFlow,
    E: Into<BoxError>,
{
    fn into_flow(self) -> Result<Flow, BoxError> {
        match self {
            Ok(t) => t.into_flow(),
            Err(e) => Err(e.into()),
        }
    }
}
