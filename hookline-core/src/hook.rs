//! Hook callbacks.
//!
//! A hook callback takes the current value of a pipeline and produces the
//! next one. Producing nothing is a failure of the whole pipeline, so the
//! signature makes the absent case explicit.

use crate::error::BoxError;
use std::sync::Arc;

/// One step of a hook pipeline over values of type `V`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a hook over `{V}`",
    label = "missing `HookFn` implementation",
    note = "Closures must be `Fn({V}) -> R` where `R` is `Option<{V}>` or `Result<Option<{V}>, E>`."
)]
pub trait HookFn<V>: Send + Sync + 'static {
    /// Transform `value`. `Ok(None)` means the callback had no response.
    fn apply(&self, value: V) -> Result<Option<V>, BoxError>;
}

impl<V, F, R> HookFn<V> for F
where
    F: Fn(V) -> R + Send + Sync + 'static,
    R: IntoHookOutput<V>,
{
    fn apply(&self, value: V) -> Result<Option<V>, BoxError> {
        (self)(value).into_hook_output()
    }
}

/// Conversion of a hook callback's return value.
pub trait IntoHookOutput<V> {
    /// Convert into the next value, no value, or the callback's error.
    fn into_hook_output(self) -> Result<Option<V>, BoxError>;
}

impl<V> IntoHookOutput<V> for Option<V> {
    fn into_hook_output(self) -> Result<Option<V>, BoxError> {
        Ok(self)
    }
}

impl<V, E> IntoHookOutput<V> for Result<Option<V>, E>
where
    E: Into<BoxError>,
{
    fn into_hook_output(self) -> Result<Option<V>, BoxError> {
        self.map_err(Into::into)
    }
}

/// A hook callback as stored in registries.
pub type SharedHook<V> = Arc<dyn HookFn<V>>;

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<V>(hook: impl HookFn<V>, value: V) -> Result<Option<V>, BoxError> {
        hook.apply(value)
    }

    #[test]
    fn test_option_closure() {
        assert_eq!(apply(|v: i32| Some(v * 2), 10).unwrap(), Some(20));
        assert_eq!(apply(|_: i32| None, 10).unwrap(), None);
    }

    #[test]
    fn test_result_closure() {
        let failing = |_: String| -> Result<Option<String>, std::io::Error> {
            Err(std::io::Error::other("denied"))
        };
        assert_eq!(apply(failing, "x".to_string()).unwrap_err().to_string(), "denied");
    }
}
