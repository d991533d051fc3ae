//! # Event listeners
//!
//! A [`Listener`] is registered under an event name on either a type or an
//! instance. When the event fires it receives the firing object mutably,
//! together with the record, and decides whether delivery continues.
//!
//! Plain closures are listeners as long as their argument types are spelled
//! out:
//!
//! ```rust
//! use hookline_core::{Event, Flow, Listener};
//!
//! struct Counter { hits: u32 }
//!
//! let listener = |counter: &mut Counter, _event: &Event| {
//!     counter.hits += 1;
//!     Flow::Continue
//! };
//!
//! let mut counter = Counter { hits: 0 };
//! listener.on_event(&mut counter, &Event::new("tick")).unwrap();
//! assert_eq!(counter.hits, 1);
//! ```

use crate::{
    error::BoxError,
    event::Event,
    flow::{Flow, IntoFlow},
};
use std::sync::Arc;

/// A callback invoked with the firing object and the event record.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Listener` for `{T}`",
    label = "missing `Listener` implementation",
    note = "Closures must be `Fn(&mut {T}, &Event) -> R` with `R: IntoFlow`; annotate the argument types."
)]
pub trait Listener<T>: Send + Sync + 'static {
    /// Called when a matching event is delivered.
    fn on_event(&self, target: &mut T, event: &Event) -> Result<Flow, BoxError>;
}

impl<T, F, R> Listener<T> for F
where
    F: Fn(&mut T, &Event) -> R + Send + Sync + 'static,
    R: IntoFlow,
{
    fn on_event(&self, target: &mut T, event: &Event) -> Result<Flow, BoxError> {
        (self)(target, event).into_flow()
    }
}

/// A listener as stored in registries.
pub type SharedListener<T> = Arc<dyn Listener<T>>;
