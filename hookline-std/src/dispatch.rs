//! Event dispatch.
//!
//! The dispatcher merges a target's type-scoped and instance-scoped
//! listeners and delivers one [`Event`] to them in two passes:
//!
//! 1. **Name pass**: listeners registered for the event's name, type-scoped
//!    first, then instance-scoped.
//! 2. **Wildcard pass**: listeners in the `*` bucket, same order.
//!
//! In both passes a listener is invoked only if its namespace filter
//! matches the event (see [`NamespaceFilter::matches`]). A [`Flow::Stop`]
//! ends the current pass; the wildcard pass runs regardless of how the
//! name pass ended.
//!
//! Listeners are copied out of the registries before the first one runs,
//! so a listener may register or remove listeners, or fire further events,
//! without holding any registry borrow or lock.
//!
//! [`NamespaceFilter::matches`]: hookline_core::NamespaceFilter::matches

use crate::{
    config::EventsConfig,
    registry::{ListenerRegistry, Registration, TypeRegistry},
};
use hookline_core::{DispatchError, Event, Flow, ObjectRef};
use std::{any::Any, cell::Cell, sync::RwLock};

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Tracks dispatch nesting on the current thread.
struct DepthGuard;

impl DepthGuard {
    fn enter(event: &Event, max_depth: usize) -> Result<Self, DispatchError> {
        DEPTH.with(|depth| {
            let current = depth.get();
            if current >= max_depth {
                tracing::warn!(
                    event = event.name(),
                    depth = current,
                    max_depth,
                    "nested dispatch depth exceeded"
                );
                return Err(DispatchError::DepthExceeded {
                    event: event.event_name().to_string(),
                    max_depth,
                });
            }
            depth.set(current + 1);
            Ok(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Listeners selected for one firing, already in delivery order.
pub struct Merged<T> {
    named: Vec<Registration<T>>,
    wildcard: Vec<Registration<T>>,
}

impl<T> Merged<T> {
    /// Listeners for the event's name.
    pub fn named(&self) -> &[Registration<T>] {
        &self.named
    }

    /// Listeners from the wildcard bucket.
    pub fn wildcard(&self) -> &[Registration<T>] {
        &self.wildcard
    }

    /// Whether there is nothing to deliver to.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.wildcard.is_empty()
    }
}

/// Delivers events to type-scoped and instance-scoped listeners.
pub struct EventDispatcher<'a> {
    types: &'a RwLock<TypeRegistry>,
    config: &'a EventsConfig,
}

impl<'a> EventDispatcher<'a> {
    /// Create a dispatcher reading type-scoped listeners from `types`.
    pub fn new(types: &'a RwLock<TypeRegistry>, config: &'a EventsConfig) -> Self {
        Self { types, config }
    }

    /// Merge `T`'s type-scoped listeners with `instance` for event `name`.
    pub fn merge<T: Any>(&self, instance: &ListenerRegistry<T>, name: &str) -> Merged<T> {
        let (mut named, mut wildcard) = TypeRegistry::read(self.types).snapshot::<T>(name);
        named.extend_from_slice(instance.bucket(name));
        wildcard.extend_from_slice(instance.wildcard());
        Merged { named, wildcard }
    }

    /// Fire `event` on `target`, whose instance listeners are reached
    /// through `instance`.
    ///
    /// With no listener for the name and an empty wildcard bucket this
    /// returns immediately and leaves `event` untouched.
    pub fn fire<T, F>(&self, target: &mut T, event: &mut Event, instance: F) -> Result<(), DispatchError>
    where
        T: Any,
        F: FnOnce(&T) -> &ListenerRegistry<T>,
    {
        let merged = self.merge(instance(&*target), event.name());
        self.deliver(target, merged, event)
    }

    /// Deliver `event` to an already merged set of listeners.
    pub fn deliver<T: Any>(
        &self,
        target: &mut T,
        merged: Merged<T>,
        event: &mut Event,
    ) -> Result<(), DispatchError> {
        if merged.is_empty() {
            tracing::trace!(event = event.name(), "no listeners, skipping dispatch");
            return Ok(());
        }

        let _depth = DepthGuard::enter(event, self.config.max_depth())?;
        event.set_target(ObjectRef::of(&*target))?;
        if let Some(namespace) = self.config.default_namespace() {
            event.apply_default_namespace(namespace);
        }

        tracing::trace!(
            event = event.name(),
            namespace = event.namespace(),
            named = merged.named.len(),
            wildcard = merged.wildcard.len(),
            "dispatching event"
        );

        let event = &*event;
        run_pass(target, &merged.named, event, "named")?;
        run_pass(target, &merged.wildcard, event, "wildcard")?;
        Ok(())
    }
}

fn run_pass<T: Any>(
    target: &mut T,
    registrations: &[Registration<T>],
    event: &Event,
    pass: &'static str,
) -> Result<(), DispatchError> {
    for registration in registrations {
        if !registration.filter().matches(event.namespace()) {
            continue;
        }

        let flow = registration
            .listener()
            .on_event(target, event)
            .map_err(|source| DispatchError::Listener {
                event: event.event_name().to_string(),
                source,
            })?;

        if flow == Flow::Stop {
            tracing::debug!(event = event.name(), pass, "listener stopped propagation");
            break;
        }
    }
    Ok(())
}
