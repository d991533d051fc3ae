//! Composition traits for objects that own events and hooks.
//!
//! An object embeds an [`Events<Self>`] and/or a [`HookRegistry`] and
//! exposes them through [`EventsAware`] / [`HooksAware`]; every other
//! method is provided.
//!
//! ```rust
//! use hookline::{Event, Events, EventsAware};
//!
//! struct Account {
//!     balance: i64,
//!     events: Events<Account>,
//! }
//!
//! impl EventsAware for Account {
//!     fn events(&self) -> &Events<Self> {
//!         &self.events
//!     }
//!     fn events_mut(&mut self) -> &mut Events<Self> {
//!         &mut self.events
//!     }
//! }
//!
//! let mut account = Account { balance: 0, events: Events::new() };
//! account.add_event("deposit", |a: &mut Account, _: &Event| a.balance += 10);
//! account.fire_event(&mut Event::new("deposit")).unwrap();
//! assert_eq!(account.balance, 10);
//! ```

use hookline_core::{AutoBind, DispatchError, Event, HookError, HookFn, Listener};
use hookline_std::{Events, HookRegistry, registry};

/// An object with named, namespaced events.
pub trait EventsAware: Sized + 'static {
    /// The object's event state.
    fn events(&self) -> &Events<Self>;

    /// The object's event state, mutably.
    fn events_mut(&mut self) -> &mut Events<Self>;

    /// Add an instance listener for `name` (`"event"` or `"event.namespace"`).
    fn add_event<L: Listener<Self>>(&mut self, name: &str, listener: L) -> &mut Self {
        self.events_mut().add(name, listener);
        self
    }

    /// Add the conventional `on_*` handler for `name` as instance listener.
    ///
    /// Without such a handler nothing is registered and a warning is
    /// logged; the object is returned unchanged either way.
    fn bind_event(&mut self, name: &str) -> &mut Self
    where
        Self: AutoBind,
    {
        self.events_mut().bind(name);
        self
    }

    /// Remove instance listeners selected by `name`.
    fn remove_event(&mut self, name: &str) -> &mut Self {
        self.events_mut().remove(name);
        self
    }

    /// Fire `event` on this object.
    ///
    /// Listener failures propagate; the returned reference allows chaining.
    fn fire_event(&mut self, event: &mut Event) -> Result<&mut Self, DispatchError> {
        Events::fire(&mut *self, event, |this| this.events())?;
        Ok(self)
    }

    /// Add a listener for every instance of `Self` to the global type
    /// registry.
    fn add_static_event<L: Listener<Self>>(name: &str, listener: L) {
        registry::add_static::<Self, L>(name, listener);
    }

    /// Remove `Self`'s listeners selected by `name` from the global type
    /// registry.
    fn remove_static_event(name: &str) -> usize {
        registry::remove_static::<Self>(name)
    }
}

/// An object with ordered hook pipelines.
pub trait HooksAware {
    /// The object's hooks.
    fn hooks(&self) -> &HookRegistry;

    /// The object's hooks, mutably.
    fn hooks_mut(&mut self) -> &mut HookRegistry;

    /// Add `hook` to `name` at the next automatic position.
    fn add_hook<V: 'static>(&mut self, name: &str, hook: impl HookFn<V>) -> &mut Self
    where
        Self: Sized,
    {
        self.hooks_mut().add(name, hook);
        self
    }

    /// Add `hook` to `name` at `position`, replacing any callback there.
    fn add_hook_at<V: 'static>(&mut self, name: &str, hook: impl HookFn<V>, position: i32) -> &mut Self
    where
        Self: Sized,
    {
        self.hooks_mut().add_at(name, hook, position);
        self
    }

    /// Remove callbacks of the hook selected by `name`.
    fn remove_hook(&mut self, name: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.hooks_mut().remove(name);
        self
    }

    /// Fold `argument` through the hook `name`.
    fn fire_hook<V: 'static>(&self, name: &str, argument: V) -> Result<V, HookError> {
        self.hooks().fire(name, argument)
    }
}
