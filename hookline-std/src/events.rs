//! Per-instance event state.

use crate::{
    config::EventsConfig,
    dispatch::EventDispatcher,
    registry::{ListenerRegistry, TypeRegistry},
};
use hookline_core::{AutoBind, DispatchError, Event, EventName, Listener, handler_name};
use std::{
    any::Any,
    fmt,
    sync::{Arc, RwLock},
};

/// The event state an object embeds: its own listeners, its settings, and
/// the type registry its class-wide listeners live in.
///
/// ```rust
/// use hookline_core::Event;
/// use hookline_std::Events;
///
/// struct Door { opened: u32, events: Events<Door> }
///
/// let mut door = Door { opened: 0, events: Events::new() };
/// door.events.add("open", |door: &mut Door, _: &Event| door.opened += 1);
///
/// Events::fire(&mut door, &mut Event::new("open"), |d| &d.events).unwrap();
/// assert_eq!(door.opened, 1);
/// ```
pub struct Events<T> {
    listeners: ListenerRegistry<T>,
    config: Arc<EventsConfig>,
    types: &'static RwLock<TypeRegistry>,
}

impl<T: Any> Events<T> {
    /// Empty state with default settings, using the global type registry.
    pub fn new() -> Self {
        Self::with_config(EventsConfig::default())
    }

    /// Empty state with `config`, using the global type registry.
    pub fn with_config(config: EventsConfig) -> Self {
        Self {
            listeners: ListenerRegistry::new(),
            config: Arc::new(config),
            types: TypeRegistry::global(),
        }
    }

    /// Read class-wide listeners from `types` instead of the global registry.
    pub fn with_types(mut self, types: &'static RwLock<TypeRegistry>) -> Self {
        self.types = types;
        self
    }

    /// The instance listeners.
    pub fn listeners(&self) -> &ListenerRegistry<T> {
        &self.listeners
    }

    /// The settings.
    pub fn config(&self) -> &EventsConfig {
        &self.config
    }

    /// The type registry class-wide listeners are read from.
    pub fn types(&self) -> &'static RwLock<TypeRegistry> {
        self.types
    }

    /// Add an instance listener under `name`.
    pub fn add<L: Listener<T>>(&mut self, name: &str, listener: L) {
        tracing::trace!(event = name, "registering instance listener");
        self.listeners.add(name, listener);
    }

    /// Add the type's conventional handler for `name`.
    ///
    /// If `T` has no handler for the event, nothing is registered and a
    /// diagnostic is logged. Returns whether a listener was added.
    pub fn bind(&mut self, name: &str) -> bool
    where
        T: AutoBind,
    {
        let parsed = EventName::parse(name);
        match T::bound_listener(parsed.name()) {
            Some(listener) => {
                tracing::trace!(event = name, "binding conventional handler");
                self.listeners.add_shared(parsed, listener);
                true
            }
            None => {
                let handler = handler_name(parsed.name());
                if self.config.warn_unbound() {
                    tracing::warn!(
                        event = %parsed,
                        handler = %handler,
                        target_type = std::any::type_name::<T>(),
                        "no callback given or found; the event will be ignored"
                    );
                } else {
                    tracing::debug!(
                        event = %parsed,
                        handler = %handler,
                        target_type = std::any::type_name::<T>(),
                        "no callback given or found; the event will be ignored"
                    );
                }
                false
            }
        }
    }

    /// Remove instance listeners selected by `name`.
    pub fn remove(&mut self, name: &str) -> usize {
        let removed = self.listeners.remove(name);
        tracing::trace!(event = name, removed, "removed instance listeners");
        removed
    }

    /// Drop every instance listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Whether the unqualified event `name` has an instance listener.
    pub fn has_listeners(&self, name: &str) -> bool {
        self.listeners.contains(name)
    }

    /// Number of instance listeners for the unqualified event `name`.
    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.count(name)
    }

    /// Fire `event` on `target`, whose [`Events`] is reached through
    /// `events`.
    pub fn fire<F>(target: &mut T, event: &mut Event, events: F) -> Result<(), DispatchError>
    where
        F: Fn(&T) -> &Events<T>,
    {
        let (types, config) = {
            let state = events(&*target);
            (state.types, Arc::clone(&state.config))
        };
        EventDispatcher::new(types, &config).fire(target, event, |target| events(target).listeners())
    }
}

impl<T: Any> Default for Events<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Events<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Events")
            .field("listeners", &self.listeners)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookline_core::{Flow, SharedListener};

    struct Lamp {
        lit: bool,
        events: Events<Lamp>,
    }

    impl Lamp {
        fn new() -> Self {
            Self {
                lit: false,
                events: Events::new(),
            }
        }

        fn on_switched(&mut self, _event: &Event) -> Flow {
            self.lit = !self.lit;
            Flow::Continue
        }
    }

    impl AutoBind for Lamp {
        fn bound_listener(event_name: &str) -> Option<SharedListener<Self>> {
            match handler_name(event_name).as_str() {
                "on_switched" => {
                    let listener: SharedListener<Self> =
                        Arc::new(|lamp: &mut Lamp, event: &Event| lamp.on_switched(event));
                    Some(listener)
                }
                _ => None,
            }
        }
    }

    #[test]
    fn test_bind_resolves_conventional_handler() {
        let mut lamp = Lamp::new();
        assert!(lamp.events.bind("Switched.ui"));

        Events::fire(&mut lamp, &mut Event::new("Switched"), |l| &l.events).unwrap();
        assert!(lamp.lit);
    }

    #[test]
    fn test_bind_without_handler_is_noop() {
        let mut lamp = Lamp::new();
        assert!(!lamp.events.bind("Dimmed"));
        assert!(!lamp.events.has_listeners("Dimmed"));
        assert!(lamp.events.listeners().is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut lamp = Lamp::new();
        lamp.events.add("Switched.a", |_: &mut Lamp, _: &Event| ());
        lamp.events.add("Switched.b", |_: &mut Lamp, _: &Event| ());
        lamp.events.add("Dimmed", |_: &mut Lamp, _: &Event| ());

        assert_eq!(lamp.events.remove("Switched.a"), 1);
        assert_eq!(lamp.events.listener_count("Switched"), 1);

        lamp.events.clear();
        assert!(!lamp.events.has_listeners("Dimmed"));
    }
}
