//! # hookline - Namespaced Events and Ordered Hooks
//!
//! `hookline` gives plain Rust types two in-process extension points:
//!
//! - **Events**: named, optionally namespaced notifications. Listeners are
//!   registered per instance or for every instance of a concrete type, and
//!   a `*` bucket receives every event. Delivery is synchronous.
//! - **Hooks**: named pipelines of value transformers at integer positions.
//!   Firing a hook folds a value through them in ascending position.
//!
//! ## Quick Start
//!
//! ```rust
//! use hookline::{Event, Events, EventsAware, HookRegistry, HooksAware};
//!
//! struct Cart {
//!     items: u32,
//!     events: Events<Cart>,
//!     hooks: HookRegistry,
//! }
//!
//! impl EventsAware for Cart {
//!     fn events(&self) -> &Events<Self> { &self.events }
//!     fn events_mut(&mut self) -> &mut Events<Self> { &mut self.events }
//! }
//!
//! impl HooksAware for Cart {
//!     fn hooks(&self) -> &HookRegistry { &self.hooks }
//!     fn hooks_mut(&mut self) -> &mut HookRegistry { &mut self.hooks }
//! }
//!
//! let mut cart = Cart { items: 0, events: Events::new(), hooks: HookRegistry::new() };
//!
//! cart.add_event("added.ui", |cart: &mut Cart, _: &Event| cart.items += 1);
//! cart.fire_event(&mut Event::new("added.ui")).unwrap();
//! assert_eq!(cart.items, 1);
//!
//! cart.add_hook("total", |v: u32| Some(v * 2))
//!     .add_hook("total", |v: u32| Some(v + 1));
//! assert_eq!(cart.fire_hook("total", 10_u32).unwrap(), 21);
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod aware;

pub use aware::{EventsAware, HooksAware};

pub use hookline_core::{
    // Binding
    AutoBind,
    // Error types
    BoxError,
    DispatchError,
    // Records
    Event,
    // Names
    EventName,
    // Listener results
    Flow,
    // Hooks
    HookError,
    HookFn,
    HooklineError,
    IntoFlow,
    IntoHookOutput,
    // Listeners
    Listener,
    NamespaceFilter,
    ObjectRef,
    SharedHook,
    SharedListener,
    WILDCARD,
    handler_name,
};

pub use hookline_std::{
    DEFAULT_MAX_DEPTH, EventDispatcher, Events, EventsConfig, HookPipeline, HookRegistry,
    ListenerRegistry, TypeRegistry,
};

/// Testing utilities.
pub mod testing {
    pub use hookline_std::testing::{
        CountingListener, OrderHook, OrderListener, OrderRecorder, RecordedEvent,
        RecordingListener,
    };
}

/// Prelude module - common imports for hookline.
///
/// # Usage
///
/// ```rust
/// use hookline::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AutoBind, DispatchError, Event, Events, EventsAware, Flow, HookError, HookRegistry,
        HooksAware, Listener,
    };
}

#[cfg(feature = "macros")]
pub use hookline_macros::{EventsAware, HooksAware, auto_bind};
