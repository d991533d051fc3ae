//! # hookline-std
//!
//! Standard implementations for the hookline event and hook framework.
//!
//! This crate provides:
//! - **Listener registries**: [`ListenerRegistry`] (per owner) and
//!   [`TypeRegistry`] (per concrete type, with a process-wide default)
//! - **Dispatch**: [`EventDispatcher`], merging both scopes and delivering
//!   in name and wildcard passes
//! - **Per-instance state**: [`Events`] and [`EventsConfig`]
//! - **Hooks**: [`HookRegistry`] and [`HookPipeline`]
//! - **Testing**: recording and counting listeners in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use hookline_core;

// Modules
pub mod config;
pub mod dispatch;
pub mod events;
pub mod hooks;
pub mod registry;
pub mod testing;

pub use config::{DEFAULT_MAX_DEPTH, EventsConfig};
pub use dispatch::{EventDispatcher, Merged};
pub use events::Events;
pub use hooks::{HookPipeline, HookRegistry};
pub use registry::{ListenerRegistry, Registration, TypeRegistry, add_static, remove_static};
