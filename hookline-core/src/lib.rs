//! # hookline-core
//!
//! Core types and traits for the hookline event and hook framework.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! libraries that only need to *describe* events, listeners and hooks,
//! without pulling in the registries and dispatcher from `hookline-std`.
//!
//! # Building Blocks
//!
//! ## Names ([`EventName`], [`NamespaceFilter`])
//!
//! Every event and hook is addressed by a `"name"` or `"name.namespace"`
//! string. The name selects the bucket, the namespace scopes matching:
//! a registration stored under `"change.myext"` is reached by firings
//! whose namespace starts with `myext`.
//!
//! ## Records ([`Event`], [`ObjectRef`])
//!
//! An [`Event`] describes one firing. The dispatcher stamps the firing
//! object onto it exactly once; an optional related object and a typed
//! payload are supplied by whoever builds the record.
//!
//! ## Callbacks ([`Listener`], [`HookFn`])
//!
//! - [`Listener`] receives the firing object and the record and returns a
//!   [`Flow`]: `Continue` or `Stop`.
//! - [`HookFn`] takes a value and returns the next value, or nothing. A
//!   missing value aborts the pipeline.
//!
//! ## Conventional handlers ([`AutoBind`])
//!
//! Types that want `bind_event("MoneyAdded")` to find their
//! `on_money_added` method implement [`AutoBind`], either by hand or
//! through the `#[auto_bind]` attribute in `hookline-macros`.
//!
//! # Error Types
//!
//! - [`HooklineError`] - Top-level error type
//! - [`DispatchError`] - Event dispatch errors
//! - [`HookError`] - Hook pipeline errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod bind;
mod error;
mod event;
mod flow;
mod hook;
mod listener;
mod name;

// Re-exports
pub use bind::{AutoBind, handler_name};
pub use error::{BoxError, DispatchError, HookError, HooklineError};
pub use event::{Event, ObjectRef};
pub use flow::{Flow, IntoFlow};
pub use hook::{HookFn, IntoHookOutput, SharedHook};
pub use listener::{Listener, SharedListener};
pub use name::{EventName, NamespaceFilter, WILDCARD};
