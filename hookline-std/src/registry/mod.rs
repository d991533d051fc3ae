//! Listener registries.
//!
//! - [`ListenerRegistry`]: buckets of listeners for one owner, used for a
//!   single instance's listeners and as the per-type storage.
//! - [`TypeRegistry`]: per-type registries keyed by concrete type identity.

pub mod listeners;
pub mod types;

pub use listeners::{ListenerRegistry, Registration};
pub use types::{TypeRegistry, add_static, remove_static};
