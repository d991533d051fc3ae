//! Ordered hook pipelines.
//!
//! A hook is a named sequence of value transformers stored at integer
//! positions. Firing it folds a value through the callbacks in ascending
//! position; each callback must hand back a value for the fold to go on.

pub mod pipeline;
pub mod registry;

pub use pipeline::HookPipeline;
pub use registry::HookRegistry;
