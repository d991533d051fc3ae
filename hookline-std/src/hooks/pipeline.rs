//! Hook pipeline execution.

use super::registry::HookEntry;
use hookline_core::{EventName, HookError};
use std::collections::BTreeMap;

/// The callbacks of one hook name, ready to fold a value through.
///
/// Obtained from [`HookRegistry::pipeline`](super::HookRegistry::pipeline).
pub struct HookPipeline<'a> {
    name: EventName,
    slots: Option<&'a BTreeMap<i32, HookEntry>>,
}

impl<'a> HookPipeline<'a> {
    pub(crate) fn new(name: EventName, slots: Option<&'a BTreeMap<i32, HookEntry>>) -> Self {
        Self { name, slots }
    }

    /// Number of callbacks whose namespace matches this pipeline.
    pub fn len(&self) -> usize {
        self.slots.map_or(0, |slots| {
            slots
                .values()
                .filter(|entry| entry.filter().matches(self.name.namespace()))
                .count()
        })
    }

    /// Whether running the pipeline would leave the value untouched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fold `value` through every matching callback in ascending position.
    ///
    /// The first callback that returns nothing aborts the fold with
    /// [`HookError::MissingResponse`]; later callbacks do not run.
    pub fn run<V: 'static>(&self, mut value: V) -> Result<V, HookError> {
        let Some(slots) = self.slots else {
            return Ok(value);
        };

        for (&position, entry) in slots {
            if !entry.filter().matches(self.name.namespace()) {
                continue;
            }

            let Some(callback) = entry.callback::<V>() else {
                return Err(HookError::TypeMismatch {
                    hook: self.name.to_string(),
                    position,
                    expected: std::any::type_name::<V>(),
                });
            };

            value = match callback.apply(value) {
                Ok(Some(next)) => next,
                Ok(None) => {
                    tracing::debug!(hook = %self.name, position, "hook produced no response");
                    return Err(HookError::MissingResponse {
                        hook: self.name.to_string(),
                        position,
                    });
                }
                Err(source) => {
                    return Err(HookError::Callback {
                        hook: self.name.to_string(),
                        position,
                        source,
                    });
                }
            };
        }

        Ok(value)
    }
}
