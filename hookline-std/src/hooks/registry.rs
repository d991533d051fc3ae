//! Positional hook storage.

use super::pipeline::HookPipeline;
use hookline_core::{EventName, HookError, HookFn, NamespaceFilter, SharedHook};
use std::{
    any::Any,
    collections::{BTreeMap, HashMap},
    fmt,
    sync::Arc,
};

/// A stored hook callback, type-erased over its value type.
pub(crate) struct HookEntry {
    filter: NamespaceFilter,
    callback: Box<dyn Any + Send + Sync>,
    value_type: &'static str,
}

impl HookEntry {
    fn new<V: 'static>(filter: NamespaceFilter, hook: SharedHook<V>) -> Self {
        Self {
            filter,
            callback: Box::new(hook),
            value_type: std::any::type_name::<V>(),
        }
    }

    pub(crate) fn filter(&self) -> &NamespaceFilter {
        &self.filter
    }

    /// The callback, if it was registered for values of type `V`.
    pub(crate) fn callback<V: 'static>(&self) -> Option<&SharedHook<V>> {
        self.callback.downcast_ref::<SharedHook<V>>()
    }
}

/// Hook callbacks keyed by hook name and integer position.
///
/// Each hook name holds its callbacks in a position-ordered map; firing a
/// hook runs them in ascending position. Positions are unique per name:
/// registering at an occupied position replaces the previous callback.
///
/// When no position is given, a cursor shared by all hook names picks one:
/// if the slot right after the cursor is taken for this name the cursor
/// skips ahead by two, otherwise by one, and the new cursor value is used.
///
/// # Example
/// ```rust
/// use hookline_std::HookRegistry;
///
/// let mut hooks = HookRegistry::new();
/// hooks.add("price", |v: i32| Some(v * 2));
/// hooks.add("price", |v: i32| Some(v + 1));
///
/// assert_eq!(hooks.positions("price"), vec![1, 2]);
/// assert_eq!(hooks.fire("price", 10).unwrap(), 21);
/// ```
pub struct HookRegistry {
    hooks: HashMap<String, BTreeMap<i32, HookEntry>>,
    cursor: i32,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
            cursor: 0,
        }
    }

    /// Register `hook` under `name` at the next automatic position.
    ///
    /// Returns the position used.
    pub fn add<V: 'static>(&mut self, name: &str, hook: impl HookFn<V>) -> i32 {
        self.insert(EventName::parse(name), None, Arc::new(hook))
    }

    /// Register `hook` under `name` at `position`.
    pub fn add_at<V: 'static>(&mut self, name: &str, hook: impl HookFn<V>, position: i32) -> i32 {
        self.insert(EventName::parse(name), Some(position), Arc::new(hook))
    }

    /// Register an already shared hook, optionally at a fixed position.
    pub fn add_shared<V: 'static>(
        &mut self,
        name: &str,
        hook: SharedHook<V>,
        position: Option<i32>,
    ) -> i32 {
        self.insert(EventName::parse(name), position, hook)
    }

    fn insert<V: 'static>(
        &mut self,
        name: EventName,
        position: Option<i32>,
        hook: SharedHook<V>,
    ) -> i32 {
        let filter = name.filter();
        let (name, _) = name.into_parts();
        let slots = self.hooks.entry(name.clone()).or_default();

        let position = match position {
            Some(position) => position,
            None => {
                let step = if slots.contains_key(&(self.cursor + 1)) { 2 } else { 1 };
                self.cursor += step;
                self.cursor
            }
        };

        if slots.insert(position, HookEntry::new(filter, hook)).is_some() {
            tracing::debug!(hook = %name, position, "replaced hook at occupied position");
        } else {
            tracing::trace!(hook = %name, position, "registered hook");
        }
        position
    }

    /// Remove callbacks of the hook named by `name`.
    ///
    /// Without a namespace every callback of the hook goes; with one, only
    /// those stored under a namespace starting with it. Returns the number
    /// removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let parsed = EventName::parse(name);
        let selector = parsed.filter();

        let Some(slots) = self.hooks.get_mut(parsed.name()) else {
            return 0;
        };

        let before = slots.len();
        slots.retain(|_, entry| !selector.selects(entry.filter.as_str()));
        let removed = before - slots.len();

        if slots.is_empty() {
            self.hooks.remove(parsed.name());
        }
        tracing::debug!(hook = name, removed, "removed hooks");
        removed
    }

    /// The pipeline for `name` (`"hook"` or `"hook.namespace"`).
    pub fn pipeline(&self, name: &str) -> HookPipeline<'_> {
        let parsed = EventName::parse(name);
        let slots = self.hooks.get(parsed.name());
        HookPipeline::new(parsed, slots)
    }

    /// Fold `argument` through the pipeline for `name`.
    ///
    /// Returns `argument` unchanged when nothing is registered.
    pub fn fire<V: 'static>(&self, name: &str, argument: V) -> Result<V, HookError> {
        self.pipeline(name).run(argument)
    }

    /// Occupied positions of the unqualified hook `name`, ascending.
    pub fn positions(&self, name: &str) -> Vec<i32> {
        self.hooks
            .get(name)
            .map(|slots| slots.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Whether the unqualified hook `name` has any callback.
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Total number of callbacks across all hook names.
    pub fn len(&self) -> usize {
        self.hooks.values().map(BTreeMap::len).sum()
    }

    /// Whether no callback is registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hooks: BTreeMap<_, Vec<(i32, &'static str)>> = self
            .hooks
            .iter()
            .map(|(name, slots)| {
                let slots = slots
                    .iter()
                    .map(|(position, entry)| (*position, entry.value_type))
                    .collect();
                (name, slots)
            })
            .collect();
        f.debug_struct("HookRegistry")
            .field("hooks", &hooks)
            .field("cursor", &self.cursor)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same(v: i32) -> Option<i32> {
        Some(v)
    }

    #[test]
    fn test_auto_positions_are_sequential() {
        let mut hooks = HookRegistry::new();
        assert_eq!(hooks.add("price", same), 1);
        assert_eq!(hooks.add("price", same), 2);
        assert_eq!(hooks.add("price", same), 3);
    }

    #[test]
    fn test_cursor_skips_occupied_next_slot() {
        let mut hooks = HookRegistry::new();
        hooks.add_at("price", same, 1);
        // Slot 1 is taken, so the cursor jumps from 0 to 2.
        assert_eq!(hooks.add("price", same), 2);
        assert_eq!(hooks.positions("price"), vec![1, 2]);
    }

    #[test]
    fn test_cursor_is_shared_across_names() {
        let mut hooks = HookRegistry::new();
        assert_eq!(hooks.add("price", same), 1);
        assert_eq!(hooks.add("tax", same), 2);
        assert_eq!(hooks.add("price", same), 3);
        assert_eq!(hooks.positions("tax"), vec![2]);
    }

    #[test]
    fn test_explicit_position_replaces() {
        let mut hooks = HookRegistry::new();
        hooks.add_at("price", |v: i32| Some(v + 1), 5);
        hooks.add_at("price", |v: i32| Some(v + 100), 5);

        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks.fire("price", 0).unwrap(), 100);
    }

    #[test]
    fn test_remove_by_namespace_prefix() {
        let mut hooks = HookRegistry::new();
        hooks.add("price", same);
        hooks.add("price.ext.core", same);
        hooks.add("price.ext.ui", same);

        assert_eq!(hooks.remove("price.ext"), 2);
        assert_eq!(hooks.positions("price"), vec![1]);

        assert_eq!(hooks.remove("price"), 1);
        assert!(!hooks.contains("price"));
        assert!(hooks.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut hooks = HookRegistry::new();
        assert_eq!(hooks.remove("missing"), 0);
    }
}
