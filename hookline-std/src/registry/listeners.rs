//! Per-name listener buckets.

use hookline_core::{EventName, Listener, NamespaceFilter, SharedListener, WILDCARD};
use std::{collections::HashMap, fmt, sync::Arc};

/// One listener together with the namespace it was registered under.
pub struct Registration<T> {
    filter: NamespaceFilter,
    listener: SharedListener<T>,
}

impl<T> Registration<T> {
    /// Create a registration.
    pub fn new(filter: NamespaceFilter, listener: SharedListener<T>) -> Self {
        Self { filter, listener }
    }

    /// The namespace filter stored with the listener.
    pub fn filter(&self) -> &NamespaceFilter {
        &self.filter
    }

    /// The listener.
    pub fn listener(&self) -> &dyn Listener<T> {
        &*self.listener
    }
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            filter: self.filter.clone(),
            listener: Arc::clone(&self.listener),
        }
    }
}

impl<T> fmt::Debug for Registration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

/// Ordered listener buckets keyed by event name, plus the wildcard bucket.
///
/// Used both for one type's class-wide listeners and for a single
/// instance's listeners. Registrations are never deduplicated: adding the
/// same listener twice makes it fire twice.
pub struct ListenerRegistry<T> {
    buckets: HashMap<String, Vec<Registration<T>>>,
}

impl<T> ListenerRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Append `listener` to the bucket named by `name`
    /// (`"event"`, `"event.namespace"`, or `"*"` / `"*.namespace"`).
    pub fn add<L: Listener<T>>(&mut self, name: &str, listener: L) {
        self.add_shared(EventName::parse(name), Arc::new(listener));
    }

    /// Append an already shared listener under a parsed name.
    pub fn add_shared(&mut self, name: EventName, listener: SharedListener<T>) {
        let filter = name.filter();
        let (name, _) = name.into_parts();
        self.buckets
            .entry(name)
            .or_default()
            .push(Registration::new(filter, listener));
    }

    /// Remove registrations for the event named by `name`.
    ///
    /// Without a namespace every registration for the event goes; with one,
    /// only those stored under a namespace starting with it. Returns the
    /// number removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let parsed = EventName::parse(name);
        let selector = parsed.filter();

        let Some(bucket) = self.buckets.get_mut(parsed.name()) else {
            return 0;
        };

        let before = bucket.len();
        bucket.retain(|reg| !selector.selects(reg.filter.as_str()));
        let removed = before - bucket.len();

        if bucket.is_empty() {
            self.buckets.remove(parsed.name());
        }
        removed
    }

    /// Registrations for the unqualified event `name`, in insertion order.
    pub fn bucket(&self, name: &str) -> &[Registration<T>] {
        self.buckets.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Registrations in the wildcard bucket.
    pub fn wildcard(&self) -> &[Registration<T>] {
        self.bucket(WILDCARD)
    }

    /// Whether the unqualified event `name` has any registration.
    pub fn contains(&self, name: &str) -> bool {
        !self.bucket(name).is_empty()
    }

    /// Number of registrations for the unqualified event `name`.
    pub fn count(&self, name: &str) -> usize {
        self.bucket(name).len()
    }

    /// Total number of registrations across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether no listener is registered at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buckets.iter().map(|(name, regs)| (name, regs.len())))
            .finish()
    }
}
