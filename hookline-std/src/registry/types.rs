//! Type-scoped (class-wide) listener registry.
//!
//! Listeners registered here fire for every instance of one concrete type.
//! Types are keyed by [`TypeId`], so a wrapper or "subtype" never shares a
//! bucket with the type it wraps: each concrete type is segregated.

use super::listeners::{ListenerRegistry, Registration};
use hookline_core::{EventName, Listener, SharedListener, WILDCARD};
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

static GLOBAL: LazyLock<RwLock<TypeRegistry>> = LazyLock::new(|| RwLock::new(TypeRegistry::new()));

/// Listener registries keyed by concrete type.
///
/// A process-wide instance is available through [`TypeRegistry::global`];
/// applications and tests that want isolation can create their own and
/// hand it to the dispatcher instead.
pub struct TypeRegistry {
    by_type: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
        }
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static RwLock<TypeRegistry> {
        &GLOBAL
    }

    /// Read access to `lock`, recovering from a poisoned lock.
    pub fn read(lock: &RwLock<TypeRegistry>) -> RwLockReadGuard<'_, TypeRegistry> {
        lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access to `lock`, recovering from a poisoned lock.
    pub fn write(lock: &RwLock<TypeRegistry>) -> RwLockWriteGuard<'_, TypeRegistry> {
        lock.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `listener` for every instance of `T`.
    pub fn add<T: Any, L: Listener<T>>(&mut self, name: &str, listener: L) {
        tracing::debug!(
            event = name,
            target_type = std::any::type_name::<T>(),
            "registering type-scoped listener"
        );
        self.registry_mut::<T>().add(name, listener);
    }

    /// Register an already shared listener for every instance of `T`.
    pub fn add_shared<T: Any>(&mut self, name: &str, listener: SharedListener<T>) {
        self.registry_mut::<T>().add_shared(EventName::parse(name), listener);
    }

    /// Remove type-scoped listeners of `T` selected by `name`.
    pub fn remove<T: Any>(&mut self, name: &str) -> usize {
        let Some(registry) = self.registry_slot_mut::<T>() else {
            return 0;
        };
        let removed = registry.remove(name);
        tracing::debug!(
            event = name,
            target_type = std::any::type_name::<T>(),
            removed,
            "removed type-scoped listeners"
        );
        removed
    }

    /// The registry for `T`, if anything was ever registered for it.
    pub fn get<T: Any>(&self) -> Option<&ListenerRegistry<T>> {
        self.by_type
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<ListenerRegistry<T>>())
    }

    /// Owned copies of `T`'s registrations for `name` and for the wildcard
    /// bucket, in that order.
    pub fn snapshot<T: Any>(&self, name: &str) -> (Vec<Registration<T>>, Vec<Registration<T>>) {
        match self.get::<T>() {
            Some(registry) => (registry.bucket(name).to_vec(), registry.bucket(WILDCARD).to_vec()),
            None => (Vec::new(), Vec::new()),
        }
    }

    /// Drop every listener registered for `T`.
    pub fn clear_type<T: Any>(&mut self) {
        self.by_type.remove(&TypeId::of::<T>());
    }

    /// Drop every type-scoped listener of every type.
    pub fn reset(&mut self) {
        tracing::debug!(types = self.by_type.len(), "resetting type registry");
        self.by_type.clear();
    }

    /// Number of types with a registry.
    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }

    fn registry_mut<T: Any>(&mut self) -> &mut ListenerRegistry<T> {
        let entry = self
            .by_type
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ListenerRegistry::<T>::new()));
        match entry.downcast_mut::<ListenerRegistry<T>>() {
            Some(registry) => registry,
            None => unreachable!("type registry entry keyed by TypeId holds another type"),
        }
    }

    fn registry_slot_mut<T: Any>(&mut self) -> Option<&mut ListenerRegistry<T>> {
        self.by_type
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_mut::<ListenerRegistry<T>>())
    }
}

/// Register `listener` for every instance of `T` in the global registry.
pub fn add_static<T: Any, L: Listener<T>>(name: &str, listener: L) {
    TypeRegistry::write(TypeRegistry::global()).add::<T, L>(name, listener);
}

/// Remove `T`'s type-scoped listeners from the global registry.
pub fn remove_static<T: Any>(name: &str) -> usize {
    TypeRegistry::write(TypeRegistry::global()).remove::<T>(name)
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.by_type.len())
            .finish()
    }
}
