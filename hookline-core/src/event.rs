//! Event records and object references.

use crate::{error::DispatchError, name::EventName};
use std::{
    any::{Any, TypeId},
    fmt,
};

/// A non-owning identity of an object: its concrete type and address.
///
/// Used for an event's target and related target. It never keeps the
/// object alive, and the address is only meaningful while the object
/// stays where it was when the reference was taken (for the duration
/// of a dispatch, in practice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    type_id: TypeId,
    type_name: &'static str,
    addr: usize,
}

impl ObjectRef {
    /// Take a reference to `object`.
    pub fn of<T: Any>(object: &T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            addr: object as *const T as usize,
        }
    }

    /// Concrete type identity.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Concrete type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this refers to exactly `object`.
    pub fn is<T: Any>(&self, object: &T) -> bool {
        *self == Self::of(object)
    }

    /// Whether the referenced object is a `T`.
    pub fn is_type<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// One firing of an event.
///
/// Built by the firing component right before dispatch:
///
/// ```rust
/// use hookline_core::Event;
///
/// struct Deposit { amount: i64 }
///
/// let event = Event::new("MoneyAdded.local").with_data(Deposit { amount: 250 });
/// assert_eq!(event.name(), "MoneyAdded");
/// assert_eq!(event.namespace(), Some("local"));
/// assert!(event.target().is_none());
/// assert_eq!(event.data::<Deposit>().map(|d| d.amount), Some(250));
/// ```
pub struct Event {
    name: EventName,
    target: Option<ObjectRef>,
    related_target: Option<ObjectRef>,
    data: Option<Box<dyn Any + Send + Sync>>,
}

impl Event {
    /// Create a record for `name` (`"name"` or `"name.namespace"`).
    pub fn new(name: impl Into<EventName>) -> Self {
        Self {
            name: name.into(),
            target: None,
            related_target: None,
            data: None,
        }
    }

    /// Attach the object the triggering action originated from.
    pub fn with_related_target<R: Any>(mut self, related: &R) -> Self {
        self.related_target = Some(ObjectRef::of(related));
        self
    }

    /// Attach a typed payload, readable by listeners via [`Event::data`].
    pub fn with_data<P: Any + Send + Sync>(mut self, data: P) -> Self {
        self.data = Some(Box::new(data));
        self
    }

    /// The unqualified event name.
    pub fn name(&self) -> &str {
        self.name.name()
    }

    /// The event namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.name.namespace()
    }

    /// The parsed name and namespace.
    pub fn event_name(&self) -> &EventName {
        &self.name
    }

    /// The firing object. Absent until a dispatcher delivers the record.
    pub fn target(&self) -> Option<&ObjectRef> {
        self.target.as_ref()
    }

    /// The related object supplied at construction.
    pub fn related_target(&self) -> Option<&ObjectRef> {
        self.related_target.as_ref()
    }

    /// The payload, if one of type `P` was attached.
    pub fn data<P: Any>(&self) -> Option<&P> {
        self.data.as_ref()?.downcast_ref::<P>()
    }

    /// Whether a dispatcher has already delivered this record.
    pub fn is_dispatched(&self) -> bool {
        self.target.is_some()
    }

    /// Stamp the firing object onto the record.
    ///
    /// Fails if a target is already set: a record is fired at most once.
    pub fn set_target(&mut self, target: ObjectRef) -> Result<(), DispatchError> {
        if self.target.is_some() {
            return Err(DispatchError::AlreadyDispatched {
                event: self.name.to_string(),
            });
        }
        self.target = Some(target);
        Ok(())
    }

    /// Give the record `namespace` if it was built without one.
    pub fn apply_default_namespace(&mut self, namespace: &str) {
        if self.name.namespace().is_none() {
            self.name.set_namespace(namespace);
        }
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name.name())
            .field("namespace", &self.name.namespace())
            .field("target", &self.target)
            .field("related_target", &self.related_target)
            .field("has_data", &self.data.is_some())
            .finish()
    }
}
