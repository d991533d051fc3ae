//! Testing utilities for hookline.
//!
//! This module provides listeners that make dispatch behaviour observable.
//!
//! # Features
//!
//! - [`RecordingListener`]: records a snapshot of every event it receives
//! - [`CountingListener`]: counts invocations
//! - [`OrderRecorder`]: hands out listeners and hooks that log their id, to
//!   assert delivery order across scopes

use hookline_core::{BoxError, Event, Flow, HookFn, Listener, ObjectRef};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Listener
// ============================================================================

/// What a [`RecordingListener`] saw of one delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Event name.
    pub name: String,
    /// Event namespace.
    pub namespace: Option<String>,
    /// Target stamped by the dispatcher.
    pub target: Option<ObjectRef>,
    /// Related target supplied by the caller.
    pub related_target: Option<ObjectRef>,
}

impl RecordedEvent {
    fn of(event: &Event) -> Self {
        Self {
            name: event.name().to_owned(),
            namespace: event.namespace().map(str::to_owned),
            target: event.target().copied(),
            related_target: event.related_target().copied(),
        }
    }
}

/// A listener that records all events it receives.
///
/// # Example
///
/// ```rust
/// use hookline_core::{Event, Flow, Listener};
/// use hookline_std::testing::RecordingListener;
///
/// struct Doc;
///
/// let recorder = RecordingListener::new();
/// let probe = recorder.clone();
///
/// recorder.on_event(&mut Doc, &Event::new("save.local")).unwrap();
///
/// let events = probe.events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].namespace.as_deref(), Some("local"));
/// ```
#[derive(Clone)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
    result: Flow,
}

impl RecordingListener {
    /// Create a recording listener that returns `Continue`.
    pub fn new() -> Self {
        Self::with_result(Flow::Continue)
    }

    /// Create a recording listener that returns `result`.
    pub fn with_result(result: Flow) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Get a copy of the recorded events.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for RecordingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Listener<T> for RecordingListener {
    fn on_event(&self, _target: &mut T, event: &Event) -> Result<Flow, BoxError> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedEvent::of(event));
        Ok(self.result)
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations.
#[derive(Clone, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<T> Listener<T> for CountingListener {
    fn on_event(&self, _target: &mut T, _event: &Event) -> Result<Flow, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Flow::Continue)
    }
}

// ============================================================================
// Order Recorder
// ============================================================================

/// Shared log of ids, appended to by the listeners and hooks it creates.
#[derive(Clone, Default)]
pub struct OrderRecorder {
    order: Arc<Mutex<Vec<usize>>>,
}

impl OrderRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that logs `id` and returns `result`.
    pub fn listener(&self, id: usize, result: Flow) -> OrderListener {
        OrderListener {
            id,
            result,
            order: Arc::clone(&self.order),
        }
    }

    /// A hook that logs `id` and passes its value through unchanged.
    pub fn hook(&self, id: usize) -> OrderHook {
        OrderHook {
            id,
            order: Arc::clone(&self.order),
        }
    }

    /// The ids logged so far.
    pub fn order(&self) -> Vec<usize> {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Listener created by [`OrderRecorder::listener`].
pub struct OrderListener {
    id: usize,
    result: Flow,
    order: Arc<Mutex<Vec<usize>>>,
}

impl<T> Listener<T> for OrderListener {
    fn on_event(&self, _target: &mut T, _event: &Event) -> Result<Flow, BoxError> {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.id);
        Ok(self.result)
    }
}

/// Hook created by [`OrderRecorder::hook`].
pub struct OrderHook {
    id: usize,
    order: Arc<Mutex<Vec<usize>>>,
}

impl<V> HookFn<V> for OrderHook {
    fn apply(&self, value: V) -> Result<Option<V>, BoxError> {
        self.order
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.id);
        Ok(Some(value))
    }
}
