//! Instance-scoped event tests through `EventsAware`.

use hookline::{
    DispatchError, Event, EventsAware, Flow, ObjectRef,
    testing::{CountingListener, OrderRecorder, RecordingListener},
};
use std::sync::{Arc, Mutex};

mod common;
use common::{Money, tagged};

#[test]
fn test_bound_handler_applies_deposit() {
    let mut money = Money::new(100);
    money.bind_event("MoneyAdded");

    money.deposit(250).unwrap();
    assert_eq!(money.amount, 350);
}

#[test]
fn test_bind_without_handler_leaves_object_unchanged() {
    let mut money = Money::new(100);
    money.bind_event("MoneyRemoved");

    assert!(money.events().listeners().is_empty());
    money.fire_event(&mut Event::new("MoneyRemoved")).unwrap();
    assert_eq!(money.amount, 100);
}

#[test]
fn test_listener_sees_target_and_related_target() {
    let recorder = RecordingListener::new();
    let mut money = Money::new(0);
    money.add_event("MoneyAdded", recorder.clone());

    money.deposit(5).unwrap();

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "MoneyAdded");
    assert_eq!(events[0].namespace.as_deref(), Some("local"));
    let target = events[0].target.unwrap();
    assert!(target.is(&money));
    assert_eq!(events[0].related_target, Some(ObjectRef::of(&money)));
}

#[test]
fn test_namespace_prefix_selects_listeners() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut money = Money::new(0);
    money
        .add_event("MoneyAdded.lo", tagged(&log, "lo"))
        .add_event("MoneyAdded.remote", tagged(&log, "remote"))
        .add_event("MoneyAdded", tagged(&log, "any"));

    money.fire_event(&mut Event::new("MoneyAdded.local")).unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["lo", "any"]);

    log.lock().unwrap().clear();
    money.fire_event(&mut Event::new("MoneyAdded")).unwrap();
    assert_eq!(*log.lock().unwrap(), vec!["lo", "remote", "any"]);
}

#[test]
fn test_stop_short_circuits_name_pass_only() {
    let recorder = OrderRecorder::new();
    let mut money = Money::new(0);
    money
        .add_event("MoneyAdded", recorder.listener(1, Flow::Stop))
        .add_event("MoneyAdded", recorder.listener(2, Flow::Continue))
        .add_event("*", recorder.listener(3, Flow::Continue));

    money.fire_event(&mut Event::new("MoneyAdded")).unwrap();
    assert_eq!(recorder.order(), vec![1, 3]);
}

#[test]
fn test_closure_returning_false_stops() {
    let counter = CountingListener::new();
    let mut money = Money::new(0);
    money
        .add_event("MoneyAdded", |_: &mut Money, _: &Event| false)
        .add_event("MoneyAdded", counter.clone());

    money.fire_event(&mut Event::new("MoneyAdded")).unwrap();
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_wildcard_receives_unregistered_names() {
    let recorder = RecordingListener::new();
    let mut money = Money::new(0);
    money.add_event("*", recorder.clone());

    money.fire_event(&mut Event::new("Audited.batch")).unwrap();
    assert_eq!(recorder.events()[0].name, "Audited");
}

#[test]
fn test_no_listeners_leaves_event_untouched() {
    let mut money = Money::new(0);
    let mut event = Event::new("MoneyAdded");

    money.fire_event(&mut event).unwrap();
    assert!(!event.is_dispatched());
    assert!(event.target().is_none());
}

#[test]
fn test_event_fires_once() {
    let mut money = Money::new(0);
    money.add_event("MoneyAdded", CountingListener::new());

    let mut event = Event::new("MoneyAdded");
    money.fire_event(&mut event).unwrap();
    let err = money.fire_event(&mut event).unwrap_err();
    assert!(matches!(err, DispatchError::AlreadyDispatched { .. }));
}

#[test]
fn test_listener_error_aborts_dispatch() {
    let counter = CountingListener::new();
    let mut money = Money::new(0);
    money
        .add_event("MoneyAdded", |_: &mut Money, _: &Event| -> Result<(), &'static str> {
            Err("ledger closed")
        })
        .add_event("*", counter.clone());

    let err = money.fire_event(&mut Event::new("MoneyAdded")).unwrap_err();
    assert!(matches!(err, DispatchError::Listener { .. }));
    assert_eq!(std::error::Error::source(&err).unwrap().to_string(), "ledger closed");
    assert_eq!(counter.count(), 0);
}

#[test]
fn test_remove_by_namespace_keeps_unnamespaced() {
    let counter = CountingListener::new();
    let mut money = Money::new(0);
    money
        .add_event("MoneyAdded.local", counter.clone())
        .add_event("MoneyAdded", counter.clone())
        .remove_event("MoneyAdded.lo");

    money.fire_event(&mut Event::new("MoneyAdded.local")).unwrap();
    assert_eq!(counter.count(), 1);

    money.remove_event("MoneyAdded");
    assert!(!money.events().has_listeners("MoneyAdded"));
}

#[test]
fn test_listener_can_fire_nested_event() {
    let mut money = Money::new(0);
    money
        .add_event("MoneyAdded", |money: &mut Money, _: &Event| {
            money.fire_event(&mut Event::new("Audited"))?;
            Ok::<_, DispatchError>(())
        })
        .add_event("Audited", |money: &mut Money, _: &Event| money.amount += 1);

    money.fire_event(&mut Event::new("MoneyAdded")).unwrap();
    assert_eq!(money.amount, 1);
}
