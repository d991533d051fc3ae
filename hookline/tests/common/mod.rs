#![allow(dead_code)]

use hookline::{
    AutoBind, DispatchError, Event, Events, EventsAware, HookRegistry, HooksAware, SharedListener,
    handler_name,
};
use std::sync::{Arc, Mutex};

// ============================================================================
// Money
// ============================================================================

/// An amount that reacts to its own `MoneyAdded` events.
#[derive(Debug)]
pub struct Money {
    pub amount: i64,
    pub events: Events<Money>,
}

impl Money {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            events: Events::new(),
        }
    }

    /// Announce a deposit; the bound handler applies it.
    pub fn deposit(&mut self, amount: i64) -> Result<&mut Self, DispatchError> {
        let mut event = Event::new("MoneyAdded.local")
            .with_related_target(&*self)
            .with_data(amount);
        self.fire_event(&mut event)
    }

    fn on_money_added(&mut self, event: &Event) {
        if let Some(amount) = event.data::<i64>() {
            self.amount += amount;
        }
    }
}

impl AutoBind for Money {
    fn bound_listener(event_name: &str) -> Option<SharedListener<Self>> {
        match handler_name(event_name).as_str() {
            "on_money_added" => {
                let listener: SharedListener<Self> =
                    Arc::new(|money: &mut Money, event: &Event| money.on_money_added(event));
                Some(listener)
            }
            _ => None,
        }
    }
}

impl EventsAware for Money {
    fn events(&self) -> &Events<Self> {
        &self.events
    }

    fn events_mut(&mut self) -> &mut Events<Self> {
        &mut self.events
    }
}

// ============================================================================
// Priced
// ============================================================================

/// Something with a `price` hook pipeline.
#[derive(Default)]
pub struct Priced {
    pub hooks: HookRegistry,
}

impl HooksAware for Priced {
    fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// A listener that appends `tag` to a shared log.
pub fn tagged(
    log: &Arc<Mutex<Vec<&'static str>>>,
    tag: &'static str,
) -> impl Fn(&mut Money, &Event) + Send + Sync + 'static {
    let log = Arc::clone(log);
    move |_: &mut Money, _: &Event| log.lock().unwrap().push(tag)
}
