//! Derives and `#[auto_bind]`.
#![cfg(feature = "macros")]

use hookline::{
    AutoBind, Event, Events, EventsAware, Flow, HookRegistry, HooksAware, auto_bind,
};

#[derive(EventsAware, HooksAware)]
struct Wallet {
    balance: i64,
    events: Events<Wallet>,
    hooks: HookRegistry,
}

#[auto_bind]
impl Wallet {
    fn new(balance: i64) -> Self {
        Self {
            balance,
            events: Events::new(),
            hooks: HookRegistry::new(),
        }
    }

    fn on_money_added(&mut self, event: &Event) {
        self.balance += event.data::<i64>().copied().unwrap_or_default();
    }

    fn on_frozen(&mut self, _event: &Event) -> Flow {
        Flow::Stop
    }

    fn on_audited(&self, _event: &Event) -> bool {
        self.balance >= 0
    }

    // Not a handler: wrong arity.
    #[allow(dead_code)]
    fn on_hold(&mut self) {}
}

#[derive(EventsAware)]
struct Tagged {
    #[events]
    state: Events<Tagged>,
}

#[test]
fn test_auto_bind_resolves_handlers() {
    assert!(Wallet::bound_listener("MoneyAdded").is_some());
    assert!(Wallet::bound_listener("moneyAdded").is_some());
    assert!(Wallet::bound_listener("Frozen").is_some());
    assert!(Wallet::bound_listener("Audited").is_some());
    assert!(Wallet::bound_listener("Hold").is_none());
    assert!(Wallet::bound_listener("MoneyRemoved").is_none());
}

#[test]
fn test_derived_wallet_binds_and_fires() {
    let mut wallet = Wallet::new(100);
    wallet.bind_event("MoneyAdded").bind_event("Frozen");

    wallet
        .fire_event(&mut Event::new("MoneyAdded.local").with_data(250_i64))
        .unwrap();
    assert_eq!(wallet.balance, 350);

    wallet.add_hook("fee", |v: i64| Some(v - 1));
    assert_eq!(wallet.fire_hook("fee", wallet.balance).unwrap(), 349);
}

#[test]
fn test_marked_field_is_used() {
    let mut tagged = Tagged { state: Events::new() };
    tagged.add_event("Ping", |_: &mut Tagged, _: &Event| ());
    assert_eq!(tagged.events().listener_count("Ping"), 1);
}
