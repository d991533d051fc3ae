//! Conventional handler resolution.
//!
//! Registering an instance event without a callback looks for the type's
//! conventional handler: the event name in snake case, prefixed with `on_`.
//! The lookup is an explicit trait rather than reflection, so a type only
//! takes part if it implements [`AutoBind`].

use crate::listener::SharedListener;

/// Capability of resolving a conventional handler for an event name.
///
/// Implement by hand, or generate it with `#[hookline::auto_bind]` on the
/// `impl` block holding the `on_*` methods.
///
/// ```rust
/// use hookline_core::{AutoBind, Event, SharedListener, handler_name};
/// use std::sync::Arc;
///
/// struct Money { amount: i64 }
///
/// impl Money {
///     fn on_money_added(&mut self, _event: &Event) {
///         self.amount += 1;
///     }
/// }
///
/// impl AutoBind for Money {
///     fn bound_listener(event_name: &str) -> Option<SharedListener<Self>> {
///         match handler_name(event_name).as_str() {
///             "on_money_added" => {
///                 let listener: SharedListener<Self> =
///                     Arc::new(|this: &mut Money, event: &Event| this.on_money_added(event));
///                 Some(listener)
///             }
///             _ => None,
///         }
///     }
/// }
///
/// assert!(Money::bound_listener("MoneyAdded").is_some());
/// assert!(Money::bound_listener("MoneyRemoved").is_none());
/// ```
pub trait AutoBind: Sized + 'static {
    /// The handler for `event_name` (unqualified, without namespace), if
    /// the type has one.
    fn bound_listener(_event_name: &str) -> Option<SharedListener<Self>> {
        None
    }
}

/// Conventional handler method name for an event name.
///
/// `MoneyAdded` and `moneyAdded` both map to `on_money_added`; runs of
/// capitals are kept together (`HTTPRequest` → `on_http_request`) and
/// dashes become underscores.
pub fn handler_name(event_name: &str) -> String {
    let chars: Vec<char> = event_name.chars().collect();
    let mut out = String::with_capacity(event_name.len() + 4);
    out.push_str("on_");

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == ' ' {
            out.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}
