//! Procedural macros for hookline.
//!
//! - `#[derive(EventsAware)]` / `#[derive(HooksAware)]` wire a struct's
//!   embedded state into the composition traits.
//! - `#[auto_bind]` on an inherent impl block turns its `on_*` methods into
//!   conventional handlers for `bind_event`.

use proc_macro::TokenStream;

mod aware;
mod bind;

/// Derive `EventsAware` from a field marked `#[events]` (or named `events`).
///
/// ```rust,ignore
/// #[derive(EventsAware)]
/// struct Account {
///     balance: i64,
///     events: Events<Account>,
/// }
/// ```
#[proc_macro_derive(EventsAware, attributes(events))]
pub fn derive_events_aware(input: TokenStream) -> TokenStream {
    aware::derive_aware_impl(input, aware::Kind::Events)
}

/// Derive `HooksAware` from a field marked `#[hooks]` (or named `hooks`).
#[proc_macro_derive(HooksAware, attributes(hooks))]
pub fn derive_hooks_aware(input: TokenStream) -> TokenStream {
    aware::derive_aware_impl(input, aware::Kind::Hooks)
}

/// Implement `AutoBind` from the `on_*` methods of an impl block.
///
/// Every method named `on_<snake_case_event>` that takes `&self` or
/// `&mut self` plus one argument becomes the handler for the matching
/// event name.
///
/// ```rust,ignore
/// #[auto_bind]
/// impl Money {
///     fn on_money_added(&mut self, event: &Event) {
///         self.amount += event.data::<i64>().copied().unwrap_or_default();
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn auto_bind(attr: TokenStream, item: TokenStream) -> TokenStream {
    bind::auto_bind_impl(attr, item)
}
