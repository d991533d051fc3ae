//! The `#[auto_bind]` attribute.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{FnArg, Ident, ImplItem, ItemImpl, parse_macro_input};

const HANDLER_PREFIX: &str = "on_";

/// A method usable as a conventional handler: `fn on_x(&self | &mut self, event)`.
fn is_handler(method: &syn::ImplItemFn) -> bool {
    let sig = &method.sig;
    if !sig.ident.to_string().starts_with(HANDLER_PREFIX) || sig.inputs.len() != 2 {
        return false;
    }
    matches!(sig.inputs.first(), Some(FnArg::Receiver(receiver)) if receiver.reference.is_some())
}

pub(crate) fn auto_bind_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(Span::call_site(), "#[auto_bind] takes no arguments")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemImpl);

    if let Some((_, path, _)) = &input.trait_ {
        return syn::Error::new_spanned(path, "#[auto_bind] must be placed on an inherent impl block")
            .to_compile_error()
            .into();
    }

    let handlers: Vec<&Ident> = input
        .items
        .iter()
        .filter_map(|item| match item {
            ImplItem::Fn(method) if is_handler(method) => Some(&method.sig.ident),
            _ => None,
        })
        .collect();

    let arms = handlers.iter().map(|ident| {
        let key = ident.to_string();
        quote! {
            #key => {
                let listener: ::hookline::SharedListener<Self> = ::std::sync::Arc::new(
                    |this: &mut Self, event: &::hookline::Event| Self::#ident(this, event),
                );
                ::core::option::Option::Some(listener)
            }
        }
    });

    let self_ty = &input.self_ty;
    let (impl_generics, _, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        #input

        impl #impl_generics ::hookline::AutoBind for #self_ty #where_clause {
            fn bound_listener(event_name: &str) -> ::core::option::Option<::hookline::SharedListener<Self>> {
                match ::hookline::handler_name(event_name).as_str() {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}
