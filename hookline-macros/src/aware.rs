//! Derives for the composition traits.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member, parse_macro_input};

#[derive(Clone, Copy)]
pub(crate) enum Kind {
    Events,
    Hooks,
}

impl Kind {
    fn key(self) -> &'static str {
        match self {
            Kind::Events => "events",
            Kind::Hooks => "hooks",
        }
    }
}

/// Locate the state field: an explicit `#[events]` / `#[hooks]` marker
/// wins over a field carrying the conventional name.
fn find_field(input: &DeriveInput, kind: Kind) -> syn::Result<Member> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                format!("{} can only be derived for structs", trait_name(kind)),
            ));
        }
    };

    let key = kind.key();
    let mut marked = None;
    for (index, field) in fields.iter().enumerate() {
        if field.attrs.iter().any(|attr| attr.path().is_ident(key)) {
            if marked.is_some() {
                return Err(syn::Error::new_spanned(
                    field,
                    format!("only one field may be marked #[{}]", key),
                ));
            }
            marked = Some(member(field.ident.clone(), index));
        }
    }
    if let Some(member) = marked {
        return Ok(member);
    }

    if let Fields::Named(named) = fields {
        if let Some(field) = named
            .named
            .iter()
            .find(|field| field.ident.as_ref().is_some_and(|ident| ident == key))
        {
            return Ok(member(field.ident.clone(), 0));
        }
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        format!(
            "{} needs a field named `{}` or marked #[{}]",
            trait_name(kind),
            key,
            key
        ),
    ))
}

fn member(ident: Option<syn::Ident>, index: usize) -> Member {
    match ident {
        Some(ident) => Member::Named(ident),
        None => Member::Unnamed(Index::from(index)),
    }
}

fn trait_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Events => "EventsAware",
        Kind::Hooks => "HooksAware",
    }
}

pub(crate) fn derive_aware_impl(input: TokenStream, kind: Kind) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let field = match find_field(&input, kind) {
        Ok(field) => field,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = match kind {
        Kind::Events => quote! {
            impl #impl_generics ::hookline::EventsAware for #name #ty_generics #where_clause {
                fn events(&self) -> &::hookline::Events<Self> {
                    &self.#field
                }

                fn events_mut(&mut self) -> &mut ::hookline::Events<Self> {
                    &mut self.#field
                }
            }
        },
        Kind::Hooks => quote! {
            impl #impl_generics ::hookline::HooksAware for #name #ty_generics #where_clause {
                fn hooks(&self) -> &::hookline::HookRegistry {
                    &self.#field
                }

                fn hooks_mut(&mut self) -> &mut ::hookline::HookRegistry {
                    &mut self.#field
                }
            }
        },
    };

    TokenStream::from(expanded)
}
