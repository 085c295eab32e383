//! Implementation of the `#[derive(Introspect)]` macro.
//!
//! Generates an `Introspect::shape` that returns the struct's record: its
//! type name and one field declaration per field, in declaration order.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Fields, Result, Visibility};

use super::attrs::parse_opt_attrs;

/// Main implementation of the Introspect derive macro.
pub fn introspect_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(Error::new(
                    input.span(),
                    "Introspect can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Introspect can only be derived for structs",
            ))
        }
    };

    let mut decls: Vec<TokenStream> = Vec::new();

    for field in fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let name = ident.unraw().to_string();
        let exported = matches!(field.vis, Visibility::Public(_));
        let opt = parse_opt_attrs(&field.attrs)?;

        let mut decl = quote! {
            ::gyudon::FieldDecl::new(#name, #exported)
        };
        if let Some(help) = &opt.help {
            decl = quote! { #decl.help(#help) };
        }
        if let Some(default) = &opt.default {
            decl = quote! { #decl.default_value(#default) };
        }
        decls.push(decl);
    }

    let type_name = struct_name.unraw().to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::gyudon::Introspect for #struct_name #ty_generics #where_clause {
            fn shape(&self) -> ::gyudon::Shape {
                ::gyudon::Shape::Record(::gyudon::Record::new(
                    #type_name,
                    ::std::vec![#(#decls),*],
                ))
            }
        }
    };

    Ok(expanded)
}
