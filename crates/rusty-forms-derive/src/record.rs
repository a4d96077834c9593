// File: rusty-forms-derive/src/record.rs
// Purpose: Record derive macro and field attribute processing

use std::collections::HashMap;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr};

/// Wire name marking a field as excluded
const EXCLUDED: &str = "-";

/// One struct field as declared through its attributes
struct FieldDecl {
    ident: Ident,
    identity: String,
    wire_name: String,
    rules: String,
}

impl FieldDecl {
    fn is_excluded(&self) -> bool {
        self.wire_name == EXCLUDED
    }
}

pub fn impl_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record can only be derived for structs",
            ))
        }
    };

    let mut decls = Vec::new();
    let mut identities: HashMap<String, Span> = HashMap::new();
    let mut wire_names: HashMap<String, String> = HashMap::new();

    for field in named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };

        let form_attr = find_str_attr(&field.attrs, "form")?;
        let binding_attr = find_str_attr(&field.attrs, "binding")?;

        let rust_name = ident.unraw().to_string();
        let identity = to_upper_camel_case(&rust_name);
        let wire_name = form_attr
            .as_ref()
            .map(LitStr::value)
            .unwrap_or_else(|| rust_name.clone());

        // Rule strings are checked here so typos fail the build
        let rules = match &binding_attr {
            Some(lit) => {
                let value = lit.value();
                rusty_forms_rules::parse_rules_strict(&value)
                    .map_err(|err| syn::Error::new(lit.span(), err))?;
                value
            }
            None => String::new(),
        };

        if identities.insert(identity.clone(), ident.span()).is_some() {
            return Err(syn::Error::new(
                ident.span(),
                format!("field identity `{}` is declared twice", identity),
            ));
        }

        if wire_name != EXCLUDED {
            if let Some(previous) = wire_names.insert(wire_name.clone(), identity.clone()) {
                let span = form_attr
                    .as_ref()
                    .map(LitStr::span)
                    .unwrap_or_else(|| ident.span());
                return Err(syn::Error::new(
                    span,
                    format!(
                        "wire name `{}` is already bound to field `{}`",
                        wire_name, previous
                    ),
                ));
            }
        }

        decls.push(FieldDecl {
            ident,
            identity,
            wire_name,
            rules,
        });
    }

    let specs = decls.iter().map(|decl| {
        let identity = &decl.identity;
        let wire_name = &decl.wire_name;
        let rules = &decl.rules;
        quote! {
            ::rusty_forms::FieldSpec::new(#identity, #wire_name, #rules)
        }
    });

    // Excluded fields are never read, so their types need no Value conversion
    let value_arms = decls.iter().filter(|decl| !decl.is_excluded()).map(|decl| {
        let identity = &decl.identity;
        let ident = &decl.ident;
        quote! {
            #identity => ::core::option::Option::Some(
                ::core::convert::Into::<::rusty_forms::Value>::into(
                    ::core::clone::Clone::clone(&self.#ident)
                )
            )
        }
    });

    let type_name = name.to_string();

    Ok(quote! {
        impl #impl_generics ::rusty_forms::Record for #name #ty_generics #where_clause {
            fn describe(&self) -> &'static ::rusty_forms::RecordDescriptor {
                static DESCRIPTOR: ::rusty_forms::__private::Lazy<::rusty_forms::RecordDescriptor> =
                    ::rusty_forms::__private::Lazy::new(|| {
                        ::rusty_forms::RecordDescriptor::new(::std::vec![#(#specs),*])
                    });
                &DESCRIPTOR
            }

            fn field_value(&self, identity: &str) -> ::core::option::Option<::rusty_forms::Value> {
                match identity {
                    #(#value_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn type_name(&self) -> &'static str {
                #type_name
            }
        }
    })
}

/// Find a `#[name("...")]` attribute, rejecting duplicates
fn find_str_attr(attrs: &[Attribute], name: &str) -> syn::Result<Option<LitStr>> {
    let mut found = None;

    for attr in attrs {
        if !attr.path().is_ident(name) {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                format!("duplicate #[{}] attribute", name),
            ));
        }
        found = Some(attr.parse_args::<LitStr>()?);
    }

    Ok(found)
}

/// Convert snake_case to UpperCamelCase
fn to_upper_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for segment in s.split('_').filter(|segment| !segment.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}
