//! Implementation of the `#[derive(KeyPaths)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the `KeyPaths` derive macro.
pub fn derive_key_paths_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => generate_struct_key_paths(name, generics, &data_struct.fields),
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "KeyPaths can only be derived for structs, not enums. Use #[derive(EnumPaths)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "KeyPaths cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_struct_key_paths(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let path_methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref().map(|ident| (ident, &field.ty)))
                .map(|(field_name, field_type)| {
                    let method_name = format_ident!("{}_path", field_name);
                    let documentation = format!("Returns the key path of the `{field_name}` field.");

                    quote! {
                        #[doc = #documentation]
                        #[inline]
                        #[must_use]
                        pub fn #method_name() -> impl ::focal::optics::KeyPath<Self, #field_type> + Clone {
                            ::focal::optics::FunctionKeyPath::new(
                                |source: &Self| &source.#field_name,
                                |mut source: Self, value: #field_type| {
                                    source.#field_name = value;
                                    source
                                },
                            )
                        }
                    }
                })
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#path_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "KeyPaths can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "KeyPaths cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}
