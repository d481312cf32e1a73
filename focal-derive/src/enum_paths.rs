//! Implementation of the `#[derive(EnumPaths)]` macro.
//!
//! One `{variant}_case()` method is generated per variant. The payload type
//! depends on the variant shape:
//!
//! - unit variants focus on `()`
//! - single-field tuple variants focus on the field
//! - multi-field tuple and struct variants focus on a tuple of the fields
//!   in definition order
//!
//! The first two borrow their payload (`BorrowEnumPath`); tuple payloads
//! are extracted by value only (`EnumPath`).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the `EnumPaths` derive macro.
pub fn derive_enum_paths_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => generate_enum_paths(name, generics, data_enum.variants.iter()),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "EnumPaths can only be derived for enums, not structs. Use #[derive(KeyPaths)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "EnumPaths cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_paths<'a>(
    name: &Ident,
    generics: &Generics,
    variants: impl Iterator<Item = &'a Variant>,
) -> TokenStream2 {
    let path_methods: Vec<TokenStream2> = variants.map(generate_variant_path).collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#path_methods)*
        }
    }
}

fn generate_variant_path(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_case", to_snake_case(&variant_name.to_string()));
    let documentation = format!("Returns the enum path of the `{variant_name}` case.");

    match &variant.fields {
        Fields::Unit => quote! {
            #[doc = #documentation]
            #[inline]
            #[must_use]
            pub fn #method_name() -> impl ::focal::optics::BorrowEnumPath<Self, ()> + Clone {
                ::focal::optics::FunctionEnumPath::new(
                    |whole: &Self| match whole {
                        Self::#variant_name => Some(&()),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                    |(): ()| Self::#variant_name,
                    |whole: Self| match whole {
                        Self::#variant_name => Ok(()),
                        #[allow(unreachable_patterns)]
                        other => Err(other),
                    },
                )
            }
        },
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            quote! {
                #[doc = #documentation]
                #[inline]
                #[must_use]
                pub fn #method_name() -> impl ::focal::optics::BorrowEnumPath<Self, #field_type> + Clone {
                    ::focal::optics::FunctionEnumPath::new(
                        |whole: &Self| match whole {
                            Self::#variant_name(part) => Some(part),
                            #[allow(unreachable_patterns)]
                            _ => None,
                        },
                        |part: #field_type| Self::#variant_name(part),
                        |whole: Self| match whole {
                            Self::#variant_name(part) => Ok(part),
                            #[allow(unreachable_patterns)]
                            other => Err(other),
                        },
                    )
                }
            }
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("field_{}", index))
                .collect();
            let pattern = quote! { Self::#variant_name(#(#bindings),*) };
            generate_tuple_payload_path(&method_name, &documentation, &field_types, &bindings, &pattern)
        }
        Fields::Named(fields) => {
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
            let bindings: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let pattern = quote! { Self::#variant_name { #(#bindings),* } };
            generate_tuple_payload_path(&method_name, &documentation, &field_types, &bindings, &pattern)
        }
    }
}

/// Multi-field payloads are not laid out as a tuple inside the enum, so the
/// generated path is an `OwnedEnumPath` with no borrowing accessor.
fn generate_tuple_payload_path<B: quote::ToTokens>(
    method_name: &Ident,
    documentation: &str,
    field_types: &[&Type],
    bindings: &[B],
    pattern: &TokenStream2,
) -> TokenStream2 {
    let tuple_type = quote! { (#(#field_types,)*) };
    let tuple = quote! { (#(#bindings,)*) };
    let documentation = format!("{documentation}\n\nThe fields are focused as a tuple, extracted by value.");

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::focal::optics::EnumPath<Self, #tuple_type> + Clone {
            ::focal::optics::OwnedEnumPath::new(
                |part: #tuple_type| {
                    let #tuple = part;
                    #pattern
                },
                |whole: Self| match whole {
                    #pattern => Ok(#tuple),
                    #[allow(unreachable_patterns)]
                    other => Err(other),
                },
            )
        }
    }
}

/// Converts a `CamelCase` or `PascalCase` string to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let characters: Vec<char> = input.chars().collect();

    for (index, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = characters[index - 1];
                let next_is_lowercase = characters
                    .get(index + 1)
                    .is_some_and(|next| next.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Authenticated", "authenticated")]
    #[case("KeyPress", "key_press")]
    #[case("HTTPRequest", "http_request")]
    #[case("XMLParser", "xml_parser")]
    #[case("A", "a")]
    #[case("none", "none")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }
}
