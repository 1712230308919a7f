//! Implementation of the `#[derive(CaseLenses)]` macro.
//!
//! Every generated lens is a `FunctionCaseLens` built from two non-capturing
//! closures: one that moves the payload out of the variant (handing the
//! source back on a mismatch) and one that rebuilds the variant.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the `CaseLenses` derive macro.
pub fn derive_case_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            let variants: Vec<&Variant> = data_enum.variants.iter().collect();
            generate_enum_case_lenses(name, &input.generics, &variants)
        }
        Data::Struct(_) => syn::Error::new_spanned(
            name,
            "CaseLenses can only be derived for enums, not structs. Use #[derive(Setters)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "CaseLenses cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_case_lenses(
    name: &Ident,
    generics: &Generics,
    variants: &[&Variant],
) -> TokenStream2 {
    let case_methods = variants.iter().copied().map(generate_variant_case_lens);
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#case_methods)*
        }
    }
}

fn generate_variant_case_lens(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_case", to_snake_case(&variant_name.to_string()));
    let documentation = format!("Returns a case lens focusing on the `{variant_name}` variant.");

    let (focus_type, pattern, payload, rebuild) = match &variant.fields {
        Fields::Unit => (
            quote! { () },
            quote! { Self::#variant_name },
            quote! { () },
            quote! { |(): ()| Self::#variant_name },
        ),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let field_type = &fields.unnamed[0].ty;
            (
                quote! { #field_type },
                quote! { Self::#variant_name(value) },
                quote! { value },
                quote! { |value: #field_type| Self::#variant_name(value) },
            )
        }
        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();
            let bindings: Vec<Ident> = (0..field_types.len())
                .map(|index| format_ident!("value{}", index))
                .collect();
            (
                quote! { (#(#field_types),*) },
                quote! { Self::#variant_name(#(#bindings),*) },
                quote! { (#(#bindings),*) },
                quote! { |(#(#bindings),*): (#(#field_types),*)| Self::#variant_name(#(#bindings),*) },
            )
        }
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
            (
                quote! { (#(#field_types),*) },
                quote! { Self::#variant_name { #(#field_names),* } },
                quote! { (#(#field_names),*) },
                quote! {
                    |(#(#field_names),*): (#(#field_types),*)| Self::#variant_name { #(#field_names),* }
                },
            )
        }
    };

    quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        #[allow(unused_parens)]
        pub fn #method_name() -> impl ::witnessed::setter::CaseLens<Self, #focus_type> + Clone {
            ::witnessed::setter::FunctionCaseLens::new(
                |source: Self| match source {
                    #pattern => ::core::result::Result::Ok(#payload),
                    #[allow(unreachable_patterns)]
                    other => ::core::result::Result::Err(other),
                },
                #rebuild,
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
