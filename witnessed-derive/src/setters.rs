//! Implementation of the `#[derive(Setters)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the Setters derive macro.
pub fn derive_setters_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_setters(name, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            name,
            "Setters can only be derived for structs, not enums. Use #[derive(CaseLenses)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(name, "Setters cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_struct_setters(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let setter_methods = named_fields.named.iter().filter_map(generate_field_setter);
            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#setter_methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "Setters can only be derived for structs with named fields, not tuple structs. Use prop!(Type, 0) instead.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "Setters cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}

/// The `Clone` bound is higher-ranked so that a non-`Clone` field only makes
/// its own setter uncallable instead of failing the whole derive.
fn generate_field_setter(field: &Field) -> Option<TokenStream2> {
    let field_name = field.ident.as_ref()?;
    let field_type = &field.ty;
    let method_name = format_ident!("{}_prop", field_name);
    let documentation = format!("Returns a setter focusing on the `{field_name}` field.");

    Some(quote! {
        #[doc = #documentation]
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::witnessed::setter::MutSetter<Self, #field_type> + Clone
        where
            for<'__setter> #field_type: Clone,
        {
            ::witnessed::setter::Prop::new(|source: &mut Self| &mut source.#field_name)
        }
    })
}
