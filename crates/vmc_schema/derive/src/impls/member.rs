use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ConstructableDerive;
use crate::diagnostics::Diagnostic;

/// Name of the generated full-argument constructor.
pub(crate) const CONSTRUCTOR_NAME: &str = "__construct_from_fields";

/// Generate the private full-argument constructor, or the diagnostic of a
/// failed validation.
///
/// ```ignore
/// impl Foo {
///     fn __construct_from_fields(a: A, b: Option<B>) -> Self {
///         Self { a, b, ..<Self as Constructable>::make_default() }
///     }
/// }
/// ```
pub(crate) fn impl_member_target(derive: &ConstructableDerive) -> Result<TokenStream, Diagnostic> {
    if let Some(diagnostic) = derive.diagnostic() {
        return Err(diagnostic);
    }

    let constructable_ = crate::path::constructable_(derive.vmc_schema_path());
    let ident = derive.ident();
    let constructor = quote::format_ident!("{CONSTRUCTOR_NAME}");

    let generics = derive.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let idents: Vec<_> = derive.fields().iter().map(|field| field.ident).collect();
    let types = derive.fields().iter().map(|field| field.ty);

    let body = if !derive.is_named() {
        quote!(<Self as #constructable_>::make_default())
    } else if derive.has_excluded() {
        quote! {
            Self {
                #(#idents,)*
                ..<Self as #constructable_>::make_default()
            }
        }
    } else {
        quote!(Self { #(#idents),* })
    };

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #[allow(clippy::too_many_arguments)]
            #[inline]
            fn #constructor(#(#idents: #types),*) -> Self {
                #body
            }
        }
    })
}
