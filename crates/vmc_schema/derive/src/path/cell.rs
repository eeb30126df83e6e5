use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_schema_cell_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::impls::NonGenericSchemaCell
    }
}

#[inline(always)]
pub(crate) fn generic_schema_cell_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::impls::GenericSchemaCell
    }
}
