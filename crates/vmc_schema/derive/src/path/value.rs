use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn value_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::value::Value
    }
}

#[inline]
pub(crate) fn value_map_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::value::ValueMap
    }
}

#[inline]
pub(crate) fn value_error_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::value::ValueError
    }
}

#[inline]
pub(crate) fn field_value_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::FieldValue
    }
}
