use proc_macro2::TokenStream;
use quote::quote;

#[inline]
pub(crate) fn type_info_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::info::TypeInfo
    }
}

#[inline]
pub(crate) fn field_descriptor_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::info::FieldDescriptor
    }
}

#[inline]
pub(crate) fn schema_ref_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::info::SchemaRef
    }
}

#[inline]
pub(crate) fn enum_info_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::info::EnumInfo
    }
}

#[inline]
pub(crate) fn custom_type_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::info::CustomType
    }
}
