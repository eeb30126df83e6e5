use proc_macro2::TokenStream;
use quote::quote;
use vmc_macro_utils::full_path::ResultFP;

use crate::derive_data::ConstructableDerive;

/// Generate `FieldValue` for the aggregate, storing it as `Value::Nested`.
pub(crate) fn impl_trait_field_value(derive: &ConstructableDerive) -> TokenStream {
    let vmc_schema_path = derive.vmc_schema_path();
    let field_value_ = crate::path::field_value_(vmc_schema_path);
    let exports_ = crate::path::macro_exports_(vmc_schema_path);
    let value_ = crate::path::value_(vmc_schema_path);
    let value_error_ = crate::path::value_error_(vmc_schema_path);

    let ident = derive.ident();
    let generics = derive.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #field_value_ for #ident #ty_generics #where_clause {
            #[inline]
            fn to_value(&self) -> #value_ {
                #exports_::nested_to_value(self)
            }

            #[inline]
            fn from_value(__value: &#value_) -> #ResultFP<Self, #value_error_> {
                #exports_::nested_from_value(__value)
            }
        }
    }
}
