//! Per-type code of a classified field: its `TypeInfo` expression and the
//! functions converting it to and from a `Value`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Path;
use vmc_macro_utils::full_path::ResultFP;

use crate::classify::Classified;

/// An expression of type `TypeInfo`.
pub(crate) fn type_info_expr(node: &Classified, vmc_schema_path: &Path) -> TokenStream {
    let type_info_ = crate::path::type_info_(vmc_schema_path);
    let recurse = |node: &Classified| type_info_expr(node, vmc_schema_path);

    match node {
        Classified::Base { base, .. } => {
            let variant = format_ident!("{}", base.variant());
            quote!(#type_info_::#variant)
        }
        Classified::Optional { inner, .. } => {
            let inner = recurse(inner);
            quote!(#type_info_::optional(#inner))
        }
        Classified::Array { element, .. } => {
            let element = recurse(element);
            quote!(#type_info_::array(#element))
        }
        Classified::Map { key, value, .. } => {
            let key = recurse(key);
            let value = recurse(value);
            quote!(#type_info_::map(#key, #value))
        }
        Classified::Set { element, .. } => {
            let element = recurse(element);
            quote!(#type_info_::set(#element))
        }
        Classified::Nested { ty } => {
            let schema_ref_ = crate::path::schema_ref_(vmc_schema_path);
            quote!(#type_info_::Nested(#schema_ref_::of::<#ty>()))
        }
        Classified::Enum { ty } => {
            let enum_info_ = crate::path::enum_info_(vmc_schema_path);
            quote!(#type_info_::Enum(#enum_info_::of::<#ty>()))
        }
        Classified::Custom { ty, name, .. } => {
            let custom_type_ = crate::path::custom_type_(vmc_schema_path);
            quote!(#type_info_::Custom(#custom_type_::of::<#ty>(#name)))
        }
    }
}

/// An expression implementing `Fn(&T) -> Value` for the node's type `T`.
///
/// Subtrees without opaque leaves go through `FieldValue`, the rest is
/// lowered structurally.
pub(crate) fn to_value_fn(node: &Classified, vmc_schema_path: &Path) -> TokenStream {
    let ty = node.ty();
    if !node.contains_custom() {
        let field_value_ = crate::path::field_value_(vmc_schema_path);
        return quote!(<#ty as #field_value_>::to_value);
    }

    let exports_ = crate::path::macro_exports_(vmc_schema_path);
    let recurse = |node: &Classified| to_value_fn(node, vmc_schema_path);

    match node {
        Classified::Custom { .. } => quote!(#exports_::opaque_to_value::<#ty>),
        Classified::Optional { inner, .. } => {
            let inner = recurse(inner);
            quote!(|__value: &#ty| #exports_::option_to_value(__value, #inner))
        }
        Classified::Array { element, .. } => {
            let element = recurse(element);
            quote!(|__value: &#ty| #exports_::array_to_value(__value.iter(), #element))
        }
        Classified::Set { element, .. } => {
            let element = recurse(element);
            quote!(|__value: &#ty| #exports_::set_to_value(__value.iter(), #element))
        }
        Classified::Map { key, value, .. } => {
            let key = recurse(key);
            let value = recurse(value);
            quote!(|__value: &#ty| #exports_::map_to_value(__value.iter(), #key, #value))
        }
        // Never contain opaque leaves.
        Classified::Base { .. } | Classified::Nested { .. } | Classified::Enum { .. } => {
            unreachable!("`{node}` has no opaque leaf")
        }
    }
}

/// An expression implementing `Fn(&Value) -> Result<T, ValueError>` for the
/// node's type `T`.
pub(crate) fn from_value_fn(node: &Classified, vmc_schema_path: &Path) -> TokenStream {
    let ty = node.ty();
    if !node.contains_custom() {
        let field_value_ = crate::path::field_value_(vmc_schema_path);
        return quote!(<#ty as #field_value_>::from_value);
    }

    let exports_ = crate::path::macro_exports_(vmc_schema_path);
    let value_ = crate::path::value_(vmc_schema_path);
    let value_error_ = crate::path::value_error_(vmc_schema_path);
    let recurse = |node: &Classified| from_value_fn(node, vmc_schema_path);

    let body = match node {
        Classified::Custom { .. } => return quote!(#exports_::opaque_from_value::<#ty>),
        Classified::Optional { inner, .. } => {
            let inner = recurse(inner);
            quote!(#exports_::option_from_value(__value, #inner))
        }
        Classified::Array { element, fixed, .. } => {
            let element = recurse(element);
            if *fixed {
                quote!(#exports_::fixed_array_from_value(__value, #element))
            } else {
                quote!(#exports_::array_from_value(__value, #element))
            }
        }
        Classified::Set { element, .. } => {
            let element = recurse(element);
            quote!(#exports_::set_from_value(__value, #element))
        }
        Classified::Map { key, value, .. } => {
            let key = recurse(key);
            let value = recurse(value);
            quote!(#exports_::map_from_value(__value, #key, #value))
        }
        Classified::Base { .. } | Classified::Nested { .. } | Classified::Enum { .. } => {
            unreachable!("`{node}` has no opaque leaf")
        }
    };

    quote! {
        |__value: &#value_| -> #ResultFP<#ty, #value_error_> { #body }
    }
}
