//! This independent module is used to provide the required paths,
//! so as to minimize changes when the `vmc_schema` structure is modified.
//!
//! The only special item is the path of `vmc_schema` itself,
//! see the [`vmc_schema`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vmc_schema` crate.
///
/// 1. For crates that depend on `vmc_schema`, `::vmc_schema` is returned.
/// 2. For crates that depend on `vmc_core`, `::vmc_core::schema` is returned.
/// 3. For crates that depend on `vmc`, `::vmc::schema` is returned.
/// 4. Otherwise `::vmc_schema` is returned, which may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is obtained
/// once per derive and passed around.
pub(crate) fn vmc_schema() -> syn::Path {
    vmc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vmc_schema"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod info;
mod value;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;
pub(crate) use info::*;
pub(crate) use value::*;

#[inline(always)]
pub(crate) fn macro_exports_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn constructable_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::Constructable
    }
}

#[inline(always)]
pub(crate) fn cases_(vmc_schema_path: &syn::Path) -> TokenStream {
    quote! {
        #vmc_schema_path::Cases
    }
}
