// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod cases;
mod constructable;
mod field_value;
mod member;
mod value_code;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cases::impl_cases;

use auto_register::get_auto_register_impl;
use constructable::impl_trait_constructable;
use field_value::impl_trait_field_value;
use member::impl_member_target;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Path};

use crate::derive_data::{ConstructableDerive, Validation};

/// Generate everything `#[derive(Constructable)]` emits.
///
/// On a failed validation the output is the diagnostic alone.
pub(crate) fn derive_constructable(ast: &DeriveInput, vmc_schema_path: Path) -> TokenStream {
    let derive = match ConstructableDerive::new(ast, vmc_schema_path) {
        Ok(derive) => derive,
        Err(err) => return err.into_compile_error(),
    };

    let member_tokens = match impl_member_target(&derive) {
        Ok(tokens) => tokens,
        Err(diagnostic) => return diagnostic.into_compile_error(),
    };
    let conformance_tokens = impl_conformance_target(&derive);

    quote! {
        const _: () = {
            #member_tokens
            #conformance_tokens
        };
    }
}

/// The `Constructable` and `FieldValue` impls, plus auto registration.
///
/// Validates on its own and emits nothing unless the input is valid.
fn impl_conformance_target(derive: &ConstructableDerive) -> TokenStream {
    if derive.validation() != Validation::Valid {
        return crate::utils::empty();
    }

    let constructable_tokens = impl_trait_constructable(derive);
    let field_value_tokens = impl_trait_field_value(derive);
    let auto_register_tokens = get_auto_register_impl(derive);

    quote! {
        #constructable_tokens
        #field_value_tokens
        #auto_register_tokens
    }
}
