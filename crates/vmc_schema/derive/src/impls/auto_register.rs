use proc_macro2::TokenStream;
use quote::quote_spanned;

use crate::derive_data::ConstructableDerive;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(derive: &ConstructableDerive) -> TokenStream {
    if let Some(span) = derive.attrs().auto_register {
        // Invalid for generic types.
        if derive.is_generic() {
            return crate::utils::empty();
        }

        let auto_register_ = crate::path::auto_register_(derive.vmc_schema_path());
        let ident = derive.ident();

        quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::__AutoRegisterFunc(
                    #auto_register_::__register::<#ident>
                )
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ConstructableDerive) -> TokenStream {
    crate::utils::empty()
}
