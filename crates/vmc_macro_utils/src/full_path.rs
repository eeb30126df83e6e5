//! Fully qualified paths of `core` items, usable in `quote!`.
//!
//! Generated code must not depend on what the caller has in scope,
//! so every standard item is spelled with a leading `::core`.
//!
//! ```
//! use quote::quote;
//! use vmc_macro_utils::full_path::OptionFP;
//!
//! let tokens = quote!(#OptionFP::None);
//! assert_eq!(tokens.to_string(), ":: core :: option :: Option :: None");
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$attr:meta])* $name:ident => [$($path:tt)+];)*) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Debug)]
            pub struct $name;

            impl ToTokens for $name {
                #[inline]
                fn to_tokens(&self, tokens: &mut TokenStream) {
                    tokens.extend(quote!($($path)+));
                }
            }
        )*
    };
}

define_full_path! {
    /// `::core::any::Any`
    AnyFP => [::core::any::Any];
    /// `::core::clone::Clone`
    CloneFP => [::core::clone::Clone];
    /// `::core::default::Default`
    DefaultFP => [::core::default::Default];
    /// `::core::marker::Send`
    SendFP => [::core::marker::Send];
    /// `::core::marker::Sync`
    SyncFP => [::core::marker::Sync];
    /// `::core::option::Option`
    OptionFP => [::core::option::Option];
    /// `::core::result::Result`
    ResultFP => [::core::result::Result];
}
