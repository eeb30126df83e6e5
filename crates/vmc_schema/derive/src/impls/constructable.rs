use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use vmc_macro_utils::full_path::{DefaultFP, ResultFP};

use super::member::CONSTRUCTOR_NAME;
use super::value_code::{from_value_fn, to_value_fn, type_info_expr};
use crate::derive_data::{ConstructableDerive, Initializer};
use crate::utils::field_name;

/// Generate the `Constructable` implementation.
pub(crate) fn impl_trait_constructable(derive: &ConstructableDerive) -> TokenStream {
    let vmc_schema_path = derive.vmc_schema_path();
    let constructable_ = crate::path::constructable_(vmc_schema_path);
    let field_descriptor_ = crate::path::field_descriptor_(vmc_schema_path);
    let value_map_ = crate::path::value_map_(vmc_schema_path);
    let value_error_ = crate::path::value_error_(vmc_schema_path);

    let ident = derive.ident();
    let generics = derive.bounded_generics();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let make_default = get_make_default_tokens(derive);
    let field_descriptors = get_field_descriptors_tokens(derive);
    let snapshot = get_snapshot_tokens(derive);
    let try_reconstruct = get_try_reconstruct_tokens(derive);

    quote! {
        impl #impl_generics #constructable_ for #ident #ty_generics #where_clause {
            #[inline]
            fn make_default() -> Self {
                #make_default
            }

            fn field_descriptors() -> &'static [#field_descriptor_] {
                #field_descriptors
            }

            fn snapshot(&self) -> #value_map_ {
                #snapshot
            }

            fn try_reconstruct(__values: &#value_map_) -> #ResultFP<Self, #value_error_> {
                #try_reconstruct
            }
        }
    }
}

fn get_make_default_tokens(derive: &ConstructableDerive) -> TokenStream {
    match &derive.attrs().init {
        Some(Initializer::Function { path, .. })
            if path.leading_colon.is_none() && path.segments.len() == 1 =>
        {
            quote!(Self::#path())
        }
        Some(Initializer::Function { path, .. }) => quote!(#path()),
        // Validation guarantees an initializer.
        Some(Initializer::Default(_)) | None => quote!(<Self as #DefaultFP>::default()),
    }
}

fn get_field_descriptors_tokens(derive: &ConstructableDerive) -> TokenStream {
    let vmc_schema_path = derive.vmc_schema_path();
    let field_descriptor_ = crate::path::field_descriptor_(vmc_schema_path);
    let exports_ = crate::path::macro_exports_(vmc_schema_path);

    let descriptors = derive.fields().iter().map(|field| {
        let name = field_name(field.ident);
        let type_info = type_info_expr(&field.classified(), vmc_schema_path);
        let is_optional = field.is_optional;
        quote!(#field_descriptor_::new(#name, #type_info, #is_optional))
    });

    let build = quote! {
        || #exports_::Vec::<#field_descriptor_>::from([#(#descriptors),*])
    };

    if derive.is_generic() {
        let cell_ = crate::path::generic_schema_cell_(vmc_schema_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_insert::<Self>(#build)
        }
    } else {
        let cell_ = crate::path::non_generic_schema_cell_(vmc_schema_path);
        quote! {
            static CELL: #cell_ = #cell_::new();
            CELL.get_or_init(#build)
        }
    }
}

fn get_snapshot_tokens(derive: &ConstructableDerive) -> TokenStream {
    let vmc_schema_path = derive.vmc_schema_path();
    let value_map_ = crate::path::value_map_(vmc_schema_path);

    let len = derive.fields().len();
    if len == 0 {
        return quote!(#value_map_::new());
    }

    let inserts = derive.fields().iter().map(|field| {
        let ident = field.ident;
        let name = field_name(ident);
        let to_value = to_value_fn(&field.classified(), vmc_schema_path);
        quote! {
            __values.insert(#name, (#to_value)(&self.#ident));
        }
    });

    quote! {
        let mut __values = #value_map_::with_capacity(#len);
        #(#inserts)*
        __values
    }
}

fn get_try_reconstruct_tokens(derive: &ConstructableDerive) -> TokenStream {
    let vmc_schema_path = derive.vmc_schema_path();
    let exports_ = crate::path::macro_exports_(vmc_schema_path);
    let constructor = format_ident!("{CONSTRUCTOR_NAME}");

    let args = derive.fields().iter().map(|field| {
        let name = field_name(field.ident);
        match field.classified() {
            crate::classify::Classified::Optional { inner, .. } => {
                let from_value = from_value_fn(&inner, vmc_schema_path);
                quote!(#exports_::read_optional(__values, #name, #from_value))
            }
            classified => {
                let from_value = from_value_fn(&classified, vmc_schema_path);
                quote!(#exports_::read_required(__values, #name, #from_value)?)
            }
        }
    });

    quote! {
        #ResultFP::Ok(Self::#constructor(#(#args),*))
    }
}
