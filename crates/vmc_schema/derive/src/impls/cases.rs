use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Path};
use vmc_macro_utils::full_path::{OptionFP, ResultFP};

use crate::utils::field_name;

/// Generate `Cases` and `FieldValue` for a fieldless enum.
pub(crate) fn impl_cases(ast: &DeriveInput, vmc_schema_path: &Path) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &ast.data else {
        return Err(syn::Error::new(
            ast.ident.span(),
            "`Cases` can only be derived for enums",
        ));
    };
    if let Some(variant) = data
        .variants
        .iter()
        .find(|variant| !matches!(variant.fields, Fields::Unit))
    {
        return Err(syn::Error::new(
            variant.ident.span(),
            "`Cases` can only be derived for fieldless enums",
        ));
    }

    let cases_ = crate::path::cases_(vmc_schema_path);
    let field_value_ = crate::path::field_value_(vmc_schema_path);
    let exports_ = crate::path::macro_exports_(vmc_schema_path);
    let value_ = crate::path::value_(vmc_schema_path);
    let value_error_ = crate::path::value_error_(vmc_schema_path);
    let option_ = OptionFP;

    let ident = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let variants: Vec<_> = data.variants.iter().map(|variant| &variant.ident).collect();
    let names: Vec<_> = variants.iter().map(|ident| field_name(ident)).collect();

    Ok(quote! {
        const _: () = {
            impl #impl_generics #cases_ for #ident #ty_generics #where_clause {
                const CASES: &'static [&'static str] = &[#(#names),*];

                fn case_name(&self) -> &'static str {
                    match *self {
                        #(Self::#variants => #names,)*
                    }
                }

                fn from_case_name(__name: &str) -> #option_<Self> {
                    match __name {
                        #(#names => #option_::Some(Self::#variants),)*
                        _ => #option_::None,
                    }
                }
            }

            impl #impl_generics #field_value_ for #ident #ty_generics #where_clause {
                #[inline]
                fn to_value(&self) -> #value_ {
                    #exports_::cases_to_value(self)
                }

                #[inline]
                fn from_value(__value: &#value_) -> #ResultFP<Self, #value_error_> {
                    #exports_::cases_from_value(__value)
                }
            }
        };
    })
}
