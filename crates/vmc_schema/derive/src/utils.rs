use proc_macro2::TokenStream;
use syn::ext::IdentExt;
use syn::{Generics, Ident, parse_quote};
use vmc_macro_utils::full_path::{AnyFP, CloneFP, SendFP, SyncFP};

/// Returns an empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// The field name as it appears in schemas, without the `r#` prefix.
#[inline]
pub(crate) fn field_name(ident: &Ident) -> String {
    ident.unraw().to_string()
}

/// Adds `Any + Clone + Send + Sync` to every type parameter.
///
/// Type parameters end up as opaque values or inside them, which need
/// all four.
pub(crate) fn with_value_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<Ident> = generics.type_params().map(|p| p.ident.clone()).collect();
    if params.is_empty() {
        return generics;
    }
    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: #AnyFP + #CloneFP + #SendFP + #SyncFP));
    }
    generics
}

#[cfg(test)]
mod tests {
    use quote::{ToTokens, format_ident};
    use syn::{Generics, parse_quote};

    use super::{field_name, with_value_bounds};

    #[test]
    fn raw_identifiers() {
        assert_eq!(field_name(&format_ident!("r#type")), "type");
        assert_eq!(field_name(&format_ident!("name")), "name");
    }

    #[test]
    fn bounds_type_params_only() {
        let generics: Generics = parse_quote!(<'a, T, const N: usize>);
        let generics = with_value_bounds(&generics);
        let where_clause = generics.where_clause.unwrap().to_token_stream().to_string();
        assert!(where_clause.starts_with("where T :"));
        assert!(!where_clause.contains("N :"));
    }
}
