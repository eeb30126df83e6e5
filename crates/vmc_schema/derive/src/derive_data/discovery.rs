use syn::{Fields, Ident, Type};

use super::FieldAttributes;
use crate::classify::{Classified, Refinement, classify, is_phantom_data, option_inner};

/// A stored data member of the aggregate.
#[derive(Debug)]
pub(crate) struct DiscoveredField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub is_optional: bool,
    pub attrs: FieldAttributes,
}

impl DiscoveredField<'_> {
    /// The classified declared type, refined by `nested` / `cases`.
    pub fn classified(&self) -> Classified {
        let classified = classify(self.ty);
        if self.attrs.nested.is_some() {
            classified.refine(Refinement::Nested)
        } else if self.attrs.cases.is_some() {
            classified.refine(Refinement::Enum)
        } else {
            classified
        }
    }
}

/// Collects the stored data members, in declaration order.
///
/// - Only named fields qualify; positional fields have no name to key on.
/// - `PhantomData` markers and `#[constructable(skip)]` fields are excluded.
///
/// Fails only on malformed `#[constructable(..)]` field attributes.
pub(crate) fn discover_fields(fields: &Fields) -> syn::Result<Vec<DiscoveredField<'_>>> {
    let Fields::Named(named) = fields else {
        return Ok(Vec::new());
    };

    let mut discovered = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        let Some(ident) = &field.ident else {
            continue;
        };
        if attrs.skip.is_some() || is_phantom_data(&field.ty) {
            continue;
        }
        discovered.push(DiscoveredField {
            ident,
            ty: &field.ty,
            is_optional: option_inner(&field.ty).is_some(),
            attrs,
        });
    }
    Ok(discovered)
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::discover_fields;

    #[test]
    fn stored_fields_in_order() {
        let input: DeriveInput = parse_quote! {
            struct Profile<T> {
                /// The display name.
                #[allow(unused)]
                name: String,
                nickname: Option<String>,
                #[constructable(skip)]
                cache: Vec<u8>,
                legacy: ::core::option::Option<i32>,
                marker: PhantomData<T>,
                #[constructable(nested)]
                address: Address,
            }
        };
        let syn::Data::Struct(data) = &input.data else {
            unreachable!()
        };

        let fields = discover_fields(&data.fields).unwrap();
        let names: Vec<_> = fields.iter().map(|f| f.ident.to_string()).collect();
        assert_eq!(names, ["name", "nickname", "legacy", "address"]);

        let optional: Vec<_> = fields.iter().map(|f| f.is_optional).collect();
        assert_eq!(optional, [false, true, true, false]);

        assert_eq!(fields[3].classified().to_string(), "Nested(Address)");
    }

    #[test]
    fn positional_fields_are_skipped() {
        let input: DeriveInput = parse_quote!(struct Pair(i32, i32););
        let syn::Data::Struct(data) = &input.data else {
            unreachable!()
        };
        assert!(discover_fields(&data.fields).unwrap().is_empty());
    }

    #[test]
    fn bad_field_attribute() {
        let input: DeriveInput = parse_quote! {
            struct Bad {
                #[constructable(skip, nested)]
                value: Value,
            }
        };
        let syn::Data::Struct(data) = &input.data else {
            unreachable!()
        };
        assert!(discover_fields(&data.fields).is_err());
    }
}
