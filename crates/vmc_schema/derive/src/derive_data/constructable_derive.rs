use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, GenericParam, Generics, Ident, Path, parse_quote};
use vmc_macro_utils::full_path::DefaultFP;

use super::{DiscoveredField, Initializer, TypeAttributes, discover_fields};
use crate::diagnostics::{Diagnostic, DiagnosticKind};

/// Outcome of validating the derive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Validation {
    /// Not a struct.
    StructuralCheckFailed,
    /// A struct without a zero-argument initializer.
    ValidatedNoInit,
    Valid,
}

/// The parsed input of `#[derive(Constructable)]`.
pub(crate) struct ConstructableDerive<'a> {
    vmc_schema_path: Path,
    ast: &'a DeriveInput,
    attrs: TypeAttributes,
    fields: Vec<DiscoveredField<'a>>,
    has_excluded: bool,
}

impl<'a> ConstructableDerive<'a> {
    pub fn new(ast: &'a DeriveInput, vmc_schema_path: Path) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
        let (fields, has_excluded) = match &ast.data {
            Data::Struct(data) => {
                let fields = discover_fields(&data.fields)?;
                let has_excluded = matches!(data.fields, Fields::Named(_))
                    && fields.len() != data.fields.len();
                (fields, has_excluded)
            }
            Data::Enum(_) | Data::Union(_) => (Vec::new(), false),
        };
        Ok(Self {
            vmc_schema_path,
            ast,
            attrs,
            fields,
            has_excluded,
        })
    }

    #[inline]
    pub fn vmc_schema_path(&self) -> &Path {
        &self.vmc_schema_path
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        &self.ast.ident
    }

    /// Generics of every generated impl.
    ///
    /// Type parameters are bounded for opaque storage; a generic type using
    /// `Default` as initializer also needs `Self: Default`.
    pub fn bounded_generics(&self) -> Generics {
        let mut generics = crate::utils::with_value_bounds(&self.ast.generics);
        if self.is_generic() && matches!(self.attrs.init, Some(Initializer::Default(_))) {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(Self: #DefaultFP));
        }
        generics
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// Stored data fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[DiscoveredField<'a>] {
        &self.fields
    }

    /// Whether some named fields are filled from the default instance.
    #[inline]
    pub fn has_excluded(&self) -> bool {
        self.has_excluded
    }

    /// Whether the fields are named, i.e. the constructor can bind them.
    pub fn is_named(&self) -> bool {
        matches!(&self.ast.data, Data::Struct(data) if matches!(data.fields, Fields::Named(_)))
    }

    /// Whether the schema has to be cached per instantiation.
    ///
    /// Lifetimes do not change a field's type identity; type and const
    /// parameters do.
    #[inline]
    pub fn is_generic(&self) -> bool {
        self.ast
            .generics
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)))
    }

    pub fn validation(&self) -> Validation {
        if !matches!(self.ast.data, Data::Struct(_)) {
            return Validation::StructuralCheckFailed;
        }
        match &self.attrs.init {
            Some(init) if init.is_parameterless() => Validation::Valid,
            _ => Validation::ValidatedNoInit,
        }
    }

    /// The diagnostic of a failed validation.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        match self.validation() {
            Validation::StructuralCheckFailed => Some(Diagnostic::new(
                DiagnosticKind::NotAnAggregate,
                self.ast.ident.span(),
            )),
            Validation::ValidatedNoInit => {
                let span = match &self.attrs.init {
                    Some(init) => init.span(),
                    None => self.ast.ident.span(),
                };
                Some(Diagnostic::new(DiagnosticKind::MissingParameterlessInit, span))
            }
            Validation::Valid => None,
        }
    }
}

impl core::fmt::Debug for ConstructableDerive<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConstructableDerive")
            .field("ident", &self.ast.ident)
            .field("attrs", &self.attrs)
            .field("fields", &self.fields)
            .field("has_excluded", &self.has_excluded)
            .field("span", &self.ast.span())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::{ConstructableDerive, Validation};
    use crate::diagnostics::DiagnosticKind;

    fn validate(input: DeriveInput) -> (Validation, Option<DiagnosticKind>) {
        let derive = ConstructableDerive::new(&input, parse_quote!(::vmc_schema)).unwrap();
        let kind = derive.diagnostic().map(|d| d.kind());
        (derive.validation(), kind)
    }

    #[test]
    fn validation_states() {
        let valid = validate(parse_quote! {
            #[constructable(default)]
            struct A { x: i32 }
        });
        assert_eq!(valid, (Validation::Valid, None));

        let valid = validate(parse_quote! {
            #[constructable(init = Self::new())]
            struct A;
        });
        assert_eq!(valid, (Validation::Valid, None));

        let no_init = validate(parse_quote! {
            struct A { x: i32 }
        });
        assert_eq!(
            no_init,
            (
                Validation::ValidatedNoInit,
                Some(DiagnosticKind::MissingParameterlessInit)
            )
        );

        let with_args = validate(parse_quote! {
            #[constructable(init = with_x(1))]
            struct A { x: i32 }
        });
        assert_eq!(with_args.0, Validation::ValidatedNoInit);

        let not_struct = validate(parse_quote! {
            #[constructable(default)]
            enum A { X }
        });
        assert_eq!(
            not_struct,
            (
                Validation::StructuralCheckFailed,
                Some(DiagnosticKind::NotAnAggregate)
            )
        );
    }

    #[test]
    fn exclusions() {
        let input: DeriveInput = parse_quote! {
            #[constructable(default)]
            struct A<T> { x: i32, marker: PhantomData<T> }
        };
        let derive = ConstructableDerive::new(&input, parse_quote!(::vmc_schema)).unwrap();
        assert!(derive.has_excluded());
        assert!(derive.is_generic());
        assert_eq!(derive.fields().len(), 1);

        let where_clause = derive.bounded_generics().where_clause.unwrap();
        let where_clause = quote::ToTokens::to_token_stream(&where_clause).to_string();
        assert!(where_clause.ends_with("Self : :: core :: default :: Default"));

        let input: DeriveInput = parse_quote! {
            #[constructable(default)]
            struct B(i32);
        };
        let derive = ConstructableDerive::new(&input, parse_quote!(::vmc_schema)).unwrap();
        assert!(!derive.has_excluded());
        assert!(!derive.is_named());
    }

    #[test]
    fn const_and_lifetime_parameters() {
        let input: DeriveInput = parse_quote! {
            #[constructable(default)]
            struct Holder<const N: usize> { tag: Tag<N> }
        };
        let derive = ConstructableDerive::new(&input, parse_quote!(::vmc_schema)).unwrap();
        assert!(derive.is_generic());

        let input: DeriveInput = parse_quote! {
            #[constructable(default)]
            struct Named<'a> { name: &'a str }
        };
        let derive = ConstructableDerive::new(&input, parse_quote!(::vmc_schema)).unwrap();
        assert!(!derive.is_generic());
    }
}
