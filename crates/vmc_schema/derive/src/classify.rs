//! The syntactic type classifier.
//!
//! Maps a field's declared type expression to a [`Classified`] tree, the
//! compile-time mirror of `vmc_schema::info::TypeInfo` that also keeps the
//! syntactic type of every node for code generation.
//!
//! Classification is total: anything not recognized is `Custom`. Rules, in
//! priority order:
//!
//! 1. `Option<T>` in any spelling -> `Optional(T)`.
//! 2. `[T; N]` -> `Array(T)`.
//! 3. Base types, bare or through a well-known path: `String`, the integer
//!    types, `f64`, `f32`, `bool`, `Date` / `SystemTime`, `Color` / `Rgba`.
//! 4. `Vec<T>` -> `Array(T)`, `HashMap<K, V>` / `BTreeMap<K, V>` -> `Map(K, V)`,
//!    `HashSet<T>` / `BTreeSet<T>` -> `Set(T)`, only with exactly these arities.
//! 5. Any other path -> `Custom(<last identifier>)`.
//! 6. Any other syntax -> `Custom(<token rendering>)`.

use core::fmt;

use quote::ToTokens;
use syn::{GenericArgument, Path, PathArguments, Type};

// -----------------------------------------------------------------------------
// Known paths

const OPTION_MODULES: &[&[&str]] = &[&["std", "option"], &["core", "option"]];
const STRING_MODULES: &[&[&str]] = &[&["std", "string"], &["alloc", "string"]];
const PRIMITIVE_MODULES: &[&[&str]] = &[&["std", "primitive"], &["core", "primitive"]];
const TIME_MODULES: &[&[&str]] = &[&["std", "time"]];
const SCHEMA_MODULES: &[&[&str]] = &[
    &["vmc_schema"],
    &["vmc_schema", "primitives"],
    &["vmc_core", "schema"],
    &["vmc", "schema"],
];
const VEC_MODULES: &[&[&str]] = &[&["std", "vec"], &["alloc", "vec"]];
const HASH_MODULES: &[&[&str]] = &[
    &["std", "collections"],
    &["std", "collections", "hash_map"],
    &["std", "collections", "hash_set"],
    &["hashbrown"],
];
const BTREE_MODULES: &[&[&str]] = &[
    &["std", "collections"],
    &["alloc", "collections"],
    &["std", "collections", "btree_map"],
    &["std", "collections", "btree_set"],
    &["alloc", "collections", "btree_map"],
    &["alloc", "collections", "btree_set"],
];

const INT_NAMES: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

// -----------------------------------------------------------------------------
// Classified

/// A base type with its own `TypeInfo` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BaseType {
    String,
    Int,
    Double,
    Float,
    Bool,
    Date,
    Color,
}

impl BaseType {
    /// The `TypeInfo` variant name.
    pub fn variant(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::Color => "Color",
        }
    }
}

/// The classification of one (sub)type.
#[derive(Debug, Clone)]
pub(crate) enum Classified {
    Base {
        ty: Type,
        base: BaseType,
    },
    Optional {
        ty: Type,
        inner: Box<Classified>,
    },
    Array {
        ty: Type,
        element: Box<Classified>,
        /// `[T; N]` rather than `Vec<T>`.
        fixed: bool,
    },
    Map {
        ty: Type,
        key: Box<Classified>,
        value: Box<Classified>,
    },
    Set {
        ty: Type,
        element: Box<Classified>,
    },
    Nested {
        ty: Type,
    },
    Enum {
        ty: Type,
    },
    Custom {
        ty: Type,
        name: String,
        /// Written as a path, so refinable into `Nested` / `Enum`.
        is_path: bool,
    },
}

/// What `Custom` path leaves of a field are known to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Refinement {
    Nested,
    Enum,
}

impl Classified {
    /// The syntactic type of this node.
    pub fn ty(&self) -> &Type {
        match self {
            Self::Base { ty, .. }
            | Self::Optional { ty, .. }
            | Self::Array { ty, .. }
            | Self::Map { ty, .. }
            | Self::Set { ty, .. }
            | Self::Nested { ty }
            | Self::Enum { ty }
            | Self::Custom { ty, .. } => ty,
        }
    }

    /// Whether any leaf is `Custom`, i.e. the whole type has no `FieldValue` impl.
    pub fn contains_custom(&self) -> bool {
        match self {
            Self::Custom { .. } => true,
            Self::Optional { inner: element, .. }
            | Self::Array { element, .. }
            | Self::Set { element, .. } => element.contains_custom(),
            Self::Map { key, value, .. } => key.contains_custom() || value.contains_custom(),
            Self::Base { .. } | Self::Nested { .. } | Self::Enum { .. } => false,
        }
    }

    /// Turns every `Custom` path leaf into `Nested` or `Enum`.
    pub fn refine(self, refinement: Refinement) -> Self {
        let refine = |node: Box<Classified>| Box::new(node.refine(refinement));
        match self {
            Self::Custom {
                ty, is_path: true, ..
            } => match refinement {
                Refinement::Nested => Self::Nested { ty },
                Refinement::Enum => Self::Enum { ty },
            },
            Self::Optional { ty, inner } => Self::Optional {
                ty,
                inner: refine(inner),
            },
            Self::Array { ty, element, fixed } => Self::Array {
                ty,
                element: refine(element),
                fixed,
            },
            Self::Map { ty, key, value } => Self::Map {
                ty,
                key: refine(key),
                value: refine(value),
            },
            Self::Set { ty, element } => Self::Set {
                ty,
                element: refine(element),
            },
            other => other,
        }
    }
}

/// Renders the semantic shape, ignoring the syntax.
impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base { base, .. } => f.write_str(base.variant()),
            Self::Optional { inner, .. } => write!(f, "Optional<{inner}>"),
            Self::Array { element, .. } => write!(f, "Array<{element}>"),
            Self::Map { key, value, .. } => write!(f, "Map<{key}, {value}>"),
            Self::Set { element, .. } => write!(f, "Set<{element}>"),
            Self::Nested { ty } => write!(f, "Nested({})", leaf_name(ty)),
            Self::Enum { ty } => write!(f, "Enum({})", leaf_name(ty)),
            Self::Custom { name, .. } => write!(f, "Custom({name})"),
        }
    }
}

// -----------------------------------------------------------------------------
// Syntax helpers

/// Strips invisible groups and parentheses.
fn peel(mut ty: &Type) -> &Type {
    loop {
        match ty {
            Type::Group(group) => ty = &group.elem,
            Type::Paren(paren) => ty = &paren.elem,
            _ => return ty,
        }
    }
}

/// The path of a plain path type, without `<T as Trait>::` qualification.
fn plain_path(ty: &Type) -> Option<&Path> {
    match peel(ty) {
        Type::Path(type_path) if type_path.qself.is_none() => Some(&type_path.path),
        _ => None,
    }
}

/// Whether `path` is `name` or `module::name` for one of `modules`.
///
/// Only the last segment may carry generic arguments.
fn is_known_path(path: &Path, name: &str, modules: &[&[&str]]) -> bool {
    let segments: Vec<_> = path.segments.iter().collect();
    let Some((last, prefix)) = segments.split_last() else {
        return false;
    };
    if last.ident != name || prefix.iter().any(|s| !s.arguments.is_none()) {
        return false;
    }
    if prefix.is_empty() {
        return path.leading_colon.is_none();
    }
    modules.iter().any(|module| {
        module.len() == prefix.len() && module.iter().zip(prefix).all(|(m, s)| s.ident == m)
    })
}

/// Type arguments of the last segment; lifetimes and constants are ignored.
///
/// `None` for `Fn(..)`-style arguments.
fn type_args(path: &Path) -> Option<Vec<&Type>> {
    let last = path.segments.last()?;
    match &last.arguments {
        PathArguments::None => Some(Vec::new()),
        PathArguments::AngleBracketed(args) => Some(
            args.args
                .iter()
                .filter_map(|arg| match arg {
                    GenericArgument::Type(ty) => Some(ty),
                    _ => None,
                })
                .collect(),
        ),
        PathArguments::Parenthesized(_) => None,
    }
}

/// The last identifier of a path type, or the token rendering of anything else.
fn leaf_name(ty: &Type) -> String {
    match plain_path(ty).and_then(|path| path.segments.last()) {
        Some(last) => last.ident.to_string(),
        None => ty.to_token_stream().to_string(),
    }
}

/// The inner type if `ty` is an optional wrapper in any spelling.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let path = plain_path(ty)?;
    if !is_known_path(path, "Option", OPTION_MODULES) {
        return None;
    }
    match type_args(path)?.as_slice() {
        [inner] => Some(inner),
        _ => None,
    }
}

/// Whether `ty` is a `PhantomData` marker.
pub(crate) fn is_phantom_data(ty: &Type) -> bool {
    plain_path(ty)
        .and_then(|path| path.segments.last())
        .is_some_and(|last| last.ident == "PhantomData")
}

fn base_type(path: &Path) -> Option<BaseType> {
    if !type_args(path).is_some_and(|args| args.is_empty()) {
        return None;
    }
    let name = path.segments.last()?.ident.to_string();
    let known = |modules| is_known_path(path, &name, modules);
    let base = match name.as_str() {
        "String" if known(STRING_MODULES) => BaseType::String,
        "f64" if known(PRIMITIVE_MODULES) => BaseType::Double,
        "f32" if known(PRIMITIVE_MODULES) => BaseType::Float,
        "bool" if known(PRIMITIVE_MODULES) => BaseType::Bool,
        n if INT_NAMES.contains(&n) && known(PRIMITIVE_MODULES) => BaseType::Int,
        "SystemTime" if known(TIME_MODULES) => BaseType::Date,
        "Date" if known(SCHEMA_MODULES) => BaseType::Date,
        "Color" | "Rgba" if known(SCHEMA_MODULES) => BaseType::Color,
        _ => return None,
    };
    Some(base)
}

// -----------------------------------------------------------------------------
// Classification

/// Classifies a declared type. Never fails.
pub(crate) fn classify(ty: &Type) -> Classified {
    let boxed = |inner: &Type| Box::new(classify(inner));

    // 1. optional wrapper
    if let Some(inner) = option_inner(ty) {
        return Classified::Optional {
            ty: ty.clone(),
            inner: boxed(inner),
        };
    }

    // 2. array sugar
    if let Type::Array(array) = peel(ty) {
        return Classified::Array {
            ty: ty.clone(),
            element: boxed(&array.elem),
            fixed: true,
        };
    }

    let Some(path) = plain_path(ty) else {
        // 6. non-path syntax
        return Classified::Custom {
            ty: ty.clone(),
            name: leaf_name(ty),
            is_path: false,
        };
    };

    // 3. base types
    if let Some(base) = base_type(path) {
        return Classified::Base {
            ty: ty.clone(),
            base,
        };
    }

    // 4. collections with the expected arity
    let args = type_args(path).unwrap_or_default();
    let is = |name, modules| is_known_path(path, name, modules);
    match args.as_slice() {
        [element] if is("Vec", VEC_MODULES) => {
            return Classified::Array {
                ty: ty.clone(),
                element: boxed(element),
                fixed: false,
            };
        }
        [element] if is("HashSet", HASH_MODULES) || is("BTreeSet", BTREE_MODULES) => {
            return Classified::Set {
                ty: ty.clone(),
                element: boxed(element),
            };
        }
        [key, value] if is("HashMap", HASH_MODULES) || is("BTreeMap", BTREE_MODULES) => {
            return Classified::Map {
                ty: ty.clone(),
                key: boxed(key),
                value: boxed(value),
            };
        }
        _ => {}
    }

    // 5. any other path
    Classified::Custom {
        ty: ty.clone(),
        name: leaf_name(ty),
        is_path: true,
    }
}

#[cfg(test)]
mod tests {
    use syn::{Type, parse_quote};

    use super::{Classified, Refinement, classify, is_phantom_data, option_inner};

    fn shape(ty: Type) -> String {
        classify(&ty).to_string()
    }

    #[test]
    fn base_types() {
        assert_eq!(shape(parse_quote!(String)), "String");
        assert_eq!(shape(parse_quote!(std::string::String)), "String");
        assert_eq!(shape(parse_quote!(alloc::string::String)), "String");
        for ty in [
            parse_quote!(i8),
            parse_quote!(u16),
            parse_quote!(i32),
            parse_quote!(u64),
            parse_quote!(usize),
            parse_quote!(core::primitive::i64),
        ] {
            assert_eq!(shape(ty), "Int");
        }
        assert_eq!(shape(parse_quote!(f64)), "Double");
        assert_eq!(shape(parse_quote!(f32)), "Float");
        assert_eq!(shape(parse_quote!(bool)), "Bool");
        assert_eq!(shape(parse_quote!(SystemTime)), "Date");
        assert_eq!(shape(parse_quote!(std::time::SystemTime)), "Date");
        assert_eq!(shape(parse_quote!(Date)), "Date");
        assert_eq!(shape(parse_quote!(vmc_schema::Date)), "Date");
        assert_eq!(shape(parse_quote!(Color)), "Color");
        assert_eq!(shape(parse_quote!(Rgba)), "Color");
    }

    #[test]
    fn optional_spellings_are_equivalent() {
        let expected = "Optional<String>";
        assert_eq!(shape(parse_quote!(Option<String>)), expected);
        assert_eq!(shape(parse_quote!(std::option::Option<String>)), expected);
        assert_eq!(shape(parse_quote!(core::option::Option<String>)), expected);
        assert_eq!(shape(parse_quote!(::core::option::Option<String>)), expected);
    }

    #[test]
    fn array_spellings_are_equivalent() {
        assert_eq!(shape(parse_quote!([i32; 3])), "Array<Int>");
        assert_eq!(shape(parse_quote!(Vec<i32>)), "Array<Int>");
        assert_eq!(shape(parse_quote!(alloc::vec::Vec<i32>)), "Array<Int>");
    }

    #[test]
    fn map_and_set_spellings_are_equivalent() {
        let map = "Map<String, Int>";
        assert_eq!(shape(parse_quote!(HashMap<String, i32>)), map);
        assert_eq!(shape(parse_quote!(BTreeMap<String, i32>)), map);
        assert_eq!(shape(parse_quote!(std::collections::HashMap<String, i32>)), map);
        assert_eq!(shape(parse_quote!(hashbrown::HashMap<String, i32>)), map);

        assert_eq!(shape(parse_quote!(HashSet<bool>)), "Set<Bool>");
        assert_eq!(shape(parse_quote!(std::collections::BTreeSet<bool>)), "Set<Bool>");
    }

    #[test]
    fn wrong_arity_is_custom() {
        assert_eq!(shape(parse_quote!(HashMap<K, V, S>)), "Custom(HashMap)");
        assert_eq!(shape(parse_quote!(Vec<A, B>)), "Custom(Vec)");
        assert_eq!(shape(parse_quote!(Option<A, B>)), "Custom(Option)");
        assert_eq!(shape(parse_quote!(String<u8>)), "Custom(String)");
    }

    #[test]
    fn nesting() {
        assert_eq!(
            shape(parse_quote!(Option<Vec<HashMap<String, [f32; 4]>>>)),
            "Optional<Array<Map<String, Array<Float>>>>"
        );
        assert_eq!(
            shape(parse_quote!(Option<Option<bool>>)),
            "Optional<Optional<Bool>>"
        );
    }

    #[test]
    fn unknown_types_are_custom() {
        assert_eq!(shape(parse_quote!(Address)), "Custom(Address)");
        assert_eq!(shape(parse_quote!(my::module::Address)), "Custom(Address)");
        assert_eq!(shape(parse_quote!(Box<Address>)), "Custom(Box)");
        assert_eq!(shape(parse_quote!(::my::String)), "Custom(String)");
        assert_eq!(shape(parse_quote!(char)), "Custom(char)");

        for ty in [
            parse_quote!((u8, u8)),
            parse_quote!(&'static str),
            parse_quote!(fn(u8) -> u8),
            parse_quote!(<T as Iterator>::Item),
        ] {
            let classified = classify(&ty);
            assert!(matches!(
                classified,
                Classified::Custom { is_path: false, .. }
            ));
            assert!(classified.to_string().starts_with("Custom("));
        }
    }

    #[test]
    fn refinement_touches_path_leaves_only() {
        let ty: Type = parse_quote!(Vec<Option<Address>>);
        let refined = classify(&ty).refine(Refinement::Nested);
        assert_eq!(refined.to_string(), "Array<Optional<Nested(Address)>>");
        assert!(!refined.contains_custom());

        let ty: Type = parse_quote!(HashMap<(u8, u8), Level>);
        let refined = classify(&ty).refine(Refinement::Enum);
        let Classified::Map { key, value, .. } = &refined else {
            panic!("expected a map");
        };
        assert!(matches!(**key, Classified::Custom { .. }));
        assert_eq!(value.to_string(), "Enum(Level)");
        assert!(refined.contains_custom());
    }

    #[test]
    fn syntax_is_kept() {
        let ty: Type = parse_quote!(Option<Vec<u8>>);
        let Classified::Optional { inner, .. } = classify(&ty) else {
            panic!("expected an optional");
        };
        assert_eq!(inner.ty(), &parse_quote!(Vec<u8>));
    }

    #[test]
    fn helpers() {
        assert!(option_inner(&parse_quote!(Option<u8>)).is_some());
        assert!(option_inner(&parse_quote!(my::Option<u8>)).is_none());
        assert!(is_phantom_data(&parse_quote!(PhantomData<T>)));
        assert!(is_phantom_data(&parse_quote!(core::marker::PhantomData<fn() -> T>)));
        assert!(!is_phantom_data(&parse_quote!(Vec<T>)));
    }
}
