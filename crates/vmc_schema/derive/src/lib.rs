//! See following macros:
//!
//! - [`Constructable`](derive_constructable)
//! - [`Cases`](derive_cases)
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static CONSTRUCTABLE_ATTRIBUTE_NAME: &str = "constructable";

// -----------------------------------------------------------------------------
// Modules

mod classify;
mod derive_data;
mod diagnostics;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Schema Derivation
///
/// `#[derive(Constructable)]` turns a plain struct into a schema-bearing
/// aggregate. It implements:
///
/// - `Constructable`: `make_default`, `field_descriptors`, `snapshot`,
///   `try_reconstruct` (and through it `reconstruct`, `default_values`).
/// - `FieldValue`: the aggregate is stored as `Value::Nested`, so it can be a
///   field of another aggregate.
///
/// ## Initializer
///
/// Every aggregate declares its zero-argument initializer, used for
/// `make_default` and for fields excluded from the schema.
///
/// ```rust, ignore
/// #[derive(Constructable, Default)]
/// #[constructable(default)]           // `<Self as Default>::default()`
/// struct A { /* ... */ }
///
/// #[derive(Constructable)]
/// #[constructable(init = new)]        // `Self::new()`
/// struct B { /* ... */ }
///
/// #[derive(Constructable)]
/// #[constructable(init = Self::empty())] // `Self::empty()`
/// struct C { /* ... */ }
/// ```
///
/// A single identifier is resolved as an associated function of `Self`, a
/// longer path is called as written.
///
/// Without an initializer, or with one that takes arguments, the derive
/// fails with `[vmc_schema_derive::missing_parameterless_init]`:
///
/// ```rust, ignore
/// use vmc_schema::derive::Constructable;
///
/// #[derive(Constructable)]
/// struct Point { x: f64, y: f64 }
/// ```
///
/// ```rust, ignore
/// use vmc_schema::derive::Constructable;
///
/// #[derive(Constructable)]
/// #[constructable(init = at(0.0))]
/// struct Point { x: f64, y: f64 }
///
/// impl Point {
///     fn at(x: f64) -> Self { Self { x, y: 0.0 } }
/// }
/// ```
///
/// Only structs are aggregates; anything else fails with
/// `[vmc_schema_derive::not_an_aggregate]`:
///
/// ```rust, ignore
/// use vmc_schema::derive::Constructable;
///
/// #[derive(Constructable, Default)]
/// #[constructable(default)]
/// enum Mode { #[default] Light, Dark }
/// ```
///
/// ## Fields
///
/// Every named field is part of the schema, in declaration order, except
/// `PhantomData` markers and fields marked `skip`. Excluded fields are taken
/// from the default instance on reconstruction. Tuple and unit structs have
/// an empty schema.
///
/// Field types are classified by syntax:
///
/// | Declared type | `TypeInfo` |
/// |---|---|
/// | `Option<T>` (any path spelling) | `Optional(T)` |
/// | `Vec<T>`, `[T; N]` | `Array(T)` |
/// | `HashMap<K, V>`, `BTreeMap<K, V>` | `Map(K, V)` |
/// | `HashSet<T>`, `BTreeSet<T>` | `Set(T)` |
/// | `String` | `String` |
/// | integer types | `Int` |
/// | `f64` / `f32` | `Double` / `Float` |
/// | `bool` | `Bool` |
/// | `Date`, `SystemTime` | `Date` |
/// | `Color`, `Rgba` | `Color` |
/// | anything else | `Custom(name)` |
///
/// `Custom` leaves are stored as opaque values and must be
/// `Any + Clone + Send + Sync`. Mark a field `nested` when its custom leaves
/// are aggregates, or `cases` when they are `#[derive(Cases)]` enums:
///
/// ```rust, ignore
/// #[derive(Constructable, Default)]
/// #[constructable(default)]
/// struct Order {
///     #[constructable(nested)]
///     shipping: Option<Address>,     // Optional(Nested(Address))
///     #[constructable(cases)]
///     history: Vec<Status>,          // Array(Enum(Status))
///     #[constructable(skip)]
///     cache: Vec<u8>,                // not in the schema
/// }
/// ```
///
/// ## Optional fields
///
/// Optional fields never fail reconstruction: a missing entry, an empty
/// optional and a value of the wrong shape all read as `None`. Required
/// fields must be present and well-shaped.
///
/// ## Generics
///
/// Type parameters are bounded `Any + Clone + Send + Sync`. The schema is
/// built once per instantiation.
///
/// ## Auto Registration
///
/// `#[constructable(auto_register)]` submits the type for
/// `SchemaRegistry::auto_register`. It has no effect on generic types and
/// is a no-op when the `auto_register` feature is disabled.
#[proc_macro_derive(Constructable, attributes(constructable))]
pub fn derive_constructable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::derive_constructable(&ast, path::vmc_schema()).into()
}

/// # Named Cases
///
/// `#[derive(Cases)]` implements `Cases` and `FieldValue` for a fieldless
/// enum. The value of a case is its name, as `Value::Enum`.
///
/// ```rust, ignore
/// #[derive(Cases, Clone, Copy)]
/// enum Status { Pending, Shipped }
///
/// assert_eq!(Status::CASES, ["Pending", "Shipped"]);
/// ```
///
/// Enums with data are rejected:
///
/// ```rust, ignore
/// use vmc_schema::derive::Cases;
///
/// #[derive(Cases, Clone, Copy)]
/// enum Shape { Circle(f32), Square(f32) }
/// ```
#[proc_macro_derive(Cases)]
pub fn derive_cases(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match impls::impl_cases(&ast, &path::vmc_schema()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
