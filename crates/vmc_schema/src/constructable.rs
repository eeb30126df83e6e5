use crate::info::FieldDescriptor;
use crate::value::{ValueError, ValueMap};

/// The capability contract of a schema-bearing aggregate.
///
/// Usually implemented by `#[derive(Constructable)]`; generic code such as
/// [`SchemaRegistry`](crate::registry::SchemaRegistry) or
/// [`ConstructorStore`](crate::registry::ConstructorStore) depends on this
/// trait only, never on concrete aggregate types.
///
/// # Contract
///
/// - `field_descriptors` lists every stored data field once, in declaration order.
/// - The keys of `snapshot(&make_default())` are exactly the descriptor names.
/// - `reconstruct(&snapshot(&v))` equals `v`.
///
/// # Examples
///
/// ```
/// use vmc_schema::{Constructable, derive::Constructable};
/// use vmc_schema::info::TypeInfo;
///
/// #[derive(Constructable, Clone, Debug, PartialEq)]
/// #[constructable(init = new)]
/// struct Account {
///     name: String,
///     age: i32,
///     active: bool,
/// }
///
/// impl Account {
///     fn new() -> Self {
///         Self { name: String::new(), age: 0, active: false }
///     }
/// }
///
/// let fields = Account::field_descriptors();
/// let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
/// assert_eq!(names, ["name", "age", "active"]);
/// assert_eq!(fields[1].type_info(), &TypeInfo::Int);
///
/// let mut values = Account::default_values();
/// values.insert("active", true);
/// let account = Account::reconstruct(&values);
/// assert!(account.active);
/// assert_eq!(account.snapshot(), values);
/// ```
///
/// # Rejections
///
/// The derive requires a zero-argument initializer:
///
/// ```compile_fail
/// use vmc_schema::derive::Constructable;
///
/// #[derive(Constructable)]
/// struct Point { x: f64, y: f64 }
/// ```
///
/// An initializer that takes arguments does not qualify:
///
/// ```compile_fail
/// use vmc_schema::derive::Constructable;
///
/// #[derive(Constructable)]
/// #[constructable(init = at(1.0))]
/// struct Point { x: f64, y: f64 }
///
/// impl Point {
///     fn at(x: f64) -> Self { Self { x, y: 0.0 } }
/// }
/// ```
///
/// Only structs are aggregates:
///
/// ```compile_fail
/// use vmc_schema::derive::Constructable;
///
/// #[derive(Constructable, Default)]
/// #[constructable(default)]
/// enum Mode { #[default] Light, Dark }
/// ```
pub trait Constructable: Sized + 'static {
    /// Creates the canonical default instance through the declared
    /// zero-argument initializer.
    fn make_default() -> Self;

    /// The ordered schema of this type, built once per process.
    fn field_descriptors() -> &'static [FieldDescriptor];

    /// Returns a name-to-value view of `self`.
    ///
    /// Optional fields are stored as explicit [`Value::Optional`], so an
    /// empty field is still present as a key.
    ///
    /// [`Value::Optional`]: crate::value::Value::Optional
    fn snapshot(&self) -> ValueMap;

    /// Rebuilds an instance from `values`.
    ///
    /// Optional fields fall back to `None` when their entry is missing or
    /// has the wrong shape. Required fields must be present and well-shaped.
    fn try_reconstruct(values: &ValueMap) -> Result<Self, ValueError>;

    /// Rebuilds an instance from `values`.
    ///
    /// # Panics
    ///
    /// If a required field is missing or has the wrong shape. That means the
    /// container no longer matches the schema it was produced from.
    #[track_caller]
    fn reconstruct(values: &ValueMap) -> Self {
        match Self::try_reconstruct(values) {
            Ok(value) => value,
            Err(err) => panic!(
                "cannot reconstruct `{}`: {err}",
                core::any::type_name::<Self>()
            ),
        }
    }

    /// Snapshot of [`make_default`](Self::make_default).
    fn default_values() -> ValueMap {
        Self::make_default().snapshot()
    }
}

/// A fieldless enumeration with named cases.
///
/// Usually implemented by `#[derive(Cases)]`, which also implements
/// [`FieldValue`](crate::FieldValue) storing the case name.
///
/// # Examples
///
/// ```
/// use vmc_schema::{Cases, FieldValue, derive::Cases};
/// use vmc_schema::value::Value;
///
/// #[derive(Cases, Clone, Copy, Debug, PartialEq)]
/// enum Level { Low, High }
///
/// assert_eq!(Level::CASES, ["Low", "High"]);
/// assert_eq!(Level::High.case_name(), "High");
/// assert_eq!(Level::from_case_name("Low"), Some(Level::Low));
/// assert_eq!(Level::High.to_value(), Value::Enum("High".into()));
/// assert!(Level::from_value(&Value::Enum("Mid".into())).is_err());
/// ```
///
/// Cases carry no data:
///
/// ```compile_fail
/// use vmc_schema::derive::Cases;
///
/// #[derive(Cases, Clone, Copy)]
/// enum Shape { Circle(f32), Square(f32) }
/// ```
pub trait Cases: Copy + 'static {
    /// Case names in declaration order.
    const CASES: &'static [&'static str];

    fn case_name(&self) -> &'static str;

    fn from_case_name(name: &str) -> Option<Self>;
}
