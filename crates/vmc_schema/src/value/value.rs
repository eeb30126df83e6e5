use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::info::TypeInfo;
use crate::primitives::{Color, Date};
use crate::value::{OpaqueValue, ValueMap};

// -----------------------------------------------------------------------------
// ValueKind

/// An enumeration of the "kinds" of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Double,
    Float,
    Bool,
    Date,
    Color,
    Enum,
    Optional,
    Array,
    Map,
    Set,
    Nested,
    Custom,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Double => "Double",
            Self::Float => "Float",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::Color => "Color",
            Self::Enum => "Enum",
            Self::Optional => "Optional",
            Self::Array => "Array",
            Self::Map => "Map",
            Self::Set => "Set",
            Self::Nested => "Nested",
            Self::Custom => "Custom",
        })
    }
}

// -----------------------------------------------------------------------------
// Value

/// A type-erased field value.
///
/// Each variant corresponds to a [`TypeInfo`] variant. `Int` is wide enough
/// for every supported integer type, so integers round-trip losslessly.
///
/// `Map` and `Set` keep their entries in a `Vec` because keys can be any
/// value; equality ignores entry order.
///
/// # Examples
///
/// ```
/// use vmc_schema::value::{Value, ValueKind};
///
/// let a = Value::Set(vec![Value::from(1), Value::from(2)]);
/// let b = Value::Set(vec![Value::from(2), Value::from(1)]);
/// assert_eq!(a, b);
///
/// let nickname = Value::from(Some("Ada"));
/// assert_eq!(nickname.kind(), ValueKind::Optional);
/// assert_eq!(nickname, Value::some("Ada"));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    Int(i128),
    Double(f64),
    Float(f32),
    Bool(bool),
    Date(Date),
    Color(Color),
    Enum(Cow<'static, str>),
    Optional(Option<Box<Value>>),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    Nested(ValueMap),
    Custom(OpaqueValue),
}

impl Value {
    /// An empty [`Value::Optional`].
    pub const NONE: Self = Self::Optional(None);

    /// A present [`Value::Optional`].
    #[inline]
    pub fn some(value: impl Into<Value>) -> Self {
        Self::Optional(Some(Box::new(value.into())))
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::Double(_) => ValueKind::Double,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
            Self::Date(_) => ValueKind::Date,
            Self::Color(_) => ValueKind::Color,
            Self::Enum(_) => ValueKind::Enum,
            Self::Optional(_) => ValueKind::Optional,
            Self::Array(_) => ValueKind::Array,
            Self::Map(_) => ValueKind::Map,
            Self::Set(_) => ValueKind::Set,
            Self::Nested(_) => ValueKind::Nested,
            Self::Custom(_) => ValueKind::Custom,
        }
    }

    /// Whether this is an empty [`Value::Optional`].
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::Optional(None))
    }

    /// Strips one [`Value::Optional`] layer.
    ///
    /// Returns `None` for an empty optional and `self` for a bare value.
    pub fn flatten_optional(&self) -> Option<&Value> {
        match self {
            Self::Optional(inner) => inner.as_deref(),
            _ => Some(self),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            Self::Enum(s) => Some(&**s),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_nested(&self) -> Option<&ValueMap> {
        match self {
            Self::Nested(map) => Some(map),
            _ => None,
        }
    }

    /// Checks whether the shape of this value fits `info`.
    ///
    /// Optional types accept an empty optional, a present one or a bare
    /// value of the inner type. Nested values are checked against the
    /// referenced schema's required fields. Contents are never inspected.
    ///
    /// ```
    /// use vmc_schema::info::TypeInfo;
    /// use vmc_schema::value::Value;
    ///
    /// let info = TypeInfo::optional(TypeInfo::array(TypeInfo::Int));
    /// assert!(Value::NONE.conforms_to(&info));
    /// assert!(Value::Array(vec![Value::from(3)]).conforms_to(&info));
    /// assert!(!Value::Array(vec![Value::from("3")]).conforms_to(&info));
    /// ```
    pub fn conforms_to(&self, info: &TypeInfo) -> bool {
        match (self, info) {
            (Self::Optional(None), TypeInfo::Optional(_)) => true,
            (Self::Optional(Some(inner)), TypeInfo::Optional(ty)) => inner.conforms_to(ty),
            (_, TypeInfo::Optional(ty)) => self.conforms_to(ty),
            (Self::String(_), TypeInfo::String)
            | (Self::Int(_), TypeInfo::Int)
            | (Self::Double(_), TypeInfo::Double)
            | (Self::Float(_), TypeInfo::Float)
            | (Self::Bool(_), TypeInfo::Bool)
            | (Self::Date(_), TypeInfo::Date)
            | (Self::Color(_), TypeInfo::Color) => true,
            (Self::Enum(case), TypeInfo::Enum(info)) => info.contains(case),
            (Self::Array(items), TypeInfo::Array(ty)) | (Self::Set(items), TypeInfo::Set(ty)) => {
                items.iter().all(|item| item.conforms_to(ty))
            }
            (Self::Map(entries), TypeInfo::Map { key, value }) => entries
                .iter()
                .all(|(k, v)| k.conforms_to(key) && v.conforms_to(value)),
            (Self::Nested(map), TypeInfo::Nested(schema)) => {
                schema.field_descriptors().iter().all(|field| {
                    match map.get(field.name()) {
                        Some(value) => value.conforms_to(field.type_info()),
                        None => field.is_optional(),
                    }
                })
            }
            (Self::Custom(opaque), TypeInfo::Custom(custom)) => {
                opaque.type_name() == custom.type_name()
            }
            _ => false,
        }
    }
}

/// Compares two slices as multisets.
fn unordered_eq<T>(a: &[T], b: &[T], eq: impl Fn(&T, &T) -> bool) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    a.iter().all(|x| {
        match (0..b.len()).find(|&i| !used[i] && eq(x, &b[i])) {
            Some(i) => {
                used[i] = true;
                true
            }
            None => false,
        }
    })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (Self::Optional(a), Self::Optional(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => {
                unordered_eq(a, b, |(ka, va), (kb, vb)| ka == kb && va == vb)
            }
            (Self::Set(a), Self::Set(b)) => unordered_eq(a, b, PartialEq::eq),
            (Self::Nested(a), Self::Nested(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => a == b,
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// From

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )+
    };
}

impl_from!(String: String, &str);
impl_from!(Int: i8, i16, i32, i64, i128, u8, u16, u32, u64);
impl_from!(Double: f64);
impl_from!(Float: f32);
impl_from!(Bool: bool);
impl_from!(Date: Date);
impl_from!(Color: Color);
impl_from!(Nested: ValueMap);
impl_from!(Custom: OpaqueValue);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Self::Optional(value.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}
