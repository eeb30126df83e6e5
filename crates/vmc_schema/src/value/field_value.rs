use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;
use core::any::type_name;
use core::hash::{BuildHasher, Hash};
use std::collections::{HashMap, HashSet};
use std::time::SystemTime;

use hashbrown::{HashMap as HbHashMap, HashSet as HbHashSet};

use crate::primitives::{Color, Date};
use crate::value::{Value, ValueError, ValueKind};

/// Conversion between a concrete field type and [`Value`].
///
/// Implemented for every base type, the standard containers and
/// `#[derive(Constructable)]` / `#[derive(Cases)]` types, so a field whose
/// declared type is built from those converts without extra code.
///
/// # Optional values
///
/// `Option<T>` produces an explicit [`Value::Optional`]. When reading back,
/// an empty optional is `None`, a present optional or a bare `T` value is
/// `Some`. A value of the wrong shape is an error here; fields declared as
/// `Option<_>` degrade such errors to `None` themselves.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use vmc_schema::FieldValue;
/// use vmc_schema::value::{Value, ValueError, ValueKind};
///
/// let scores = HashMap::from([("ada".to_string(), 3_u8)]);
/// let value = scores.to_value();
/// assert_eq!(HashMap::<String, u8>::from_value(&value).unwrap(), scores);
///
/// assert_eq!(Option::<i32>::from_value(&Value::Int(5)), Ok(Some(5)));
/// assert_eq!(Option::<i32>::from_value(&Value::NONE), Ok(None));
/// assert_eq!(
///     u8::from_value(&Value::Double(1.0)),
///     Err(ValueError::mismatch(ValueKind::Int, ValueKind::Double)),
/// );
/// ```
pub trait FieldValue: Sized {
    fn to_value(&self) -> Value;

    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

// -----------------------------------------------------------------------------
// Base types

macro_rules! impl_simple {
    ($ty:ty => $variant:ident) => {
        impl FieldValue for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                Value::$variant(self.to_owned())
            }

            fn from_value(value: &Value) -> Result<Self, ValueError> {
                match value {
                    Value::$variant(v) => Ok(v.to_owned()),
                    other => Err(ValueError::mismatch(ValueKind::$variant, other.kind())),
                }
            }
        }
    };
}

impl_simple!(String => String);
impl_simple!(f64 => Double);
impl_simple!(f32 => Float);
impl_simple!(bool => Bool);
impl_simple!(Date => Date);
impl_simple!(Color => Color);

macro_rules! impl_int {
    ($($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::Int(*self as i128)
                }

                fn from_value(value: &Value) -> Result<Self, ValueError> {
                    match value {
                        Value::Int(n) => <$ty>::try_from(*n).map_err(|_| ValueError::OutOfRange {
                            value: *n,
                            target: type_name::<$ty>(),
                        }),
                        other => Err(ValueError::mismatch(ValueKind::Int, other.kind())),
                    }
                }
            }
        )+
    };
}

impl_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FieldValue for SystemTime {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Date(Date::from(*self))
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        Date::from_value(value).map(Into::into)
    }
}

// -----------------------------------------------------------------------------
// Wrappers

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        Value::Optional(self.as_ref().map(|v| Box::new(v.to_value())))
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.flatten_optional().map(T::from_value).transpose()
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    #[inline]
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        T::from_value(value).map(Box::new)
    }
}

// -----------------------------------------------------------------------------
// Sequences

/// Borrows the elements of an [`Value::Array`].
fn array_items(value: &Value) -> Result<&[Value], ValueError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(ValueError::mismatch(ValueKind::Array, other.kind())),
    }
}

/// Borrows the elements of an [`Value::Set`].
fn set_items(value: &Value) -> Result<&[Value], ValueError> {
    match value {
        Value::Set(items) => Ok(items),
        other => Err(ValueError::mismatch(ValueKind::Set, other.kind())),
    }
}

/// Borrows the entries of an [`Value::Map`].
fn map_entries(value: &Value) -> Result<&[(Value, Value)], ValueError> {
    match value {
        Value::Map(entries) => Ok(entries),
        other => Err(ValueError::mismatch(ValueKind::Map, other.kind())),
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_value).collect())
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        array_items(value)?.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue, const N: usize> FieldValue for [T; N] {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(T::to_value).collect())
    }

    fn from_value(value: &Value) -> Result<Self, ValueError> {
        let items = Vec::<T>::from_value(value)?;
        let found = items.len();
        items
            .try_into()
            .map_err(|_| ValueError::Length { expected: N, found })
    }
}

macro_rules! impl_set {
    ($($set:ident <T $(, $s:ident)?> where T: $($bound:path),+ ;)+) => {
        $(
            impl<T $(, $s)?> FieldValue for $set<T $(, $s)?>
            where
                T: FieldValue $(+ $bound)+,
                $($s: BuildHasher + Default,)?
            {
                fn to_value(&self) -> Value {
                    Value::Set(self.iter().map(T::to_value).collect())
                }

                fn from_value(value: &Value) -> Result<Self, ValueError> {
                    set_items(value)?.iter().map(T::from_value).collect()
                }
            }
        )+
    };
}

macro_rules! impl_map {
    ($($map:ident <K, V $(, $s:ident)?> where K: $($bound:path),+ ;)+) => {
        $(
            impl<K, V $(, $s)?> FieldValue for $map<K, V $(, $s)?>
            where
                K: FieldValue $(+ $bound)+,
                V: FieldValue,
                $($s: BuildHasher + Default,)?
            {
                fn to_value(&self) -> Value {
                    Value::Map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
                }

                fn from_value(value: &Value) -> Result<Self, ValueError> {
                    map_entries(value)?
                        .iter()
                        .map(|(k, v)| Ok((K::from_value(k)?, V::from_value(v)?)))
                        .collect()
                }
            }
        )+
    };
}

impl_set! {
    HashSet<T, S> where T: Eq, Hash;
    HbHashSet<T, S> where T: Eq, Hash;
    BTreeSet<T> where T: Ord;
}

impl_map! {
    HashMap<K, V, S> where K: Eq, Hash;
    HbHashMap<K, V, S> where K: Eq, Hash;
    BTreeMap<K, V> where K: Ord;
}
