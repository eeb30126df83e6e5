//! Items used by code generated from `#[derive(Constructable)]` and
//! `#[derive(Cases)]`. Not public API.
//!
//! Fields whose type mixes supported containers with opaque (`Custom`)
//! leaves cannot go through [`FieldValue`] as a whole, so the generated code
//! lowers them structurally with the helpers below.
//!
//! [`FieldValue`]: crate::FieldValue

use core::any::{Any, type_name};

use crate::value::{OpaqueValue, Value, ValueError, ValueKind, ValueMap};
use crate::{Cases, Constructable};

// -----------------------------------------------------------------------------
// Re-exports

pub use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Field access

/// Reads a required field, attaching the field name to any error.
pub fn read_required<T>(
    values: &ValueMap,
    field: &'static str,
    read: impl FnOnce(&Value) -> Result<T, ValueError>,
) -> Result<T, ValueError> {
    match values.get(field) {
        Some(value) => read(value).map_err(|err| err.in_field(field)),
        None => Err(ValueError::MissingField.in_field(field)),
    }
}

/// Reads the inner value of an optional field.
///
/// A missing entry, an empty optional and a value of the wrong shape all
/// read as `None`.
pub fn read_optional<T>(
    values: &ValueMap,
    field: &'static str,
    read: impl FnOnce(&Value) -> Result<T, ValueError>,
) -> Option<T> {
    let value = values.get(field)?.flatten_optional()?;
    match read(value) {
        Ok(value) => Some(value),
        Err(err) => {
            log::trace!("optional field `{field}` read as `None`: {err}");
            None
        }
    }
}

// -----------------------------------------------------------------------------
// Opaque leaves

#[inline]
pub fn opaque_to_value<T: Any + Clone + Send + Sync>(value: &T) -> Value {
    Value::Custom(OpaqueValue::new(value.clone()))
}

pub fn opaque_from_value<T: Any + Clone>(value: &Value) -> Result<T, ValueError> {
    match value {
        Value::Custom(opaque) => opaque.take::<T>().ok_or(ValueError::OpaqueMismatch {
            expected: type_name::<T>(),
            found: opaque.type_name(),
        }),
        other => Err(ValueError::mismatch(ValueKind::Custom, other.kind())),
    }
}

// -----------------------------------------------------------------------------
// Structural lowering

pub fn option_to_value<T>(value: &Option<T>, f: impl Fn(&T) -> Value) -> Value {
    Value::Optional(value.as_ref().map(|v| alloc::boxed::Box::new(f(v))))
}

pub fn option_from_value<T>(
    value: &Value,
    f: impl Fn(&Value) -> Result<T, ValueError>,
) -> Result<Option<T>, ValueError> {
    value.flatten_optional().map(f).transpose()
}

pub fn array_to_value<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    f: impl Fn(&T) -> Value,
) -> Value {
    Value::Array(items.into_iter().map(f).collect())
}

pub fn array_from_value<C, T>(
    value: &Value,
    f: impl Fn(&Value) -> Result<T, ValueError>,
) -> Result<C, ValueError>
where
    C: FromIterator<T>,
{
    match value {
        Value::Array(items) => items.iter().map(f).collect(),
        other => Err(ValueError::mismatch(ValueKind::Array, other.kind())),
    }
}

pub fn fixed_array_from_value<T, const N: usize>(
    value: &Value,
    f: impl Fn(&Value) -> Result<T, ValueError>,
) -> Result<[T; N], ValueError> {
    let items: Vec<T> = array_from_value(value, f)?;
    let found = items.len();
    items
        .try_into()
        .map_err(|_| ValueError::Length { expected: N, found })
}

pub fn set_to_value<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    f: impl Fn(&T) -> Value,
) -> Value {
    Value::Set(items.into_iter().map(f).collect())
}

pub fn set_from_value<C, T>(
    value: &Value,
    f: impl Fn(&Value) -> Result<T, ValueError>,
) -> Result<C, ValueError>
where
    C: FromIterator<T>,
{
    match value {
        Value::Set(items) => items.iter().map(f).collect(),
        other => Err(ValueError::mismatch(ValueKind::Set, other.kind())),
    }
}

pub fn map_to_value<'a, K: 'a, V: 'a>(
    entries: impl IntoIterator<Item = (&'a K, &'a V)>,
    fk: impl Fn(&K) -> Value,
    fv: impl Fn(&V) -> Value,
) -> Value {
    Value::Map(entries.into_iter().map(|(k, v)| (fk(k), fv(v))).collect())
}

pub fn map_from_value<C, K, V>(
    value: &Value,
    fk: impl Fn(&Value) -> Result<K, ValueError>,
    fv: impl Fn(&Value) -> Result<V, ValueError>,
) -> Result<C, ValueError>
where
    C: FromIterator<(K, V)>,
{
    match value {
        Value::Map(entries) => entries.iter().map(|(k, v)| Ok((fk(k)?, fv(v)?))).collect(),
        other => Err(ValueError::mismatch(ValueKind::Map, other.kind())),
    }
}

// -----------------------------------------------------------------------------
// Derived `FieldValue`

#[inline]
pub fn nested_to_value<T: Constructable>(value: &T) -> Value {
    Value::Nested(value.snapshot())
}

pub fn nested_from_value<T: Constructable>(value: &Value) -> Result<T, ValueError> {
    match value {
        Value::Nested(values) => T::try_reconstruct(values),
        other => Err(ValueError::mismatch(ValueKind::Nested, other.kind())),
    }
}

#[inline]
pub fn cases_to_value<E: Cases>(value: &E) -> Value {
    Value::Enum(value.case_name().into())
}

pub fn cases_from_value<E: Cases>(value: &Value) -> Result<E, ValueError> {
    match value {
        Value::Enum(case) => E::from_case_name(case).ok_or_else(|| ValueError::UnknownCase {
            case: case.to_string(),
            enum_name: type_name::<E>(),
        }),
        other => Err(ValueError::mismatch(ValueKind::Enum, other.kind())),
    }
}

// -----------------------------------------------------------------------------
// auto_register

/// Static registration through `inventory`.
#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::Constructable;
    use crate::registry::SchemaRegistry;

    /// A registration function submitted by a derived type.
    pub struct __AutoRegisterFunc(pub fn(&mut SchemaRegistry));

    inventory::collect!(__AutoRegisterFunc);

    pub fn __register<T: Constructable>(registry: &mut SchemaRegistry) {
        registry.register::<T>();
    }

    // Runs only if `inventory` works on this platform.
    fn __mark_available(registry: &mut SchemaRegistry) {
        registry.mark_auto_registered();
    }

    inventory::submit! { __AutoRegisterFunc(__mark_available) }

    pub fn __register_types(registry: &mut SchemaRegistry) {
        for func in inventory::iter::<__AutoRegisterFunc> {
            (func.0)(registry);
        }
    }
}
