use core::any::type_name;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::info::FieldDescriptor;
use crate::value::ValueMap;
use crate::{Cases, Constructable};

// -----------------------------------------------------------------------------
// SchemaRef

/// A reference to the schema of another [`Constructable`] type.
///
/// Holds only function pointers, so a schema can mention itself
/// (e.g. `Vec<Self>`) without recursing while it is built.
///
/// Compares by type name.
///
/// # Examples
///
/// ```
/// use vmc_schema::{Constructable, derive::Constructable, info::SchemaRef};
///
/// #[derive(Constructable, Clone, Default)]
/// #[constructable(default)]
/// struct Point { x: f64, y: f64 }
///
/// let schema = SchemaRef::of::<Point>();
/// assert_eq!(schema.field_descriptors().len(), 2);
/// assert_eq!(schema.default_values(), Point::default_values());
/// ```
#[derive(Clone, Copy)]
pub struct SchemaRef {
    type_name: &'static str,
    field_descriptors: fn() -> &'static [FieldDescriptor],
    default_values: fn() -> ValueMap,
}

impl SchemaRef {
    /// Creates a reference to `T`'s schema.
    pub fn of<T: Constructable>() -> Self {
        Self {
            type_name: type_name::<T>(),
            field_descriptors: T::field_descriptors,
            default_values: T::default_values,
        }
    }

    /// Full type name, as [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Resolves the referenced type's descriptors.
    #[inline]
    pub fn field_descriptors(&self) -> &'static [FieldDescriptor] {
        (self.field_descriptors)()
    }

    /// Snapshot of the referenced type's default instance.
    #[inline]
    pub fn default_values(&self) -> ValueMap {
        (self.default_values)()
    }
}

impl PartialEq for SchemaRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name
    }
}

impl Eq for SchemaRef {}

impl Hash for SchemaRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_name.hash(state);
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaRef").field(&self.type_name).finish()
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// A [`Cases`] enumeration: its type name and ordered case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumInfo {
    type_name: &'static str,
    cases: &'static [&'static str],
}

impl EnumInfo {
    pub fn of<E: Cases>() -> Self {
        Self {
            type_name: type_name::<E>(),
            cases: E::CASES,
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Case names in declaration order.
    #[inline]
    pub fn cases(&self) -> &'static [&'static str] {
        self.cases
    }

    #[inline]
    pub fn contains(&self, case: &str) -> bool {
        self.cases.contains(&case)
    }
}

// -----------------------------------------------------------------------------
// CustomType

/// A type the semantic model does not understand.
///
/// `name` is the syntactic spelling picked at derive time (the last path
/// identifier, or the whole type for non-path syntax); `type_name` is
/// [`core::any::type_name`] of the real type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomType {
    name: &'static str,
    type_name: &'static str,
}

impl CustomType {
    pub fn of<T: ?Sized>(name: &'static str) -> Self {
        Self {
            name,
            type_name: type_name::<T>(),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
