//! Containers for static storage of field descriptors.
//!
//! `Constructable::field_descriptors` returns a `&'static` slice, so the
//! descriptors are built once and kept in a `static` inside the function.
//!
//! For generic aggregates that `static` is shared by every instantiation,
//! so [`GenericSchemaCell`] keys its entries by [`TypeId`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::hash::{FixedHashState, TypeIdMap};
use crate::info::FieldDescriptor;

/// Static storage of the descriptors of a non-generic aggregate.
///
/// ## Example
///
/// ```
/// use vmc_schema::impls::NonGenericSchemaCell;
/// use vmc_schema::info::{FieldDescriptor, TypeInfo};
///
/// fn descriptors() -> &'static [FieldDescriptor] {
///     static CELL: NonGenericSchemaCell = NonGenericSchemaCell::new();
///     CELL.get_or_init(|| vec![FieldDescriptor::from_type_info("x", TypeInfo::Double)])
/// }
///
/// assert_eq!(descriptors()[0].name(), "x");
/// assert!(core::ptr::eq(descriptors(), descriptors()));
/// ```
pub struct NonGenericSchemaCell(OnceLock<Box<[FieldDescriptor]>>);

impl NonGenericSchemaCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored descriptors, building them on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> Vec<FieldDescriptor>) -> &[FieldDescriptor] {
        self.0.get_or_init(|| f().into_boxed_slice())
    }
}

/// Static storage of the descriptors of a generic aggregate, one entry per
/// instantiation.
///
/// Entries are leaked; there is one per instantiated type.
///
/// ## Example
///
/// ```
/// use core::marker::PhantomData;
/// use vmc_schema::impls::GenericSchemaCell;
/// use vmc_schema::info::{FieldDescriptor, TypeInfo};
///
/// struct Wrapper<T>(PhantomData<T>);
///
/// impl<T: 'static> Wrapper<T> {
///     fn descriptors() -> &'static [FieldDescriptor] {
///         static CELL: GenericSchemaCell = GenericSchemaCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             vec![FieldDescriptor::from_type_info(core::any::type_name::<T>(), TypeInfo::Int)]
///         })
///     }
/// }
///
/// assert_eq!(Wrapper::<u8>::descriptors()[0].name(), "u8");
/// assert_eq!(Wrapper::<i64>::descriptors()[0].name(), "i64");
/// ```
pub struct GenericSchemaCell(RwLock<TypeIdMap<&'static [FieldDescriptor]>>);

impl GenericSchemaCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::with_hasher(FixedHashState)))
    }

    /// Returns the descriptors stored for `G`, building them on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(
        &self,
        f: impl FnOnce() -> Vec<FieldDescriptor>,
    ) -> &'static [FieldDescriptor] {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), || f().into_boxed_slice())
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> Box<[FieldDescriptor]>,
    ) -> &'static [FieldDescriptor] {
        match self.get_by_type_id(type_id) {
            Some(fields) => fields,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static [FieldDescriptor]> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // The builder runs outside the lock; if two threads race, the first
    // inserted entry wins and the other allocation is dropped.
    #[inline(never)]
    fn insert_by_type_id(
        &self,
        type_id: TypeId,
        fields: Box<[FieldDescriptor]>,
    ) -> &'static [FieldDescriptor] {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| &*Box::leak(fields))
    }
}
