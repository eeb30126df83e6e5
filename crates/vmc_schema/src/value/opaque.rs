use alloc::sync::Arc;
use core::any::{Any, type_name};
use core::fmt;

/// A shared, type-erased payload stored for `Custom` fields.
///
/// Cloning shares the payload. Two opaque values are equal only if they
/// share the same payload.
///
/// # Examples
///
/// ```
/// use vmc_schema::value::OpaqueValue;
///
/// let a = OpaqueValue::new((1_u8, 2_u8));
/// assert_eq!(a.downcast_ref::<(u8, u8)>(), Some(&(1, 2)));
/// assert_eq!(a.take::<u8>(), None);
/// assert_eq!(a, a.clone());
/// assert_ne!(a, OpaqueValue::new((1_u8, 2_u8)));
/// ```
#[derive(Clone)]
pub struct OpaqueValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl OpaqueValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the payload type, as [`core::any::type_name`].
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        (*self.value).is::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }

    /// Clones the payload out if it is a `T`.
    #[inline]
    pub fn take<T: Any + Clone>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }
}

impl PartialEq for OpaqueValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.type_name).finish()
    }
}
