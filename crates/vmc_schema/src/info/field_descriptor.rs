use core::fmt;

use crate::info::TypeInfo;

/// Describes one schema-bearing field of an aggregate.
///
/// `is_optional` always agrees with [`TypeInfo::is_optional`]; it is kept as
/// a separate flag because editors query it constantly.
///
/// # Examples
///
/// ```
/// use vmc_schema::info::{FieldDescriptor, TypeInfo};
///
/// let field = FieldDescriptor::from_type_info("nickname", TypeInfo::optional(TypeInfo::String));
/// assert_eq!(field.name(), "nickname");
/// assert!(field.is_optional());
/// assert_eq!(field.type_info().unwrap_optional(), &TypeInfo::String);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    type_info: TypeInfo,
    is_optional: bool,
}

impl FieldDescriptor {
    /// Creates a descriptor.
    ///
    /// # Panics
    ///
    /// In debug builds, if `is_optional` disagrees with `type_info`.
    pub fn new(name: &'static str, type_info: TypeInfo, is_optional: bool) -> Self {
        debug_assert!(!name.is_empty(), "field name must not be empty");
        debug_assert_eq!(
            is_optional,
            type_info.is_optional(),
            "optionality of field `{name}` disagrees with its type `{type_info}`",
        );
        Self {
            name,
            type_info,
            is_optional,
        }
    }

    /// Creates a descriptor, deriving optionality from `type_info`.
    #[inline]
    pub fn from_type_info(name: &'static str, type_info: TypeInfo) -> Self {
        let is_optional = type_info.is_optional();
        Self::new(name, type_info, is_optional)
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn type_info(&self) -> &TypeInfo {
        &self.type_info
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Returns the same field with a replaced type.
    ///
    /// Used when a registry refines `Custom` leaves.
    pub fn with_type_info(&self, type_info: TypeInfo) -> Self {
        Self::from_type_info(self.name, type_info)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_info)
    }
}
