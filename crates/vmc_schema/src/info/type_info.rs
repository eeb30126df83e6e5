use alloc::boxed::Box;
use core::{error, fmt};

use crate::info::{CustomType, EnumInfo, SchemaRef};

// -----------------------------------------------------------------------------
// TypeKind

/// An enumeration of the "kinds" of a [`TypeInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
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

impl fmt::Display for TypeKind {
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

/// Error returned when a [`TypeInfo`] is not the expected [`TypeKind`].
#[derive(Debug)]
pub struct TypeKindError {
    pub expected: TypeKind,
    pub received: TypeKind,
}

impl fmt::Display for TypeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for TypeKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// The semantic type of a field.
///
/// Every declared field type reduces to exactly one variant; anything the
/// model does not understand is [`Custom`](TypeInfo::Custom). Containers own
/// their element descriptions, so the tree is finite. Recursion between
/// aggregates goes through [`SchemaRef`], which only names the other type.
///
/// Equality is structural, `Nested`, `Enum` and `Custom` leaves compare by
/// type identity.
///
/// # Examples
///
/// ```
/// use vmc_schema::info::{TypeInfo, TypeKind};
///
/// let info = TypeInfo::optional(TypeInfo::array(TypeInfo::String));
///
/// assert!(info.is_optional());
/// assert_eq!(info.kind(), TypeKind::Optional);
/// assert_eq!(info.unwrap_optional().as_array().unwrap(), &TypeInfo::String);
/// assert!(info.as_map().is_err());
/// assert_eq!(info.to_string(), "Optional<Array<String>>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeInfo {
    String,
    Int,
    Double,
    Float,
    Bool,
    Date,
    Color,
    Enum(EnumInfo),
    Optional(Box<TypeInfo>),
    Array(Box<TypeInfo>),
    Map {
        key: Box<TypeInfo>,
        value: Box<TypeInfo>,
    },
    Set(Box<TypeInfo>),
    Nested(SchemaRef),
    Custom(CustomType),
}

// Helper macro that implements type-safe accessor methods like `as_array`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ty) => {
        #[doc = concat!("Returns the payload of a [`TypeInfo::", stringify!($kind), "`].")]
        pub fn $name(&self) -> Result<&$info, TypeKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(TypeKindError {
                    expected: TypeKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_optional: Optional => TypeInfo);
    impl_cast_method!(as_array: Array => TypeInfo);
    impl_cast_method!(as_set: Set => TypeInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_nested: Nested => SchemaRef);
    impl_cast_method!(as_custom: Custom => CustomType);

    /// Returns the key and value of a [`TypeInfo::Map`].
    pub fn as_map(&self) -> Result<(&TypeInfo, &TypeInfo), TypeKindError> {
        match self {
            Self::Map { key, value } => Ok((key, value)),
            _ => Err(TypeKindError {
                expected: TypeKind::Map,
                received: self.kind(),
            }),
        }
    }

    #[inline]
    pub fn optional(inner: TypeInfo) -> Self {
        Self::Optional(Box::new(inner))
    }

    #[inline]
    pub fn array(element: TypeInfo) -> Self {
        Self::Array(Box::new(element))
    }

    #[inline]
    pub fn map(key: TypeInfo, value: TypeInfo) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    #[inline]
    pub fn set(element: TypeInfo) -> Self {
        Self::Set(Box::new(element))
    }

    /// Returns the [`TypeKind`] for this `TypeInfo`.
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::String => TypeKind::String,
            Self::Int => TypeKind::Int,
            Self::Double => TypeKind::Double,
            Self::Float => TypeKind::Float,
            Self::Bool => TypeKind::Bool,
            Self::Date => TypeKind::Date,
            Self::Color => TypeKind::Color,
            Self::Enum(_) => TypeKind::Enum,
            Self::Optional(_) => TypeKind::Optional,
            Self::Array(_) => TypeKind::Array,
            Self::Map { .. } => TypeKind::Map,
            Self::Set(_) => TypeKind::Set,
            Self::Nested(_) => TypeKind::Nested,
            Self::Custom(_) => TypeKind::Custom,
        }
    }

    /// Whether the outermost layer is [`TypeInfo::Optional`].
    #[inline]
    pub const fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Strips one outer [`TypeInfo::Optional`], returns `self` otherwise.
    pub fn unwrap_optional(&self) -> &TypeInfo {
        match self {
            Self::Optional(inner) => inner,
            _ => self,
        }
    }

    /// Whether this type or any nested element is a [`TypeInfo::Custom`].
    ///
    /// Generic editors usually cannot offer an input for such fields.
    pub fn contains_custom(&self) -> bool {
        match self {
            Self::Custom(_) => true,
            Self::Optional(inner) | Self::Array(inner) | Self::Set(inner) => inner.contains_custom(),
            Self::Map { key, value } => key.contains_custom() || value.contains_custom(),
            _ => false,
        }
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(info) => write!(f, "Enum({})", info.type_name()),
            Self::Optional(inner) => write!(f, "Optional<{inner}>"),
            Self::Array(inner) => write!(f, "Array<{inner}>"),
            Self::Map { key, value } => write!(f, "Map<{key}, {value}>"),
            Self::Set(inner) => write!(f, "Set<{inner}>"),
            Self::Nested(schema) => write!(f, "Nested({})", schema.type_name()),
            Self::Custom(custom) => write!(f, "Custom({})", custom.name()),
            _ => fmt::Display::fmt(&self.kind(), f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TypeInfo, TypeKind};
    use crate::info::CustomType;

    #[test]
    fn accessors() {
        let map = TypeInfo::map(TypeInfo::String, TypeInfo::Int);
        assert_eq!(map.as_map().unwrap(), (&TypeInfo::String, &TypeInfo::Int));

        let err = map.as_set().unwrap_err();
        assert_eq!(err.expected, TypeKind::Set);
        assert_eq!(err.received, TypeKind::Map);
        assert_eq!(
            err.to_string(),
            "type kind mismatch: expected Set, received Map"
        );
    }

    #[test]
    fn unwrap_optional_strips_one_layer() {
        let twice = TypeInfo::optional(TypeInfo::optional(TypeInfo::Bool));
        assert_eq!(twice.unwrap_optional(), &TypeInfo::optional(TypeInfo::Bool));
        assert_eq!(TypeInfo::Bool.unwrap_optional(), &TypeInfo::Bool);
    }

    #[test]
    fn custom_detection() {
        let custom = TypeInfo::Custom(CustomType::of::<(u8, u8)>("(u8, u8)"));
        assert!(TypeInfo::map(TypeInfo::String, custom.clone()).contains_custom());
        assert!(TypeInfo::optional(custom).contains_custom());
        assert!(!TypeInfo::set(TypeInfo::Int).contains_custom());
    }
}
