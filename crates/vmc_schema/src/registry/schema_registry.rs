use alloc::vec::Vec;
use core::any::type_name;

use log::{debug, trace};

use crate::hash::{FixedHashState, HashMap};
use crate::info::{EnumInfo, FieldDescriptor, SchemaRef, TypeInfo};
use crate::{Cases, Constructable};

/// A type-level index of [`Constructable`] schemas and [`Cases`] enumerations,
/// keyed by [`core::any::type_name`].
///
/// The derive macro only sees syntax, so a field of another aggregate type
/// without `#[constructable(nested)]` is described as `Custom`. Once that
/// type is registered here, [`refine`](Self::refine) upgrades the leaf.
///
/// # Examples
///
/// ```
/// use vmc_schema::derive::{Cases, Constructable};
/// use vmc_schema::info::{TypeInfo, TypeKind};
/// use vmc_schema::registry::SchemaRegistry;
/// use vmc_schema::Constructable;
///
/// #[derive(Cases, Clone, Copy, Default)]
/// enum Role { #[default] Guest, Admin }
///
/// #[derive(Constructable, Clone, Default)]
/// #[constructable(default)]
/// struct Member { name: String, role: Role }
///
/// let role = Member::field_descriptors()[1].type_info();
/// assert_eq!(role.kind(), TypeKind::Custom);
///
/// let mut registry = SchemaRegistry::new();
/// registry.register_cases::<Role>();
/// let refined = registry.refine(role);
/// assert_eq!(refined.as_enum().unwrap().cases(), ["Guest", "Admin"]);
/// ```
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, SchemaRef>,
    enums: HashMap<&'static str, EnumInfo>,
    #[cfg_attr(not(feature = "auto_register"), expect(dead_code))]
    auto_registered: bool,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub const fn new() -> Self {
        Self {
            schemas: HashMap::with_hasher(FixedHashState),
            enums: HashMap::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Registers `T` and every `Nested` / `Enum` type its schema mentions.
    ///
    /// Returns `false` if `T` was already registered.
    pub fn register<T: Constructable>(&mut self) -> bool {
        let inserted = self.register_schema(SchemaRef::of::<T>());
        if inserted {
            debug!("registered schema `{}`", type_name::<T>());
        }
        inserted
    }

    /// Registers a [`Cases`] enumeration.
    ///
    /// Returns `false` if `E` was already registered.
    pub fn register_cases<E: Cases>(&mut self) -> bool {
        let inserted = self.register_enum(EnumInfo::of::<E>());
        if inserted {
            debug!("registered enumeration `{}`", type_name::<E>());
        }
        inserted
    }

    fn register_schema(&mut self, schema: SchemaRef) -> bool {
        if self.schemas.contains_key(schema.type_name()) {
            return false;
        }
        self.schemas.insert(schema.type_name(), schema);
        for field in schema.field_descriptors() {
            self.register_dependencies(field.type_info());
        }
        true
    }

    fn register_enum(&mut self, info: EnumInfo) -> bool {
        self.enums.insert(info.type_name(), info).is_none()
    }

    fn register_dependencies(&mut self, info: &TypeInfo) {
        match info {
            TypeInfo::Nested(schema) => {
                if self.register_schema(*schema) {
                    trace!("registered dependency `{}`", schema.type_name());
                }
            }
            TypeInfo::Enum(info) => {
                if self.register_enum(*info) {
                    trace!("registered dependency `{}`", info.type_name());
                }
            }
            TypeInfo::Optional(inner) | TypeInfo::Array(inner) | TypeInfo::Set(inner) => {
                self.register_dependencies(inner);
            }
            TypeInfo::Map { key, value } => {
                self.register_dependencies(key);
                self.register_dependencies(value);
            }
            _ => {}
        }
    }

    /// Automatically registers all non-generic types annotated with
    /// `#[constructable(auto_register)]`.
    ///
    /// Repeated calls are cheap and never insert duplicates.
    ///
    /// ## Return Value
    ///
    /// `true` if automatic registration works on the current platform.
    /// Always `false` when the `auto_register` feature is disabled.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vmc_schema::{derive::Constructable, registry::SchemaRegistry};
    ///
    /// #[derive(Constructable, Clone, Default)]
    /// #[constructable(default, auto_register)]
    /// struct Settings { volume: f32 }
    ///
    /// let mut registry = SchemaRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.contains(core::any::type_name::<Settings>()));
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::__macro_exports::auto_register::__register_types(self);
                trace!(
                    "auto registration finished, {} types known",
                    self.schemas.len()
                );
            }
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[cfg(feature = "auto_register")]
    #[inline]
    pub(crate) fn mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }

    /// Whether a schema or an enumeration with this type name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name) || self.enums.contains_key(type_name)
    }

    #[inline]
    pub fn get(&self, type_name: &str) -> Option<&SchemaRef> {
        self.schemas.get(type_name)
    }

    #[inline]
    pub fn get_enum(&self, type_name: &str) -> Option<&EnumInfo> {
        self.enums.get(type_name)
    }

    /// Number of registered schemas and enumerations.
    #[inline]
    pub fn len(&self) -> usize {
        self.schemas.len() + self.enums.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates registered schemas in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaRef> {
        self.schemas.values()
    }

    /// Iterates registered enumerations in arbitrary order.
    pub fn iter_enums(&self) -> impl Iterator<Item = &EnumInfo> {
        self.enums.values()
    }

    /// Replaces every `Custom` leaf naming a registered type with its
    /// `Nested` or `Enum` description.
    pub fn refine(&self, info: &TypeInfo) -> TypeInfo {
        match info {
            TypeInfo::Custom(custom) => {
                if let Some(schema) = self.schemas.get(custom.type_name()) {
                    trace!("refined `{}` to nested schema", custom.name());
                    TypeInfo::Nested(*schema)
                } else if let Some(cases) = self.enums.get(custom.type_name()) {
                    trace!("refined `{}` to enumeration", custom.name());
                    TypeInfo::Enum(*cases)
                } else {
                    info.clone()
                }
            }
            TypeInfo::Optional(inner) => TypeInfo::optional(self.refine(inner)),
            TypeInfo::Array(inner) => TypeInfo::array(self.refine(inner)),
            TypeInfo::Set(inner) => TypeInfo::set(self.refine(inner)),
            TypeInfo::Map { key, value } => TypeInfo::map(self.refine(key), self.refine(value)),
            _ => info.clone(),
        }
    }

    /// Returns the descriptors of a registered schema with refined types.
    pub fn refined_descriptors(&self, type_name: &str) -> Option<Vec<FieldDescriptor>> {
        let schema = self.schemas.get(type_name)?;
        Some(
            schema
                .field_descriptors()
                .iter()
                .map(|field| field.with_type_info(self.refine(field.type_info())))
                .collect(),
        )
    }
}
