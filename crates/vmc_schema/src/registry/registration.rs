use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId, type_name};
use core::fmt;

use crate::Constructable;
use crate::info::FieldDescriptor;
use crate::registry::StoreError;
use crate::value::{ValueError, ValueMap};

/// A component whose state is driven by a [`Constructable`] model.
///
/// The registry never inspects the component itself; it only creates one
/// with [`Default`] and hands it rebuilt models.
pub trait Configurable {
    type Model: Constructable;

    fn configure(&mut self, model: &Self::Model);
}

/// Index of a [`Registration`] inside its [`ComponentRegistry`].
///
/// [`ComponentRegistry`]: crate::registry::ComponentRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegistrationId(pub(crate) usize);

impl RegistrationId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type-erased operations of a component type.
#[derive(Clone, Copy)]
struct ComponentBridge {
    type_id: TypeId,
    type_name: &'static str,
    create: fn() -> Box<dyn Any + Send + Sync>,
    configure: fn(&mut dyn Any, &ValueMap) -> Result<(), StoreError>,
}

/// A type-erased bridge to one [`Constructable`] model type.
///
/// Built once from a concrete type and stored as function pointers, so
/// callers can create, snapshot and rebuild models without naming the type.
/// Models cross the bridge as `Box<dyn Any + Send + Sync>`.
#[derive(Clone)]
pub struct Registration {
    id: RegistrationId,
    name: String,
    category: &'static str,
    type_id: TypeId,
    type_name: &'static str,
    field_descriptors: fn() -> &'static [FieldDescriptor],
    create_default: fn() -> Box<dyn Any + Send + Sync>,
    snapshot: fn(&dyn Any) -> Option<ValueMap>,
    reconstruct: fn(&ValueMap) -> Result<Box<dyn Any + Send + Sync>, ValueError>,
    component: Option<ComponentBridge>,
}

impl Registration {
    pub(crate) fn of_model<M: Constructable + Send + Sync>(
        id: RegistrationId,
        category: &'static str,
    ) -> Self {
        Self {
            id,
            name: short_type_name(type_name::<M>()),
            category,
            type_id: TypeId::of::<M>(),
            type_name: type_name::<M>(),
            field_descriptors: M::field_descriptors,
            create_default: || Box::new(M::make_default()),
            snapshot: |model| model.downcast_ref::<M>().map(M::snapshot),
            reconstruct: |values| {
                M::try_reconstruct(values).map(|m| Box::new(m) as Box<dyn Any + Send + Sync>)
            },
            component: None,
        }
    }

    pub(crate) fn of_component<V>(id: RegistrationId, category: &'static str) -> Self
    where
        V: Configurable + Default + Send + Sync + 'static,
        V::Model: Send + Sync,
    {
        let mut registration = Self::of_model::<V::Model>(id, category);
        registration.name = short_type_name(type_name::<V>());
        registration.component = Some(ComponentBridge {
            type_id: TypeId::of::<V>(),
            type_name: type_name::<V>(),
            create: || Box::new(V::default()),
            configure: |component, values| {
                let component =
                    component
                        .downcast_mut::<V>()
                        .ok_or(StoreError::ComponentMismatch {
                            expected: type_name::<V>(),
                        })?;
                let model = V::Model::try_reconstruct(values)?;
                component.configure(&model);
                Ok(())
            },
        });
        registration
    }

    #[inline]
    pub fn id(&self) -> RegistrationId {
        self.id
    }

    /// Short display name without module paths: the component's name if
    /// there is one, else the model's.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case name of the category this registration belongs to.
    #[inline]
    pub fn category(&self) -> &'static str {
        self.category
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Full type name of the model.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn field_descriptors(&self) -> &'static [FieldDescriptor] {
        (self.field_descriptors)()
    }

    /// Creates the model's default instance.
    #[inline]
    pub fn create_default(&self) -> Box<dyn Any + Send + Sync> {
        (self.create_default)()
    }

    /// Snapshot of the model's default instance.
    pub fn default_values(&self) -> ValueMap {
        // `create_default` always yields the registered model type.
        (self.snapshot)(&*self.create_default()).unwrap_or_default()
    }

    /// Snapshots `model`, or `None` if it is not this registration's type.
    #[inline]
    pub fn snapshot(&self, model: &dyn Any) -> Option<ValueMap> {
        (self.snapshot)(model)
    }

    #[inline]
    pub fn reconstruct(&self, values: &ValueMap) -> Result<Box<dyn Any + Send + Sync>, ValueError> {
        (self.reconstruct)(values)
    }

    /// Whether this registration drives a [`Configurable`] component.
    #[inline]
    pub fn has_component(&self) -> bool {
        self.component.is_some()
    }

    /// Full type name of the component, if any.
    pub fn component_type_name(&self) -> Option<&'static str> {
        self.component.map(|c| c.type_name)
    }

    pub fn component_type_id(&self) -> Option<TypeId> {
        self.component.map(|c| c.type_id)
    }

    /// Creates a default component, if this registration has one.
    pub fn create_component(&self) -> Option<Box<dyn Any + Send + Sync>> {
        self.component.map(|c| (c.create)())
    }

    /// Rebuilds the model from `values` and hands it to `component`.
    pub fn configure(&self, component: &mut dyn Any, values: &ValueMap) -> Result<(), StoreError> {
        let bridge = self.component.ok_or_else(|| StoreError::NotAComponent {
            name: self.name.clone(),
        })?;
        (bridge.configure)(component, values)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("type_name", &self.type_name)
            .field("component", &self.component_type_name())
            .finish()
    }
}

/// Strips module paths from every segment of a type name.
///
/// `alloc::vec::Vec<my::Item>` becomes `Vec<Item>`.
pub(crate) fn short_type_name(full: &str) -> String {
    const fn is_delimiter(c: char) -> bool {
        matches!(c, '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*')
    }

    let mut out = String::with_capacity(full.len());
    for part in full.split_inclusive(is_delimiter) {
        let (path, delimiter) = match part.char_indices().last() {
            Some((i, c)) if is_delimiter(c) => part.split_at(i),
            _ => (part, ""),
        };
        out.push_str(path.rsplit("::").next().unwrap_or(path));
        out.push_str(delimiter);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::short_type_name;

    #[test]
    fn short_names() {
        assert_eq!(short_type_name("a::b::Foo"), "Foo");
        assert_eq!(
            short_type_name("alloc::vec::Vec<my::Item>"),
            "Vec<Item>"
        );
        assert_eq!(
            short_type_name("core::option::Option<(a::X, &b::Y)>"),
            "Option<(X, &Y)>"
        );
        assert_eq!(short_type_name("[x::Z; 3]"), "[Z; 3]");
    }
}
