use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::Any;
use std::sync::RwLock;

use log::{debug, warn};
use thiserror::Error;

use crate::Cases;
use crate::registry::{ComponentRegistry, Registration, RegistrationId};
use crate::value::{Value, ValueError, ValueKind, ValueMap};

/// An error reported by [`ConstructorStore`] and [`Registration::configure`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no registration with id {0}")]
    UnknownRegistration(RegistrationId),
    #[error("no registration is selected")]
    NoSelection,
    #[error("`{model}` has no field named `{field}`")]
    UnknownField { model: String, field: String },
    #[error("field `{field}` of `{model}` expects {expected}, found {found} value")]
    ShapeMismatch {
        model: String,
        field: String,
        expected: String,
        found: ValueKind,
    },
    #[error("`{name}` does not drive a component")]
    NotAComponent { name: String },
    #[error("component is not a `{expected}`")]
    ComponentMismatch { expected: &'static str },
    #[error(transparent)]
    Reconstruct(#[from] ValueError),
}

/// A [`ConstructorStore`] shared between threads.
pub type StoreArc<C> = Arc<RwLock<ConstructorStore<C>>>;

/// Selection and editing state over a [`ComponentRegistry`].
///
/// Selecting a registration loads its default values; edits are checked
/// against the field descriptors (name and value shape) and the current
/// values can be rebuilt into a model or pushed into a component at any time.
///
/// The store is plain `&mut` state; share it through [`StoreArc`].
///
/// # Examples
///
/// ```
/// use vmc_schema::derive::{Cases, Constructable};
/// use vmc_schema::registry::{ComponentRegistry, ConstructorStore};
///
/// #[derive(Cases, Clone, Copy)]
/// enum Category { Text }
///
/// #[derive(Constructable, Clone, Default, Debug, PartialEq)]
/// #[constructable(default)]
/// struct Title { text: String, size: Option<u8> }
///
/// let mut registry = ComponentRegistry::new();
/// let id = registry.register_model::<Title>(Category::Text);
///
/// let mut store = ConstructorStore::new(registry);
/// store.select(Some(id)).unwrap();
/// store.set_value("text", "Hello").unwrap();
/// assert!(store.set_value("color", "red").is_err());
///
/// let title = store.build_current().unwrap().unwrap();
/// let title = title.downcast::<Title>().unwrap();
/// assert_eq!(*title, Title { text: "Hello".into(), size: None });
/// ```
#[derive(Debug)]
pub struct ConstructorStore<C: Cases> {
    registry: ComponentRegistry<C>,
    selected: Option<RegistrationId>,
    values: ValueMap,
}

impl<C: Cases> ConstructorStore<C> {
    pub fn new(registry: ComponentRegistry<C>) -> Self {
        Self {
            registry,
            selected: None,
            values: ValueMap::new(),
        }
    }

    /// Wraps the store for sharing between threads.
    pub fn into_shared(self) -> StoreArc<C> {
        Arc::new(RwLock::new(self))
    }

    #[inline]
    pub fn registry(&self) -> &ComponentRegistry<C> {
        &self.registry
    }

    /// Mutable access to the registry; existing ids stay valid.
    #[inline]
    pub fn registry_mut(&mut self) -> &mut ComponentRegistry<C> {
        &mut self.registry
    }

    #[inline]
    pub fn selected_id(&self) -> Option<RegistrationId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Registration> {
        self.selected.and_then(|id| self.registry.get(id))
    }

    /// Selects a registration and loads its default values.
    ///
    /// `None` clears the selection and the values.
    pub fn select(&mut self, id: Option<RegistrationId>) -> Result<(), StoreError> {
        let Some(id) = id else {
            debug!("selection cleared");
            self.selected = None;
            self.values.clear();
            return Ok(());
        };
        let registration = self
            .registry
            .get(id)
            .ok_or(StoreError::UnknownRegistration(id))?;
        debug!("selected `{}`", registration.name());
        self.values = registration.default_values();
        self.selected = Some(id);
        Ok(())
    }

    /// Replaces the current values with the selected model's defaults.
    pub fn reset_to_defaults(&mut self) {
        match self.selected() {
            Some(registration) => {
                debug!("reset `{}` to defaults", registration.name());
                self.values = registration.default_values();
            }
            None => self.values.clear(),
        }
    }

    #[inline]
    pub fn current_values(&self) -> &ValueMap {
        &self.values
    }

    #[inline]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Sets one field of the current values, returning the previous value.
    ///
    /// The field must exist in the selected model and `value` must fit its
    /// declared type.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, StoreError> {
        let value = value.into();
        let registration = self.selected().ok_or(StoreError::NoSelection)?;
        let Some(field) = registration
            .field_descriptors()
            .iter()
            .find(|f| f.name() == name)
        else {
            warn!("rejected edit of unknown field `{name}` on `{}`", registration.name());
            return Err(StoreError::UnknownField {
                model: registration.name().into(),
                field: name.into(),
            });
        };
        if !value.conforms_to(field.type_info()) {
            warn!(
                "rejected {} value for field `{name}` on `{}`",
                value.kind(),
                registration.name()
            );
            return Err(StoreError::ShapeMismatch {
                model: registration.name().into(),
                field: name.into(),
                expected: field.type_info().to_string(),
                found: value.kind(),
            });
        }
        Ok(self.values.insert(field.name(), value))
    }

    /// Rebuilds the selected model from the current values.
    ///
    /// `None` if nothing is selected.
    pub fn build_current(&self) -> Option<Result<Box<dyn Any + Send + Sync>, ValueError>> {
        let registration = self.selected()?;
        let result = registration.reconstruct(&self.values);
        if let Err(err) = &result {
            warn!("cannot rebuild `{}`: {err}", registration.name());
        }
        Some(result)
    }

    /// Rebuilds the selected model and hands it to `component`.
    ///
    /// `component` must be the component itself, e.g. `&mut *boxed` for a
    /// boxed component, not the box.
    pub fn configure_component(&self, component: &mut dyn Any) -> Result<(), StoreError> {
        let registration = self.selected().ok_or(StoreError::NoSelection)?;
        registration.configure(component, &self.values).inspect_err(|err| {
            warn!("cannot configure `{}`: {err}", registration.name());
        })
    }
}
