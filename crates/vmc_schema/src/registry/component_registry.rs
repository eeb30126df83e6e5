use alloc::vec::Vec;
use core::any::{Any, TypeId, type_name};

use log::debug;

use crate::hash::{FixedHashState, TypeIdMap};
use crate::registry::{Configurable, Registration, RegistrationId};
use crate::{Cases, Constructable};

/// Registrations grouped by a [`Cases`] category.
///
/// Model-only registrations are keyed by the model type and component
/// registrations by the component type, so several components may share one
/// model. Registering the same key again returns the existing id.
///
/// # Examples
///
/// ```
/// use vmc_schema::derive::{Cases, Constructable};
/// use vmc_schema::registry::{ComponentRegistry, Configurable};
///
/// #[derive(Cases, Clone, Copy, Debug, PartialEq)]
/// enum Category { Inputs, Display }
///
/// #[derive(Constructable, Clone, Default)]
/// #[constructable(default)]
/// struct LabelModel { text: String }
///
/// #[derive(Constructable, Clone, Default)]
/// #[constructable(default)]
/// struct SliderModel { value: f64 }
///
/// #[derive(Default)]
/// struct Label { shown: String }
///
/// impl Configurable for Label {
///     type Model = LabelModel;
///     fn configure(&mut self, model: &LabelModel) {
///         self.shown = model.text.clone();
///     }
/// }
///
/// let mut registry = ComponentRegistry::<Category>::new();
/// let label = registry.register_component::<Label>(Category::Display);
/// registry.register_model::<SliderModel>(Category::Inputs);
///
/// assert_eq!(registry.find("Label").unwrap().id(), label);
///
/// let groups = registry.categorized();
/// assert_eq!(groups[0].0, Category::Inputs);
/// assert_eq!(groups[1].1[0].name(), "Label");
/// ```
#[derive(Debug)]
pub struct ComponentRegistry<C: Cases> {
    registrations: Vec<Registration>,
    categories: Vec<C>,
    models: TypeIdMap<RegistrationId>,
    components: TypeIdMap<RegistrationId>,
}

impl<C: Cases> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cases> ComponentRegistry<C> {
    pub const fn new() -> Self {
        Self {
            registrations: Vec::new(),
            categories: Vec::new(),
            models: TypeIdMap::with_hasher(FixedHashState),
            components: TypeIdMap::with_hasher(FixedHashState),
        }
    }

    fn push(
        &mut self,
        category: C,
        f: impl FnOnce(RegistrationId) -> Registration,
    ) -> RegistrationId {
        let id = RegistrationId(self.registrations.len());
        let registration = f(id);
        debug!(
            "registered `{}` as {id} in category `{}`",
            registration.name(),
            registration.category()
        );
        self.registrations.push(registration);
        self.categories.push(category);
        id
    }

    /// Registers a model type without a component.
    pub fn register_model<M>(&mut self, category: C) -> RegistrationId
    where
        M: Constructable + Send + Sync,
    {
        if let Some(&id) = self.models.get(&TypeId::of::<M>()) {
            debug!("`{}` is already registered as {id}", type_name::<M>());
            return id;
        }
        let id = self.push(category, |id| {
            Registration::of_model::<M>(id, category.case_name())
        });
        self.models.insert(TypeId::of::<M>(), id);
        id
    }

    /// Registers a component type together with its model.
    ///
    /// Each component gets its own registration, even if its model is
    /// already registered on its own or through another component.
    pub fn register_component<V>(&mut self, category: C) -> RegistrationId
    where
        V: Configurable + Default + Send + Sync + 'static,
        V::Model: Send + Sync,
    {
        if let Some(&id) = self.components.get(&TypeId::of::<V>()) {
            debug!("`{}` is already registered as {id}", type_name::<V>());
            return id;
        }
        let id = self.push(category, |id| {
            Registration::of_component::<V>(id, category.case_name())
        });
        self.components.insert(TypeId::of::<V>(), id);
        id
    }

    #[inline]
    pub fn get(&self, id: RegistrationId) -> Option<&Registration> {
        self.registrations.get(id.0)
    }

    /// Finds a registration by its short name.
    pub fn find(&self, name: &str) -> Option<&Registration> {
        self.registrations.iter().find(|r| r.name() == name)
    }

    /// Returns the registration of `T`.
    ///
    /// `T` is looked up as a component type, then as a model-only
    /// registration, then as the model of the first component driven by it.
    pub fn id_of<T: Any>(&self) -> Option<RegistrationId> {
        let type_id = TypeId::of::<T>();
        self.components
            .get(&type_id)
            .or_else(|| self.models.get(&type_id))
            .copied()
            .or_else(|| {
                self.registrations
                    .iter()
                    .find(|r| Registration::type_id(r) == type_id)
                    .map(Registration::id)
            })
    }

    #[inline]
    pub fn category(&self, id: RegistrationId) -> Option<C> {
        self.categories.get(id.0).copied()
    }

    /// Iterates registrations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Groups registrations by category, in [`Cases::CASES`] order.
    ///
    /// Categories without registrations are left out; within a group,
    /// registrations keep their registration order.
    pub fn categorized(&self) -> Vec<(C, Vec<&Registration>)> {
        C::CASES
            .iter()
            .filter_map(|case| {
                let group: Vec<&Registration> = self
                    .registrations
                    .iter()
                    .filter(|r| r.category() == *case)
                    .collect();
                if group.is_empty() {
                    return None;
                }
                C::from_case_name(case).map(|category| (category, group))
            })
            .collect()
    }
}
