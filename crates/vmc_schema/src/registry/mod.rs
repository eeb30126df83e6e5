//! Registries consuming the [`Constructable`] contract at run time.
//!
//! ## Menu
//!
//! - [`SchemaRegistry`]: A type-level index of schemas and enumerations,
//!   able to refine `Custom` leaves into `Nested` / `Enum`.
//! - [`Registration`]: A type-erased bridge to one model type, and optionally
//!   the component it configures.
//! - [`Configurable`]: Implemented by components driven by a model.
//! - [`ComponentRegistry`]: Registrations grouped by a [`Cases`] category.
//! - [`ConstructorStore`]: Selection and editing state over a `ComponentRegistry`.
//!
//! ## auto_register
//!
//! See [`SchemaRegistry::auto_register`].
//!
//! We use the [`inventory`] crate to implement static registration; not all
//! platforms support it. If unsupported, `auto_register` returns `false`
//! without any other effect.
//!
//! [`Constructable`]: crate::Constructable
//! [`Cases`]: crate::Cases
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod component_registry;
mod registration;
mod schema_registry;
mod store;

// -----------------------------------------------------------------------------
// Exports

pub use component_registry::ComponentRegistry;
pub use registration::{Configurable, Registration, RegistrationId};
pub use schema_registry::SchemaRegistry;
pub use store::{ConstructorStore, StoreArc, StoreError};
