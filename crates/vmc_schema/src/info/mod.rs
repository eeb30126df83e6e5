//! The semantic type model of schema-bearing aggregates.
//!
//! ## Menu
//!
//! - [`TypeInfo`]: A closed recursive enum describing the semantic type of a field.
//!     - Base types: `String`, `Int`, `Double`, `Float`, `Bool`, `Date`, `Color`.
//!     - [`EnumInfo`]: A [`Cases`] enumeration, its type name and ordered case names.
//!     - Containers: `Optional`, `Array`, `Map`, `Set`, each wrapping element `TypeInfo`s.
//!     - [`SchemaRef`]: A reference to another [`Constructable`] type, resolved lazily.
//!     - [`CustomType`]: An opaque type the model does not understand.
//!
//! - [`TypeKind`]: A fieldless discriminator of `TypeInfo`.
//!
//! - [`FieldDescriptor`]: A field name, its `TypeInfo` and its optionality.
//!
//! [`Cases`]: crate::Cases
//! [`Constructable`]: crate::Constructable

// -----------------------------------------------------------------------------
// Modules

mod field_descriptor;
mod type_info;
mod type_ref;

// -----------------------------------------------------------------------------
// Exports

pub use field_descriptor::FieldDescriptor;
pub use type_info::{TypeInfo, TypeKind, TypeKindError};
pub use type_ref::{CustomType, EnumInfo, SchemaRef};
