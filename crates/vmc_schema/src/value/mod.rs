//! The generic value container.
//!
//! ## Menu
//!
//! - [`Value`]: A tagged union mirroring [`TypeInfo`](crate::info::TypeInfo).
//! - [`ValueKind`]: A fieldless discriminator of `Value`.
//! - [`ValueMap`]: An unordered map from field name to `Value`, the snapshot of an aggregate.
//! - [`OpaqueValue`]: A shared, type-erased payload for `Custom` fields.
//! - [`FieldValue`]: Conversion between a concrete field type and `Value`.
//! - [`ValueError`]: Why a `Value` could not be converted back.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field_value;
mod opaque;
mod value;
mod value_map;

// -----------------------------------------------------------------------------
// Exports

pub use error::ValueError;
pub use field_value::FieldValue;
pub use opaque::OpaqueValue;
pub use value::{Value, ValueKind};
pub use value_map::ValueMap;
