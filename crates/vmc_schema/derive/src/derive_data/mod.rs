//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod constructable_derive;
mod discovery;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, Initializer, TypeAttributes};
pub(crate) use constructable_derive::{ConstructableDerive, Validation};
pub(crate) use discovery::{DiscoveredField, discover_fields};
