#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `::vmc_schema`, both from the crate
// itself and from its doctests.
extern crate self as vmc_schema;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod constructable;

pub mod hash;
pub mod impls;
pub mod info;
pub mod primitives;
pub mod registry;
pub mod value;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use constructable::{Cases, Constructable};
pub use primitives::{Color, Date, Rgba};
pub use value::FieldValue;
pub use vmc_schema_derive as derive;
