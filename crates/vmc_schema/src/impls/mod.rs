//! Building blocks used by derived implementations.
//!
//! - [`NonGenericSchemaCell`]: schema storage for non-generic aggregates.
//! - [`GenericSchemaCell`]: schema storage keyed by instantiation.

mod cell;

pub use cell::{GenericSchemaCell, NonGenericSchemaCell};
