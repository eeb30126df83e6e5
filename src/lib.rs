#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use vmc_schema as schema;

// Derive macros and traits live in different namespaces, so both can be
// re-exported under the same name.
pub use vmc_schema::derive::{Cases, Constructable};
pub use vmc_schema::{Cases, Constructable, FieldValue};
