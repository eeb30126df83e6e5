//! Provide some tools for proc-macro crates.

// -----------------------------------------------------------------------------
// Modules

mod manifest;

pub mod full_path;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::Manifest;
