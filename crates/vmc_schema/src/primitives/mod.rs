//! Base scalar types with a dedicated [`TypeInfo`](crate::info::TypeInfo) variant.
//!
//! - [`Date`]: a point in time, seconds and nanoseconds relative to the Unix epoch.
//! - [`Color`]: a linear RGBA color, also named [`Rgba`].

mod color;
mod date;

pub use color::{Color, Rgba};
pub use date::Date;
