use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::value::ValueKind;

/// An error produced when a [`Value`](crate::value::Value) does not have the
/// shape a field expects.
///
/// Only shapes are checked, never contents.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("missing value for required field")]
    MissingField,
    #[error("expected {expected} value, found {found}")]
    Mismatch {
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("expected opaque `{expected}`, found opaque `{found}`")]
    OpaqueMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("integer {value} is out of range for `{target}`")]
    OutOfRange { value: i128, target: &'static str },
    #[error("`{case}` is not a case of `{enum_name}`")]
    UnknownCase {
        case: String,
        enum_name: &'static str,
    },
    #[error("expected {expected} elements, found {found}")]
    Length { expected: usize, found: usize },
    #[error("field `{field}`: {source}")]
    InField {
        field: &'static str,
        source: Box<ValueError>,
    },
}

impl ValueError {
    #[inline]
    pub const fn mismatch(expected: ValueKind, found: ValueKind) -> Self {
        Self::Mismatch { expected, found }
    }

    /// Attaches the field name this error was found in.
    pub fn in_field(self, field: &'static str) -> Self {
        Self::InField {
            field,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping [`InField`](Self::InField) layers.
    pub fn root_cause(&self) -> &ValueError {
        match self {
            Self::InField { source, .. } => source.root_cause(),
            _ => self,
        }
    }
}
