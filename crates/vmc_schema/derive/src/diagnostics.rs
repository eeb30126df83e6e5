//! Compile-time diagnostics of `#[derive(Constructable)]`.

use core::fmt;

use proc_macro2::{Span, TokenStream};

/// The domain prefixed to every diagnostic message.
pub(crate) const DOMAIN: &str = "vmc_schema_derive";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Severity {
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DiagnosticKind {
    NotAnAggregate,
    MissingParameterlessInit,
}

impl DiagnosticKind {
    /// The stable identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::NotAnAggregate => "not_an_aggregate",
            Self::MissingParameterlessInit => "missing_parameterless_init",
        }
    }

    pub const fn severity(self) -> Severity {
        match self {
            Self::NotAnAggregate | Self::MissingParameterlessInit => Severity::Error,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::NotAnAggregate => "`Constructable` can only be derived for structs",
            Self::MissingParameterlessInit => {
                "`Constructable` requires a zero-argument initializer, \
                 add `#[constructable(default)]` or `#[constructable(init = path)]`"
            }
        }
    }
}

/// A diagnostic attached to a span of the derive input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Diagnostic {
    kind: DiagnosticKind,
    span: Span,
}

impl Diagnostic {
    #[inline]
    pub const fn new(kind: DiagnosticKind, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub const fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Renders as `compile_error!`; only errors exist.
    pub fn into_compile_error(self) -> TokenStream {
        match self.kind().severity() {
            Severity::Error => syn::Error::new(self.span, self).into_compile_error(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{DOMAIN}::{}] {}", self.kind.id(), self.kind.message())
    }
}
