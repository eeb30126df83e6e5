//! Parsing of `#[constructable(..)]` attributes.
//!
//! Type level:
//!
//! - `default`: the initializer is `Default::default()`.
//! - `init = path` / `init = path()`: the initializer is `Self::path()`,
//!   or `path()` if the path has more than one segment.
//! - `auto_register`: submit the type for `SchemaRegistry::auto_register`.
//!
//! Field level:
//!
//! - `skip`: not schema data, filled from the default instance.
//! - `nested`: `Custom` path leaves of this field are `Constructable` aggregates.
//! - `cases`: `Custom` path leaves of this field are `Cases` enumerations.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprCall, ExprPath, Path};

use crate::CONSTRUCTABLE_ATTRIBUTE_NAME;

/// The zero-argument initializer declared on the type.
#[derive(Debug, Clone)]
pub(crate) enum Initializer {
    /// `#[constructable(default)]`
    Default(Span),
    /// `#[constructable(init = path)]`, `path()` or `path(args..)`.
    Function { path: Path, arg_count: usize },
}

impl Initializer {
    pub fn span(&self) -> Span {
        match self {
            Self::Default(span) => *span,
            Self::Function { path, .. } => path.span(),
        }
    }

    /// Whether the initializer can be called without arguments.
    #[inline]
    pub fn is_parameterless(&self) -> bool {
        match self {
            Self::Default(_) => true,
            Self::Function { arg_count, .. } => *arg_count == 0,
        }
    }
}

/// Accepts `path`, `path()` and `path(args..)`.
fn parse_init_expr(expr: Expr) -> syn::Result<Initializer> {
    match expr {
        Expr::Path(ExprPath {
            qself: None, path, ..
        }) => Ok(Initializer::Function { path, arg_count: 0 }),
        Expr::Call(ExprCall { func, args, .. }) => match *func {
            Expr::Path(ExprPath {
                qself: None, path, ..
            }) => Ok(Initializer::Function {
                path,
                arg_count: args.len(),
            }),
            other => Err(syn::Error::new(other.span(), "expected a function path")),
        },
        other => Err(syn::Error::new(
            other.span(),
            "expected `init = path` or `init = path()`",
        )),
    }
}

#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    pub init: Option<Initializer>,
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    /// Parse all `#[constructable(..)]` attributes of the type.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(CONSTRUCTABLE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("default") {
                        this.set_init(Initializer::Default(meta.path.span()), meta.path.span())
                    } else if meta.path.is_ident("init") {
                        let init = parse_init_expr(meta.value()?.parse()?)?;
                        this.set_init(init, meta.path.span())
                    } else if meta.path.is_ident("auto_register") {
                        this.auto_register = Some(meta.path.span());
                        Ok(())
                    } else {
                        Err(meta.error(
                            "unsupported type attribute, expected `default`, `init` or `auto_register`",
                        ))
                    }
                })?;
            }
        }
        Ok(this)
    }

    fn set_init(&mut self, init: Initializer, span: Span) -> syn::Result<()> {
        if self.init.is_some() {
            return Err(syn::Error::new(span, "conflicting initializers, declare only one"));
        }
        self.init = Some(init);
        Ok(())
    }
}

#[derive(Default, Debug)]
pub(crate) struct FieldAttributes {
    pub skip: Option<Span>,
    pub nested: Option<Span>,
    pub cases: Option<Span>,
}

impl FieldAttributes {
    /// Parse all `#[constructable(..)]` attributes of a field.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(CONSTRUCTABLE_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    let slot = if meta.path.is_ident("skip") {
                        &mut this.skip
                    } else if meta.path.is_ident("nested") {
                        &mut this.nested
                    } else if meta.path.is_ident("cases") {
                        &mut this.cases
                    } else {
                        return Err(meta.error(
                            "unsupported field attribute, expected `skip`, `nested` or `cases`",
                        ));
                    };
                    *slot = Some(meta.path.span());
                    Ok(())
                })?;
            }
        }
        this.validity()?;
        Ok(this)
    }

    fn validity(&self) -> syn::Result<()> {
        if let (Some(_), Some(span)) = (self.nested, self.cases) {
            return Err(syn::Error::new(span, "`nested` and `cases` are exclusive"));
        }
        if let (Some(span), true) = (self.skip, self.nested.is_some() || self.cases.is_some()) {
            return Err(syn::Error::new(span, "a skipped field has no schema to refine"));
        }
        Ok(())
    }
}
