//! Attribute parsing for the Introspect derive macro.
//!
//! Fields take `#[opt(help = "...", default = "...")]`. Both keys are
//! optional; nothing else is accepted.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Expr, ExprLit, Lit, Meta, MetaNameValue, Result, Token,
};

/// Field-level attributes from `#[opt(...)]`.
#[derive(Debug, Clone)]
pub struct OptAttr {
    /// Help text for the field.
    pub help: Option<String>,
    /// Declared default value, carried verbatim.
    pub default: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for OptAttr {
    fn default() -> Self {
        OptAttr {
            help: None,
            default: None,
            span: Span::call_site(),
        }
    }
}

impl OptAttr {
    fn merge(&mut self, other: OptAttr) -> Result<()> {
        if let Some(help) = other.help {
            if self.help.replace(help).is_some() {
                return Err(Error::new(other.span, "duplicate `help` attribute"));
            }
        }
        if let Some(default) = other.default {
            if self.default.replace(default).is_some() {
                return Err(Error::new(other.span, "duplicate `default` attribute"));
            }
        }
        Ok(())
    }
}

fn string_value(nv: &MetaNameValue, key: &str) -> Result<String> {
    match &nv.value {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.value()),
        other => Err(Error::new(
            other.span(),
            format!("{key} must be a string literal"),
        )),
    }
}

impl Parse for OptAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = OptAttr {
            span: input.span(),
            ..OptAttr::default()
        };

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            let Meta::NameValue(nv) = &meta else {
                return Err(Error::new(
                    meta.span(),
                    "unknown opt attribute. Expected: help = \"...\" or default = \"...\"",
                ));
            };

            let parsed = if nv.path.is_ident("help") {
                OptAttr {
                    help: Some(string_value(nv, "help")?),
                    span: nv.path.span(),
                    ..OptAttr::default()
                }
            } else if nv.path.is_ident("default") {
                OptAttr {
                    default: Some(string_value(nv, "default")?),
                    span: nv.path.span(),
                    ..OptAttr::default()
                }
            } else {
                return Err(Error::new(
                    nv.path.span(),
                    "unknown attribute. Expected: help or default",
                ));
            };
            attr.merge(parsed)?;
        }

        Ok(attr)
    }
}

/// Collects every `#[opt(...)]` attribute on a field into one.
pub fn parse_opt_attrs(attrs: &[Attribute]) -> Result<OptAttr> {
    let mut merged = OptAttr::default();
    for attr in attrs {
        if attr.path().is_ident("opt") {
            merged.merge(attr.parse_args::<OptAttr>()?)?;
        }
    }
    Ok(merged)
}
