//! Field specifications derived from a commander's declared shape.
//!
//! A commander describes itself through [`Introspect::shape`]: either a
//! [`Record`] listing its fields in declaration order, or [`Shape::Opaque`]
//! for anything that is not a struct-like record. [`extract`] turns the
//! exported fields of a record into [`FieldSpec`]s, which the tree stores on
//! each node.
//!
//! Shapes are normally generated by `#[derive(Introspect)]`:
//!
//! ```rust
//! use gyudon::{extract, Introspect};
//!
//! #[derive(Introspect)]
//! struct Hello {
//!     #[opt(help = "the target name")]
//!     pub name: String,
//!     greeting: String,
//! }
//!
//! let hello = Hello { name: String::new(), greeting: String::new() };
//! let specs = extract(&hello)?;
//! assert_eq!(specs.len(), 1);
//! assert_eq!(specs[0].name(), "name");
//! assert_eq!(specs[0].help(), "the target name");
//! # Ok::<(), gyudon::Error>(())
//! ```

use serde::Serialize;

use crate::commander::Introspect;
use crate::error::{Error, Result};

/// What a commander declares about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A struct-like record with named fields.
    Record(Record),
    /// Anything else. Commanders with this shape cannot become tree nodes.
    Opaque { type_name: &'static str },
}

/// A struct-like record: its type name and its fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The declared type name, before lower-casing.
    pub name: String,
    /// Declared fields, exported or not.
    pub fields: Vec<FieldDecl>,
}

impl Record {
    /// Creates a record with the given type name and fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Appends a field declaration.
    pub fn field(mut self, decl: FieldDecl) -> Self {
        self.fields.push(decl);
        self
    }
}

/// One declared field of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: String,
    /// Whether the field is visible outside its type (`pub`).
    pub exported: bool,
    pub help: Option<String>,
    pub default: Option<String>,
}

impl FieldDecl {
    /// Declares a field with the given visibility and no metadata.
    pub fn new(name: impl Into<String>, exported: bool) -> Self {
        Self {
            name: name.into(),
            exported,
            help: None,
            default: None,
        }
    }

    /// Declares an exported field.
    pub fn exported(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Declares a field that is not exported. Extraction skips it.
    pub fn private(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Sets the `help` annotation.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Sets the `default` annotation.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Specification of one exported commander field.
///
/// The `default` annotation is carried for collaborators that bind flags.
/// Nothing in this crate applies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    name: String,
    help: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
}

impl FieldSpec {
    /// The declared field name. Never empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `help` annotation, or an empty string.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The `default` annotation, if declared.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Returns true if `token` names this field as a flag.
    ///
    /// Leading dashes are stripped from the token, which must then equal the
    /// lower-cased field name: `--name`, `-name` and `name` all match a field
    /// declared as `Name`.
    pub fn matches_flag(&self, token: &str) -> bool {
        token.trim_start_matches('-') == self.name.to_lowercase()
    }
}

/// Derives the field specifications of a commander.
///
/// Fields are visited in declaration order and only exported ones produce a
/// spec. Fails with [`Error::InvalidCommander`] if the commander is not a
/// struct-like record, and with [`Error::EmptyFieldName`] if an exported field
/// has no name.
pub fn extract<C>(commander: &C) -> Result<Vec<FieldSpec>>
where
    C: Introspect + ?Sized,
{
    describe(commander).map(|(_, specs)| specs)
}

/// Returns the record type name of a commander alongside its specs.
pub(crate) fn describe<C>(commander: &C) -> Result<(String, Vec<FieldSpec>)>
where
    C: Introspect + ?Sized,
{
    let record = match commander.shape() {
        Shape::Record(record) => record,
        Shape::Opaque { type_name } => return Err(Error::invalid_commander(type_name)),
    };
    if record.name.is_empty() {
        return Err(Error::invalid_commander(record.name));
    }

    let mut specs = Vec::new();
    for decl in record.fields.into_iter().filter(|decl| decl.exported) {
        if decl.name.is_empty() {
            return Err(Error::EmptyFieldName {
                commander: record.name,
            });
        }
        specs.push(FieldSpec {
            name: decl.name,
            help: decl.help.unwrap_or_default(),
            default: decl.default,
        });
    }

    Ok((record.name, specs))
}
