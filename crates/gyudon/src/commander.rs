//! Commander traits.
//!
//! A commander is the unit a tree node wraps. It has two faces:
//!
//! - [`Introspect`]: the declared shape the tree derives field specs from
//! - [`Commander`]: the behavior invoked with residual arguments
//!
//! Struct commanders derive `Introspect` and implement `Commander` by hand:
//!
//! ```rust
//! use gyudon::{Commander, Introspect};
//!
//! #[derive(Introspect)]
//! struct Greet {
//!     #[opt(help = "who to greet")]
//!     pub name: String,
//! }
//!
//! impl Commander for Greet {
//!     fn run(&mut self, args: &[String]) -> anyhow::Result<()> {
//!         println!("hello {}", args.first().unwrap_or(&self.name));
//!         Ok(())
//!     }
//! }
//! ```
//!
//! Commanders are single-threaded: `run` takes `&mut self`, so a commander
//! can keep state across invocations.

use std::marker::PhantomData;

use crate::spec::{FieldDecl, Record, Shape};

/// Declares the shape of a commander.
///
/// The default implementation reports the type as opaque, which the tree
/// rejects with [`Error::InvalidCommander`](crate::Error::InvalidCommander).
/// Use `#[derive(Introspect)]` on structs, or return a [`Record`] by hand.
pub trait Introspect {
    /// Returns the declared shape.
    fn shape(&self) -> Shape {
        Shape::Opaque {
            type_name: std::any::type_name::<Self>(),
        }
    }
}

/// Trait for commanders.
///
/// `run` receives whatever the tree did not consume while matching
/// subcommand names. Parsing those arguments is up to the commander.
///
/// # Example
///
/// ```rust
/// use gyudon::{Commander, FieldDecl, Introspect, Record, Shape};
///
/// struct Counter { runs: u32 }
///
/// impl Introspect for Counter {
///     fn shape(&self) -> Shape {
///         Shape::Record(Record::new("Counter", vec![FieldDecl::private("runs")]))
///     }
/// }
///
/// impl Commander for Counter {
///     fn run(&mut self, _args: &[String]) -> anyhow::Result<()> {
///         self.runs += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Commander: Introspect {
    /// Runs the command with the residual arguments.
    fn run(&mut self, args: &[String]) -> anyhow::Result<()>;
}

/// A commander backed by an `FnMut` closure.
///
/// Closures have no type name to derive a node name from, so the record name
/// is declared up front, along with any fields.
///
/// # Example
///
/// ```rust
/// use gyudon::{CommandTree, FieldDecl, FnCommander};
///
/// let root = FnCommander::new("App", |_args: &[String]| Ok::<_, anyhow::Error>(()));
/// let greet = FnCommander::new("Greet", |args: &[String]| {
///     println!("hello {}", args.join(" "));
///     Ok::<_, anyhow::Error>(())
/// })
/// .field(FieldDecl::exported("Name").help("who to greet"));
///
/// let mut tree = CommandTree::new(root)?;
/// tree.attach(tree.root(), greet)?;
/// tree.execute(tree.root(), ["app", "greet", "alice"])?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct FnCommander<F, E = anyhow::Error> {
    record: Record,
    f: F,
    _phantom: PhantomData<fn() -> E>,
}

impl<F, E> FnCommander<F, E>
where
    F: FnMut(&[String]) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    /// Creates a commander declaring a record named `name` with no fields.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            record: Record::new(name, Vec::new()),
            f,
            _phantom: PhantomData,
        }
    }

    /// Declares a field on the commander's record.
    pub fn field(mut self, decl: FieldDecl) -> Self {
        self.record.fields.push(decl);
        self
    }
}

impl<F, E> Introspect for FnCommander<F, E> {
    fn shape(&self) -> Shape {
        Shape::Record(self.record.clone())
    }
}

impl<F, E> Commander for FnCommander<F, E>
where
    F: FnMut(&[String]) -> Result<(), E>,
    E: Into<anyhow::Error>,
{
    fn run(&mut self, args: &[String]) -> anyhow::Result<()> {
        (self.f)(args).map_err(Into::into)
    }
}
