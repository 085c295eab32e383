//! Command trees for CLIs.
//!
//! `gyudon` turns commander values into a tree of named subcommands, resolves
//! a raw argument vector to the deepest matching subcommand, and runs it with
//! whatever arguments were left over.
//!
//! # Features
//!
//! - **Declared fields**: each commander declares its fields, and the tree
//!   derives a [`FieldSpec`] for every exported one (`#[derive(Introspect)]`)
//! - **Command tree**: arena-backed nodes with parent links and ordered
//!   children
//! - **Resolution**: greedy longest-prefix matching of tokens against child
//!   names, first match wins
//! - **Dispatch**: exactly one commander runs per [`CommandTree::execute`],
//!   and its error comes back untouched
//! - **Outline**: serializable snapshot of names, paths and specs
//!
//! Parsing the residual arguments is left to each commander.
//!
//! # Usage
//!
//! ```rust
//! use gyudon::{CommandTree, Commander, Introspect};
//!
//! #[derive(Introspect)]
//! struct App;
//!
//! impl Commander for App {
//!     fn run(&mut self, _args: &[String]) -> anyhow::Result<()> {
//!         println!("app");
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Introspect)]
//! struct Greet {
//!     #[opt(help = "who to greet")]
//!     pub name: String,
//! }
//!
//! impl Commander for Greet {
//!     fn run(&mut self, args: &[String]) -> anyhow::Result<()> {
//!         println!("hello {}", args.join(" "));
//!         Ok(())
//!     }
//! }
//!
//! let mut tree = CommandTree::new(App)?;
//! tree.attach(tree.root(), Greet { name: String::new() })?;
//!
//! // Runs `greet` with ["alice"].
//! tree.execute(tree.root(), ["app", "greet", "alice"])?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (node construction, resolution, detected
//! flags, duplicate sibling names) and never installs a subscriber.

mod commander;
mod error;
mod outline;
mod path;
mod spec;
mod tree;

pub use commander::{Commander, FnCommander, Introspect};

pub use error::{Error, Result};

pub use outline::Outline;

pub use path::{path_to_string, string_to_path};

pub use spec::{extract, FieldDecl, FieldSpec, Record, Shape};

pub use tree::{CommandTree, Node, NodeId};

#[cfg(feature = "macros")]
pub use gyudon_macros::Introspect;
