//! The command tree.
//!
//! Nodes live in a flat arena owned by [`CommandTree`] and are addressed by
//! [`NodeId`]. Each node owns its commander and the field specs derived from
//! it; parent and child links are ids, so walking up to the root never
//! involves a second owner.
//!
//! # Resolution
//!
//! [`CommandTree::resolve`] walks argument tokens against child names:
//!
//! ```text
//! args: ["hoge", "piyo", "--fast"]
//!
//! root ── hello
//!      └─ hoge ── piyo        → (piyo, ["--fast"])
//! ```
//!
//! At each level the first child whose name equals the next token wins and
//! the walk continues below it. It stops when the tokens run out, the node
//! has no children, or no child matches; whatever is left is the residual.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::commander::Commander;
use crate::error::Result;
use crate::path::path_to_string;
use crate::spec::{describe, FieldSpec};

/// Identifies a node within the [`CommandTree`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in attachment order; the root is 0.
    pub fn index(self) -> usize {
        self.0
    }
}

struct Entry {
    name: String,
    specs: Vec<FieldSpec>,
    commander: Box<dyn Commander>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Entry {
    fn build<C>(commander: C, parent: Option<NodeId>) -> Result<Self>
    where
        C: Commander + 'static,
    {
        let (type_name, specs) = describe(&commander)?;
        let name = type_name.to_lowercase();
        debug!(command = %name, specs = specs.len(), "built command node");

        Ok(Self {
            name,
            specs,
            commander: Box::new(commander),
            parent,
            children: Vec::new(),
        })
    }
}

/// A tree of named commanders.
///
/// # Example
///
/// ```rust
/// use gyudon::{CommandTree, FnCommander};
///
/// let ok = |_: &[String]| Ok::<_, anyhow::Error>(());
///
/// let mut tree = CommandTree::new(FnCommander::new("App", ok))?;
/// let db = tree.attach(tree.root(), FnCommander::new("Db", ok))?;
/// let migrate = tree.attach(db, FnCommander::new("Migrate", ok))?;
///
/// let args = ["db", "migrate", "--dry-run"];
/// let (found, residual) = tree.resolve(tree.root(), &args);
///
/// assert_eq!(found, migrate);
/// assert_eq!(residual, ["--dry-run"]);
/// # Ok::<(), gyudon::Error>(())
/// ```
pub struct CommandTree {
    nodes: Vec<Entry>,
}

impl CommandTree {
    /// Builds a tree whose root wraps `commander`.
    ///
    /// The root's name is the commander's record type name, lower-cased.
    /// Fails with the extractor's error if the commander is not a valid
    /// record.
    pub fn new<C>(commander: C) -> Result<Self>
    where
        C: Commander + 'static,
    {
        let root = Entry::build(commander, None)?;
        Ok(Self { nodes: vec![root] })
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attaches `commander` as the last child of `parent`.
    ///
    /// Returns the new node's id so grandchildren can be attached to it. A
    /// failed attach leaves the tree unchanged. Sibling names are not checked
    /// for uniqueness; a duplicate is logged and will never be reached by
    /// [`resolve`](Self::resolve), which takes the first match.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not created by this tree.
    pub fn attach<C>(&mut self, parent: NodeId, commander: C) -> Result<NodeId>
    where
        C: Commander + 'static,
    {
        let entry = Entry::build(commander, Some(parent))?;

        if self.node(parent).find_child(&entry.name).is_some() {
            warn!(
                command = %entry.name,
                parent = %self.nodes[parent.0].name,
                "duplicate subcommand name; the earlier sibling shadows it"
            );
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(entry);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Returns a view of the node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this tree.
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(id.0 < self.nodes.len(), "{id:?} does not belong to this tree");
        Node { tree: self, id }
    }

    /// Returns a view of the node, or `None` if `id` is not in this tree.
    pub fn get(&self, id: NodeId) -> Option<Node<'_>> {
        (id.0 < self.nodes.len()).then_some(Node { tree: self, id })
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walks up from `id` to the node without a parent.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            current = parent;
        }
        current
    }

    /// Resolves `args` to the deepest matching node below `from`.
    ///
    /// Returns the matched node and the unconsumed suffix of `args`. Names
    /// are compared exactly; the first matching child wins and the walk
    /// never backtracks.
    pub fn resolve<'a, S>(&self, from: NodeId, args: &'a [S]) -> (NodeId, &'a [S])
    where
        S: AsRef<str>,
    {
        let entry = &self.nodes[from.0];
        let Some((token, rest)) = args.split_first() else {
            return (from, args);
        };
        if entry.children.is_empty() {
            return (from, args);
        }

        let token = token.as_ref();
        match entry
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].name == token)
        {
            Some(child) => {
                trace!(from = %entry.name, token, "matched subcommand");
                self.resolve(child, rest)
            }
            None => (from, args),
        }
    }

    /// Resolves the process arguments and runs the matched commander.
    ///
    /// Execution always starts at the root: called on any other node, this
    /// redirects to the root with the same, unmodified `args`. The first
    /// argument (the program name) is dropped, the rest is resolved, and the
    /// matched commander runs with the residual. Its result is returned as
    /// is.
    ///
    /// ```rust
    /// use gyudon::{CommandTree, FnCommander};
    ///
    /// let mut tree = CommandTree::new(FnCommander::new("App", |args: &[String]| {
    ///     anyhow::ensure!(args.is_empty(), "unexpected arguments: {args:?}");
    ///     Ok(())
    /// }))?;
    ///
    /// assert!(tree.execute(tree.root(), ["app"]).is_ok());
    /// assert!(tree.execute(tree.root(), ["app", "extra"]).is_err());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn execute<I, S>(&mut self, from: NodeId, args: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let root = self.root_of(from);
        if root != from {
            debug!(from = %self.nodes[from.0].name, "executing from the root");
        }

        let rest = args.get(1..).unwrap_or_default();
        let (target, residual) = self.resolve(root, rest);

        {
            let node = self.node(target);
            debug!(
                command = %node.name(),
                path = %path_to_string(&node.path()),
                residual = ?residual,
                "resolved command"
            );
            let flags: Vec<&str> = node
                .detect_flags(residual)
                .into_iter()
                .map(FieldSpec::name)
                .collect();
            if !flags.is_empty() {
                debug!(command = %node.name(), flags = ?flags, "detected flags");
            }
        }

        self.nodes[target.0].commander.run(residual)
    }
}

impl fmt::Debug for CommandTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTree")
            .field("root", &self.nodes[0].name)
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

/// A read-only view of one node in a [`CommandTree`].
#[derive(Clone, Copy)]
pub struct Node<'a> {
    tree: &'a CommandTree,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn entry(&self) -> &'a Entry {
        &self.tree.nodes[self.id.0]
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The lower-cased record type name.
    pub fn name(&self) -> &'a str {
        &self.entry().name
    }

    /// Field specs in declaration order.
    pub fn specs(&self) -> &'a [FieldSpec] {
        &self.entry().specs
    }

    pub fn parent(&self) -> Option<Node<'a>> {
        let tree = self.tree;
        self.entry().parent.map(|id| Node { tree, id })
    }

    /// Children in attachment order.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let tree = self.tree;
        self.entry()
            .children
            .iter()
            .map(move |&id| Node { tree, id })
    }

    pub fn root(&self) -> Node<'a> {
        self.tree.node(self.tree.root_of(self.id))
    }

    pub fn has_parent(&self) -> bool {
        self.entry().parent.is_some()
    }

    pub fn has_subcommands(&self) -> bool {
        !self.entry().children.is_empty()
    }

    /// Names from just below the root down to this node.
    ///
    /// Empty for the root itself.
    pub fn path(&self) -> Vec<&'a str> {
        let mut path = Vec::new();
        let mut current = *self;
        while let Some(parent) = current.parent() {
            path.push(current.name());
            current = parent;
        }
        path.reverse();
        path
    }

    /// The first child named `name`, if any.
    pub fn find_child(&self, name: &str) -> Option<Node<'a>> {
        self.children().find(|child| child.name() == name)
    }

    /// Specs named as flags by at least one of `args`, in spec order.
    ///
    /// See [`FieldSpec::matches_flag`]. Nothing is bound or validated.
    pub fn detect_flags<S: AsRef<str>>(&self, args: &[S]) -> Vec<&'a FieldSpec> {
        self.specs()
            .iter()
            .filter(|spec| args.iter().any(|arg| spec.matches_flag(arg.as_ref())))
            .collect()
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}
