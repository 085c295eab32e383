//! Property-based tests for resolution using proptest.

use std::cell::RefCell;
use std::rc::Rc;

use gyudon::{CommandTree, FnCommander, NodeId};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

type Hits = Rc<RefCell<Vec<(usize, Vec<String>)>>>;

/// A tree shape: for each non-root node, (parent choice, name).
///
/// The parent choice is reduced modulo the number of nodes already built, so
/// every generated shape is a valid tree.
fn shape_strategy() -> impl Strategy<Value = Vec<(usize, String)>> {
    prop::collection::vec((any::<usize>(), "[abc]"), 0..24)
}

fn args_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abcd]|--[ab]", 0..8)
}

fn build(shape: &[(usize, String)], hits: &Hits) -> (CommandTree, Vec<NodeId>) {
    let recorder = |index: usize| {
        let hits = Rc::clone(hits);
        move |args: &[String]| {
            hits.borrow_mut().push((index, args.to_vec()));
            Ok::<_, anyhow::Error>(())
        }
    };

    let mut tree = CommandTree::new(FnCommander::new("Root", recorder(0))).unwrap();
    let mut ids = vec![tree.root()];
    for (i, (parent, name)) in shape.iter().enumerate() {
        let parent = ids[parent % ids.len()];
        let id = tree
            .attach(parent, FnCommander::new(name.as_str(), recorder(i + 1)))
            .unwrap();
        ids.push(id);
    }
    (tree, ids)
}

fn depth(tree: &CommandTree, id: NodeId) -> usize {
    tree.node(id).path().len()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Resolving twice gives the same answer.
    #[test]
    fn resolve_is_deterministic(shape in shape_strategy(), args in args_strategy()) {
        let hits = Hits::default();
        let (tree, _) = build(&shape, &hits);

        let first = tree.resolve(tree.root(), &args);
        let second = tree.resolve(tree.root(), &args);
        prop_assert_eq!(first, second);
    }

    /// Empty arguments resolve to the starting node, from anywhere.
    #[test]
    fn empty_args_resolve_to_start(shape in shape_strategy(), pick in any::<usize>()) {
        let hits = Hits::default();
        let (tree, ids) = build(&shape, &hits);
        let start = ids[pick % ids.len()];

        let args: Vec<String> = Vec::new();
        let (found, residual) = tree.resolve(start, &args);
        prop_assert_eq!(found, start);
        prop_assert!(residual.is_empty());
    }

    /// A node without children consumes nothing.
    #[test]
    fn leaf_consumes_nothing(
        shape in shape_strategy(),
        args in args_strategy(),
        pick in any::<usize>(),
    ) {
        let hits = Hits::default();
        let (tree, ids) = build(&shape, &hits);
        let leaves: Vec<NodeId> = ids
            .iter()
            .copied()
            .filter(|id| !tree.node(*id).has_subcommands())
            .collect();
        let leaf = leaves[pick % leaves.len()];

        let (found, residual) = tree.resolve(leaf, &args);
        prop_assert_eq!(found, leaf);
        prop_assert_eq!(residual, &args[..]);
    }

    /// The consumed prefix spells the matched node's path, and the residual
    /// is the rest of the arguments.
    #[test]
    fn consumed_prefix_is_path(shape in shape_strategy(), args in args_strategy()) {
        let hits = Hits::default();
        let (tree, _) = build(&shape, &hits);

        let (found, residual) = tree.resolve(tree.root(), &args);
        let consumed = args.len() - residual.len();

        prop_assert_eq!(&args[consumed..], residual);
        prop_assert_eq!(depth(&tree, found), consumed);
        let path: Vec<String> = tree.node(found).path().iter().map(|s| s.to_string()).collect();
        prop_assert_eq!(&path[..], &args[..consumed]);
    }

    /// Matching stops only when nothing more can be consumed.
    #[test]
    fn match_is_maximal(shape in shape_strategy(), args in args_strategy()) {
        let hits = Hits::default();
        let (tree, _) = build(&shape, &hits);

        let (found, residual) = tree.resolve(tree.root(), &args);
        if let Some(next) = residual.first() {
            prop_assert!(tree.node(found).find_child(next).is_none());
        }
    }

    /// Each step takes the first sibling with the matching name.
    #[test]
    fn first_sibling_wins(shape in shape_strategy(), args in args_strategy()) {
        let hits = Hits::default();
        let (tree, _) = build(&shape, &hits);

        let (found, residual) = tree.resolve(tree.root(), &args);
        let consumed = args.len() - residual.len();

        let mut walked = tree.node(tree.root());
        for token in &args[..consumed] {
            walked = walked.find_child(token).unwrap();
        }
        prop_assert_eq!(walked.id(), found);
    }

    /// Executing from any node behaves as executing from the root.
    #[test]
    fn execute_redirects_to_root(
        shape in shape_strategy(),
        args in args_strategy(),
        pick in any::<usize>(),
    ) {
        let hits = Hits::default();
        let (mut tree, ids) = build(&shape, &hits);
        let from = ids[pick % ids.len()];

        let mut argv = vec!["prog".to_string()];
        argv.extend(args.iter().cloned());

        tree.execute(from, argv.clone()).unwrap();
        tree.execute(tree.root(), argv).unwrap();

        let hits = hits.borrow();
        prop_assert_eq!(hits.len(), 2);
        prop_assert_eq!(&hits[0], &hits[1]);

        let (found, residual) = tree.resolve(tree.root(), &args);
        prop_assert_eq!(hits[0].0, found.index());
        prop_assert_eq!(&hits[0].1[..], residual);
    }
}
