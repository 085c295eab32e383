//! A worked example of a gyudon command tree.
//!
//! ```text
//! tkm
//! ├── hello   --name <name>
//! └── hoge    --fuga <fuga>  (default: fuga)
//!     └── piyo <args>...
//! ```

pub mod args;
pub mod commands;
pub mod console;

use gyudon::CommandTree;

use crate::commands::{Hello, Hoge, Piyo, Tkm};
use crate::console::Console;

/// Builds the demo tree, with every commander writing to `out`.
pub fn build_tree(out: Console) -> gyudon::Result<CommandTree> {
    let mut tree = CommandTree::new(Tkm::new(out.clone()))?;
    tree.attach(tree.root(), Hello::new(out.clone()))?;
    let hoge = tree.attach(tree.root(), Hoge::new(out.clone()))?;
    tree.attach(hoge, Piyo::new(out))?;
    Ok(tree)
}
