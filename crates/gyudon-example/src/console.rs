//! Where demo commands write their output.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, Write};
use std::rc::Rc;

/// Output target shared by the demo commanders.
#[derive(Debug, Clone, Default)]
pub enum Console {
    #[default]
    Stdout,
    /// Captures output in memory.
    Buffer(Rc<RefCell<String>>),
}

impl Console {
    pub fn buffer() -> Self {
        Console::Buffer(Rc::default())
    }

    /// Writes one line.
    pub fn line(&self, text: impl Display) -> io::Result<()> {
        match self {
            Console::Stdout => writeln!(io::stdout().lock(), "{text}"),
            Console::Buffer(buf) => {
                buf.borrow_mut().push_str(&format!("{text}\n"));
                Ok(())
            }
        }
    }

    /// Everything captured so far; empty for stdout.
    pub fn contents(&self) -> String {
        match self {
            Console::Stdout => String::new(),
            Console::Buffer(buf) => buf.borrow().clone(),
        }
    }
}
