//! The demo commanders.

use anyhow::Result;
use gyudon::{extract, Commander, Introspect};

use crate::args;
use crate::console::Console;

/// tkm private command
#[derive(Debug, Default, Introspect)]
pub struct Tkm {
    out: Console,
}

impl Tkm {
    pub fn new(out: Console) -> Self {
        Self { out }
    }
}

impl Commander for Tkm {
    fn run(&mut self, _args: &[String]) -> Result<()> {
        self.out.line("tkm private command!")?;
        Ok(())
    }
}

/// Says hello to your name.
#[derive(Debug, Default, Introspect)]
pub struct Hello {
    #[opt(help = "your name")]
    pub name: String,

    out: Console,
}

impl Hello {
    pub fn new(out: Console) -> Self {
        Self {
            name: String::new(),
            out,
        }
    }
}

impl Commander for Hello {
    fn run(&mut self, residual: &[String]) -> Result<()> {
        let Some(matches) = args::parse("hello", &extract(&*self)?, residual)? else {
            return Ok(());
        };
        if let Some(name) = matches.get_one::<String>("name") {
            self.name = name.clone();
        }
        self.out.line(format_args!("Hello {}", self.name))?;
        Ok(())
    }
}

/// Prints fuga.
#[derive(Debug, Default, Introspect)]
pub struct Hoge {
    #[opt(help = "fugafuga", default = "fuga")]
    pub fuga: String,

    out: Console,
}

impl Hoge {
    pub fn new(out: Console) -> Self {
        Self {
            fuga: String::new(),
            out,
        }
    }
}

impl Commander for Hoge {
    fn run(&mut self, residual: &[String]) -> Result<()> {
        let Some(matches) = args::parse("hoge", &extract(&*self)?, residual)? else {
            return Ok(());
        };
        if let Some(fuga) = matches.get_one::<String>("fuga") {
            self.fuga = fuga.clone();
        }
        self.out.line(format_args!("hoge {}", self.fuga))?;
        Ok(())
    }
}

/// Nested under hoge; echoes what it was given.
#[derive(Debug, Default, Introspect)]
pub struct Piyo {
    out: Console,
}

impl Piyo {
    pub fn new(out: Console) -> Self {
        Self { out }
    }
}

impl Commander for Piyo {
    fn run(&mut self, residual: &[String]) -> Result<()> {
        anyhow::ensure!(!residual.is_empty(), "piyo needs at least one argument");
        self.out.line(format_args!("piyo {}", residual.join(" ")))?;
        Ok(())
    }
}
