//! End-to-end dispatch through `CommandTree::execute`.

#![allow(dead_code)] // Declared fields are never read

use std::cell::RefCell;
use std::rc::Rc;

use gyudon::{CommandTree, Commander, FieldDecl, FnCommander, Introspect};

type Log = Rc<RefCell<Vec<String>>>;

#[derive(Introspect)]
struct App {
    log: Log,
}

impl Commander for App {
    fn run(&mut self, args: &[String]) -> anyhow::Result<()> {
        self.log.borrow_mut().push(format!("app {args:?}"));
        Ok(())
    }
}

#[derive(Introspect)]
struct Greet {
    #[opt(help = "who to greet")]
    pub name: String,
    log: Log,
}

impl Commander for Greet {
    fn run(&mut self, args: &[String]) -> anyhow::Result<()> {
        self.log.borrow_mut().push(format!("greet {args:?}"));
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("deploy refused: {0}")]
struct DeployError(String);

#[derive(Introspect)]
struct Deploy;

impl Commander for Deploy {
    fn run(&mut self, args: &[String]) -> anyhow::Result<()> {
        Err(DeployError(args.join(" ")).into())
    }
}

fn app_tree() -> (CommandTree, Log) {
    let log: Log = Rc::default();
    let mut tree = CommandTree::new(App {
        log: Rc::clone(&log),
    })
    .unwrap();
    tree.attach(
        tree.root(),
        Greet {
            name: String::new(),
            log: Rc::clone(&log),
        },
    )
    .unwrap();
    (tree, log)
}

#[test]
fn test_greet_receives_residual() {
    let (mut tree, log) = app_tree();

    tree.execute(tree.root(), ["app", "greet", "alice"]).unwrap();

    assert_eq!(*log.borrow(), vec![r#"greet ["alice"]"#]);
}

#[test]
fn test_missing_subcommand_runs_root_with_token() {
    let (mut tree, log) = app_tree();

    tree.execute(tree.root(), ["app", "missing"]).unwrap();

    assert_eq!(*log.borrow(), vec![r#"app ["missing"]"#]);
}

#[test]
fn test_flags_stay_in_residual() {
    let (mut tree, log) = app_tree();

    tree.execute(tree.root(), ["app", "greet", "--name", "bob"])
        .unwrap();

    assert_eq!(*log.borrow(), vec![r#"greet ["--name", "bob"]"#]);
}

#[test]
fn test_execute_from_child_uses_original_args() {
    let (mut tree, log) = app_tree();
    let greet = tree.node(tree.root()).find_child("greet").unwrap().id();

    tree.execute(greet, ["app", "greet", "carol"]).unwrap();
    tree.execute(greet, ["app"]).unwrap();

    assert_eq!(*log.borrow(), vec![r#"greet ["carol"]"#, "app []"]);
}

#[test]
fn test_execute_accepts_owned_strings() {
    let (mut tree, log) = app_tree();
    let args: Vec<String> = vec!["/usr/bin/app".into(), "greet".into()];

    tree.execute(tree.root(), args).unwrap();

    assert_eq!(*log.borrow(), vec!["greet []"]);
}

#[test]
fn test_commander_error_is_returned_unchanged() {
    let (mut tree, log) = app_tree();
    tree.attach(tree.root(), Deploy).unwrap();

    let err = tree
        .execute(tree.root(), ["app", "deploy", "prod"])
        .unwrap_err();

    assert_eq!(err.to_string(), "deploy refused: prod");
    let deploy = err.downcast_ref::<DeployError>().unwrap();
    assert_eq!(deploy.0, "prod");
    assert!(log.borrow().is_empty());
}

#[test]
fn test_nested_fn_commanders() {
    let hits: Rc<RefCell<Vec<Vec<String>>>> = Rc::default();
    let sink = Rc::clone(&hits);

    let mut tree = CommandTree::new(FnCommander::new("App", |_: &[String]| {
        anyhow::bail!("root should not run")
    }))
    .unwrap();
    let db = tree
        .attach(
            tree.root(),
            FnCommander::new("Db", |_: &[String]| anyhow::bail!("db should not run")),
        )
        .unwrap();
    tree.attach(
        db,
        FnCommander::new("Migrate", move |args: &[String]| {
            sink.borrow_mut().push(args.to_vec());
            Ok::<_, anyhow::Error>(())
        })
        .field(FieldDecl::exported("DryRun").help("print the plan only")),
    )
    .unwrap();

    tree.execute(tree.root(), ["app", "db", "migrate", "--dryrun"])
        .unwrap();

    assert_eq!(*hits.borrow(), vec![vec!["--dryrun".to_string()]]);
}
