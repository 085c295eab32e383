//! Residual argument parsing for the demo commanders.
//!
//! The command tree hands each commander the arguments it did not consume.
//! The demo turns the commander's own field specs into `--<field>` options
//! and lets clap parse them, applying declared defaults along the way.

use clap::{Arg, ArgMatches, Command};
use gyudon::FieldSpec;

/// Builds a clap command with one `--<name>` option per spec.
pub fn command_for(name: &str, specs: &[FieldSpec]) -> Command {
    let mut cmd = Command::new(name.to_string()).no_binary_name(true);
    for spec in specs {
        let id = spec.name().to_lowercase();
        let mut arg = Arg::new(id.clone())
            .long(id)
            .help(spec.help().to_string());
        if let Some(default) = spec.default_value() {
            arg = arg.default_value(default.to_string());
        }
        cmd = cmd.arg(arg);
    }
    cmd
}

/// Parses residual arguments against the specs.
///
/// Returns `Ok(None)` after printing help or version text, which clap
/// reports as an error.
pub fn parse(
    name: &str,
    specs: &[FieldSpec],
    args: &[String],
) -> Result<Option<ArgMatches>, clap::Error> {
    match command_for(name, specs).try_get_matches_from(args) {
        Ok(matches) => Ok(Some(matches)),
        Err(err) if !err.use_stderr() => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyudon::{extract, FnCommander, FieldDecl};

    fn specs() -> Vec<FieldSpec> {
        let cmd = FnCommander::new("Hoge", |_: &[String]| Ok::<_, anyhow::Error>(()))
            .field(FieldDecl::exported("Fuga").help("fugafuga").default_value("fuga"))
            .field(FieldDecl::exported("Name").help("your name"));
        extract(&cmd).unwrap()
    }

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_applies_when_absent() {
        let matches = parse("hoge", &specs(), &[]).unwrap().unwrap();
        assert_eq!(matches.get_one::<String>("fuga").unwrap(), "fuga");
        assert!(matches.get_one::<String>("name").is_none());
    }

    #[test]
    fn test_flag_value_is_parsed() {
        let matches = parse("hoge", &specs(), &args(&["--name", "alice", "--fuga", "x"]))
            .unwrap()
            .unwrap();
        assert_eq!(matches.get_one::<String>("name").unwrap(), "alice");
        assert_eq!(matches.get_one::<String>("fuga").unwrap(), "x");
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let err = parse("hoge", &specs(), &args(&["--nope"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_text_comes_from_specs() {
        let help = command_for("hoge", &specs()).render_help().to_string();
        assert!(help.contains("--fuga"));
        assert!(help.contains("fugafuga"));
        assert!(help.contains("your name"));
    }
}
