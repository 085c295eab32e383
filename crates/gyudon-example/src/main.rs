use std::process::ExitCode;

use gyudon_example::build_tree;
use gyudon_example::console::Console;

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn run() -> anyhow::Result<()> {
    init_tracing()?;
    let mut tree = build_tree(Console::Stdout)?;
    tree.execute(tree.root(), std::env::args())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
