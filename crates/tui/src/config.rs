use crate::cli::Cli;

/// Options for one TUI session. The task list itself lives and dies with
/// the session; there is nothing to discover on disk.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub demo: bool,
}

pub fn from_cli(cli: &Cli) -> RunOptions {
    RunOptions { demo: cli.demo }
}
