//! # cg
//!
//! Terminal front end for the course goal list.
//!
//! - `a` — open the entry form, then type the goal and press Enter
//! - `t <n>` / `d <n>` — toggle or delete the goal at position `n`
//! - `q` — quit
//!
//! Goals live in memory only; they are gone when `cg` exits.

mod render;
mod shell;

use std::path::PathBuf;

use anyhow::Context;
use cg_goal::{GoalListManager, ScreenConfig, TracingSink};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::shell::GoalShell;

/// Course goals — add, complete and delete goals for this session.
#[derive(Parser)]
#[command(name = "cg", version, about)]
struct Cli {
    /// Config file (defaults to <config dir>/course-goals/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log state changes to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(
        id_strategy = %config.id_strategy,
        trim_input = config.trim_input,
        "starting goal screen"
    );

    let mut manager = GoalListManager::with_config(config);
    manager.add_sink(Box::new(TracingSink));

    let stdin = std::io::stdin();
    let mut shell = GoalShell::new(manager, stdin.lock(), std::io::stdout());
    shell.run()
}

/// Logs go to stderr so they don't interleave with the screen on stdout.
fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("cg_goal={}", level).parse()?)
                .add_directive(format!("cg={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}

/// An explicit `--config` must load; the default location is optional.
fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ScreenConfig> {
    match path {
        Some(p) => ScreenConfig::load(p)
            .with_context(|| format!("failed to load config from {}", p.display())),
        None => Ok(ScreenConfig::default_path()
            .map(|p| ScreenConfig::load_or_default(&p))
            .unwrap_or_default()),
    }
}
