use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "devsweep",
    about = "Reclaim disk space from developer tooling — interactively, and only inside your home",
    version
)]
pub struct Cli {
    /// Answer yes to every confirmation (non-interactive mode).
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Report what would be deleted without touching anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Skip the slow steps and slow sub-batches.
    #[arg(short, long)]
    pub fast: bool,

    /// Print per-step diagnostics and the full error list.
    #[arg(short, long)]
    pub verbose: bool,

    /// Containment root; nothing outside it is ever deleted.
    /// Defaults to your home directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Run a single named step instead of the whole sequence.
    #[arg(long)]
    pub step: Option<String>,

    /// List the step names and exit.
    #[arg(long)]
    pub list: bool,
}
