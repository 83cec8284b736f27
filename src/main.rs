mod cli;
mod confirm;
mod context;
mod deleter;
mod disk_info;
mod errors;
mod guard;
mod output;
mod runner;
mod size;
mod step;
mod steps;
mod utils;

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;

use crate::context::{RunContext, RunFlags};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Ok(true) means the run finished with an empty error ledger.
fn run(cli: cli::Cli) -> anyhow::Result<bool> {
    if cli.list {
        for name in steps::all_step_names() {
            println!("{name}");
        }
        return Ok(true);
    }

    let root = match cli.root {
        Some(root) => root,
        None => dirs::home_dir().context("could not determine the home directory")?,
    };
    let root = std::fs::canonicalize(&root)
        .with_context(|| format!("cleanup root {} is not accessible", root.display()))?;

    let steps = match cli.step.as_deref() {
        Some(name) => vec![steps::find_step(name)
            .with_context(|| format!("unknown step `{name}`; --list shows the valid names"))?],
        None => steps::all_steps(),
    };

    let flags = RunFlags {
        auto_yes: cli.yes,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        fast: cli.fast,
    };
    let mut ctx = RunContext::new(root.clone(), flags);

    output::print_banner(cli.dry_run);
    let before = disk_info::snapshot(&root);
    if let Some(snap) = before {
        output::print_info(&format!(
            "{} free of {}",
            output::format_size(snap.available),
            output::format_size(snap.total)
        ));
        println!();
    }

    let summary = runner::run_steps(&mut ctx, &steps);

    let free_delta = before.and_then(|b| disk_info::snapshot(&root).map(|a| b.freed_since(&a)));
    output::print_summary(&summary, &ctx.errors, cli.verbose, free_delta);

    Ok(ctx.errors.is_empty())
}
