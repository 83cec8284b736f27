mod containers;
mod ide_artifacts;
mod legacy;
mod package_caches;
mod trash;

use std::io;
use std::process::{Command, Stdio};

use crate::context::RunContext;
use crate::output;
use crate::step::Step;

/// The fixed cleanup sequence, in execution order.
pub fn all_steps() -> Vec<Box<dyn Step>> {
    vec![
        Box::new(package_caches::PackageCaches),
        Box::new(ide_artifacts::IdeArtifacts),
        Box::new(containers::Containers),
        Box::new(trash::Trash),
        Box::new(legacy::LegacyFolders),
    ]
}

pub fn find_step(name: &str) -> Option<Box<dyn Step>> {
    all_steps().into_iter().find(|step| step.name() == name)
}

pub fn all_step_names() -> Vec<&'static str> {
    all_steps().iter().map(|step| step.name()).collect()
}

/// Invoke an external cleanup tool and reduce it to an exit status.
///
/// A tool that is not installed is a quiet skip (the machine simply
/// does not have it), not a failure. A nonzero exit is recorded in the
/// error ledger and handed back for the step report. In dry-run mode
/// the command line is printed instead of executed.
pub(crate) fn run_tool(ctx: &mut RunContext, program: &str, args: &[&str]) -> i32 {
    let rendered = format!("{program} {}", args.join(" "));
    if ctx.flags.dry_run {
        output::print_would_run(&rendered);
        return 0;
    }

    let mut command = Command::new(program);
    command.args(args);
    if !ctx.flags.verbose {
        command.stdout(Stdio::null()).stderr(Stdio::null());
    }

    match command.status() {
        Ok(status) if status.success() => 0,
        Ok(status) => {
            let code = status.code().unwrap_or(-1);
            ctx.errors
                .record(format!("`{rendered}` exited with status {code}"));
            code
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if ctx.flags.verbose {
                output::print_info(&format!("{program} not installed, skipping"));
            }
            0
        }
        Err(e) => {
            ctx.errors.record(format!("failed to run `{rendered}`: {e}"));
            -1
        }
    }
}
