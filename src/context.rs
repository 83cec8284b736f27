use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::confirm::{self, ConfirmationOutcome};
use crate::errors::ErrorAggregator;

/// Behavior switches for one run, fixed at process start.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunFlags {
    /// Answer yes to every confirmation without reading input.
    pub auto_yes: bool,
    /// Report what would be deleted; never touch the filesystem.
    pub dry_run: bool,
    /// Echo errors at insertion and print per-step diagnostics.
    pub verbose: bool,
    /// Drop slow steps and slow sub-batches.
    pub fast: bool,
}

/// Everything a step action needs from the surrounding run: the
/// containment root, the run flags, the error ledger, and the
/// interactive input stream. Owned by `main`, lent mutably to each
/// step in sequence.
pub struct RunContext {
    pub root: PathBuf,
    pub flags: RunFlags,
    pub errors: ErrorAggregator,
    input: Box<dyn BufRead>,
}

impl RunContext {
    pub fn new(root: PathBuf, flags: RunFlags) -> Self {
        Self {
            root,
            flags,
            errors: ErrorAggregator::new(flags.verbose),
            input: Box::new(io::BufReader::new(io::stdin())),
        }
    }

    /// Same context, but confirmations read from `input` instead of
    /// stdin. Used by tests.
    pub fn with_input(mut self, input: Box<dyn BufRead>) -> Self {
        self.input = input;
        self
    }

    /// One yes/no decision point. Blocks until a line arrives.
    pub fn confirm(&mut self, prompt: &str) -> ConfirmationOutcome {
        confirm::confirm_from(&mut self.input, prompt, self.flags.auto_yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn confirm_reads_from_the_injected_input() {
        let flags = RunFlags::default();
        let mut ctx = RunContext::new(PathBuf::from("/tmp"), flags)
            .with_input(Box::new(Cursor::new("yes\n")));
        assert_eq!(ctx.confirm("Go?"), ConfirmationOutcome::UserAccepted);
    }

    #[test]
    fn auto_yes_short_circuits() {
        let flags = RunFlags {
            auto_yes: true,
            ..RunFlags::default()
        };
        let mut ctx =
            RunContext::new(PathBuf::from("/tmp"), flags).with_input(Box::new(Cursor::new("")));
        assert_eq!(ctx.confirm("Go?"), ConfirmationOutcome::AutoAccepted);
    }
}
