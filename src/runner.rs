use std::time::Instant;

use crate::confirm::ConfirmationOutcome;
use crate::context::RunContext;
use crate::output;
use crate::step::{Step, StepReport};

/// Terminal classification of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Success,
    Failure(i32),
    SkippedByUser,
}

/// The authoritative per-step record in the run ledger.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub name: &'static str,
    pub confirmation: ConfirmationOutcome,
    pub status: StepStatus,
    pub bytes_reclaimed: Option<u64>,
    pub duration_secs: u64,
}

/// Run ledger: every outcome plus the totals the summary prints.
/// Skipped steps appear in the ledger but contribute nothing to the
/// totals.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<StepOutcome>,
    pub total_reclaimed: u64,
    pub total_duration_secs: u64,
}

impl RunSummary {
    pub fn completed(&self) -> usize {
        self.count(|status| matches!(status, StepStatus::Success))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, StepStatus::Failure(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|status| matches!(status, StepStatus::SkippedByUser))
    }

    fn count(&self, pred: impl Fn(StepStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o.status)).count()
    }
}

/// Execute one step: print its title, time it, classify the result.
pub fn run_step(ctx: &mut RunContext, step: &dyn Step) -> StepOutcome {
    output::print_step_header(step.label());
    let started = Instant::now();
    let report = step.run(ctx);
    let duration_secs = started.elapsed().as_secs();

    let outcome = classify(step.name(), &report, duration_secs);
    match outcome.status {
        StepStatus::SkippedByUser => output::print_step_skipped(step.label()),
        StepStatus::Success => output::print_step_done(duration_secs, outcome.bytes_reclaimed),
        StepStatus::Failure(code) => output::print_step_failed(code, duration_secs),
    }
    if ctx.flags.verbose {
        output::print_step_diagnostics(&outcome);
    }
    outcome
}

/// Reduce a step's report to its terminal classification. A reclaim
/// figure is only meaningful for a clean exit; anything else is
/// unknown, not zero.
fn classify(name: &'static str, report: &StepReport, duration_secs: u64) -> StepOutcome {
    let status = if !report.confirmation.accepted() {
        StepStatus::SkippedByUser
    } else if report.status == 0 {
        StepStatus::Success
    } else {
        StepStatus::Failure(report.status)
    };
    let bytes_reclaimed = match status {
        StepStatus::Success => report.bytes_reclaimed,
        _ => None,
    };
    StepOutcome {
        name,
        confirmation: report.confirmation,
        status,
        bytes_reclaimed,
        duration_secs,
    }
}

/// Drive the fixed sequence. One step's failure or skip never stops
/// the ones after it.
pub fn run_steps(ctx: &mut RunContext, steps: &[Box<dyn Step>]) -> RunSummary {
    let mut summary = RunSummary::default();
    for step in steps {
        if ctx.flags.fast && step.fast_skippable() {
            output::print_fast_skip(step.label());
            continue;
        }
        let outcome = run_step(ctx, step.as_ref());
        if outcome.status != StepStatus::SkippedByUser {
            summary.total_reclaimed += outcome.bytes_reclaimed.unwrap_or(0);
            summary.total_duration_secs += outcome.duration_secs;
        }
        summary.outcomes.push(outcome);
    }
    summary
}
