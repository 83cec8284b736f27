use crate::confirm::ConfirmationOutcome;
use crate::context::RunContext;

/// What a step action hands back to the runner: the confirmation it
/// gathered, an exit-status-like code, and the bytes it reclaimed when
/// that figure is known.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub confirmation: ConfirmationOutcome,
    pub status: i32,
    pub bytes_reclaimed: Option<u64>,
}

impl StepReport {
    /// The step never got past its confirmation gate.
    pub fn skipped(confirmation: ConfirmationOutcome) -> Self {
        Self {
            confirmation,
            status: 0,
            bytes_reclaimed: None,
        }
    }

    /// Clean finish with a measured reclaim figure.
    pub fn reclaimed(confirmation: ConfirmationOutcome, bytes: u64) -> Self {
        Self {
            confirmation,
            status: 0,
            bytes_reclaimed: Some(bytes),
        }
    }

    /// Clean finish where the reclaimed amount is unknowable (the work
    /// happened inside an external tool).
    pub fn finished(confirmation: ConfirmationOutcome) -> Self {
        Self {
            confirmation,
            status: 0,
            bytes_reclaimed: None,
        }
    }

    pub fn failed(confirmation: ConfirmationOutcome, status: i32) -> Self {
        Self {
            confirmation,
            status,
            bytes_reclaimed: None,
        }
    }
}

/// The trait every cleanup step implements.
pub trait Step {
    /// Machine-readable name used in --step (e.g. "package-caches").
    fn name(&self) -> &'static str;

    /// Human-readable label for the status line.
    fn label(&self) -> &'static str;

    /// Whether fast mode drops this step entirely.
    fn fast_skippable(&self) -> bool {
        false
    }

    /// Ask for confirmation, then do the work. Must never abort the
    /// run; failures are reported through the StepReport and the
    /// context's error ledger.
    fn run(&self, ctx: &mut RunContext) -> StepReport;
}
