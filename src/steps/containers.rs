use crate::context::RunContext;
use crate::step::{Step, StepReport};

pub struct Containers;

impl Step for Containers {
    fn name(&self) -> &'static str {
        "containers"
    }

    fn label(&self) -> &'static str {
        "Container Engine Data"
    }

    // Prune walks every image layer; far too slow for fast mode.
    fn fast_skippable(&self) -> bool {
        true
    }

    fn run(&self, ctx: &mut RunContext) -> StepReport {
        let confirmation =
            ctx.confirm("Prune container engine data? (docker system prune --all)");
        if !confirmation.accepted() {
            return StepReport::skipped(confirmation);
        }

        let status = super::run_tool(ctx, "docker", &["system", "prune", "--all", "--force"]);
        if status != 0 {
            return StepReport::failed(confirmation, status);
        }
        // Docker reports its own total; devsweep cannot attribute it
        // to paths, so the reclaim figure stays unknown, not zero.
        StepReport::finished(confirmation)
    }
}
