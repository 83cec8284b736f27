use std::path::PathBuf;

use crate::context::RunContext;
use crate::deleter;
use crate::step::{Step, StepReport};
use crate::utils;

pub struct IdeArtifacts;

impl IdeArtifacts {
    /// The per-project entries are deleted, not their parent folders,
    /// so Xcode recreates its layout cleanly on the next build.
    fn targets(ctx: &RunContext) -> Vec<PathBuf> {
        let developer = ctx.root.join("Library/Developer");
        utils::expand_patterns(&[
            developer.join("Xcode/DerivedData/*"),
            developer.join("Xcode/Archives/*"),
            developer.join("Xcode/iOS DeviceSupport/*"),
            developer.join("CoreSimulator/Caches/*"),
        ])
    }
}

impl Step for IdeArtifacts {
    fn name(&self) -> &'static str {
        "ide-artifacts"
    }

    fn label(&self) -> &'static str {
        "IDE Build Artifacts"
    }

    fn run(&self, ctx: &mut RunContext) -> StepReport {
        let confirmation = ctx.confirm("Clean IDE build artifacts?");
        if !confirmation.accepted() {
            return StepReport::skipped(confirmation);
        }

        let targets = Self::targets(ctx);
        let bytes = match deleter::delete_guarded(ctx, &targets) {
            Ok(bytes) => bytes,
            Err(_) => return StepReport::failed(confirmation, 1),
        };

        // Stale simulator runtimes; slow, so fast mode leaves them.
        if !ctx.flags.fast {
            let status = super::run_tool(ctx, "xcrun", &["simctl", "delete", "unavailable"]);
            if status != 0 {
                return StepReport::failed(confirmation, status);
            }
        }
        StepReport::reclaimed(confirmation, bytes)
    }
}
