use std::path::PathBuf;

use crate::context::RunContext;
use crate::deleter;
use crate::step::{Step, StepReport};

pub struct LegacyFolders;

impl LegacyFolders {
    /// Leftovers of retired tooling that nothing recreates or reads.
    fn targets(ctx: &RunContext) -> Vec<PathBuf> {
        vec![
            ctx.root.join("Library/iTunes/iPhone Software Updates"),
            ctx.root
                .join("Library/Application Support/Adobe/Common/Media Cache Files"),
            // CocoaPods dropped the master specs checkout years ago.
            ctx.root.join(".cocoapods/repos/master"),
            ctx.root.join(".bower"),
        ]
    }
}

impl Step for LegacyFolders {
    fn name(&self) -> &'static str {
        "legacy-folders"
    }

    fn label(&self) -> &'static str {
        "Legacy Folders"
    }

    fn run(&self, ctx: &mut RunContext) -> StepReport {
        let confirmation = ctx.confirm("Remove legacy folders from retired tooling?");
        if !confirmation.accepted() {
            return StepReport::skipped(confirmation);
        }

        match deleter::delete_guarded(ctx, &Self::targets(ctx)) {
            Ok(bytes) => StepReport::reclaimed(confirmation, bytes),
            Err(_) => StepReport::failed(confirmation, 1),
        }
    }
}
