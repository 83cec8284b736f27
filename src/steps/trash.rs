use std::fs;
use std::io;
use std::path::PathBuf;

use crate::context::RunContext;
use crate::deleter;
use crate::step::{Step, StepReport};

pub struct Trash;

impl Step for Trash {
    fn name(&self) -> &'static str {
        "trash"
    }

    fn label(&self) -> &'static str {
        "Trash"
    }

    fn run(&self, ctx: &mut RunContext) -> StepReport {
        let confirmation = ctx.confirm("Empty the trash?");
        if !confirmation.accepted() {
            return StepReport::skipped(confirmation);
        }

        let trash_dir = ctx.root.join(".Trash");
        // The entries are the batch; the .Trash folder itself stays.
        let entries: Vec<PathBuf> = match fs::read_dir(&trash_dir) {
            Ok(read_dir) => read_dir.flatten().map(|entry| entry.path()).collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                ctx.errors.record(format!(
                    "trash access denied ({e}); grant Full Disk Access to your terminal"
                ));
                return StepReport::failed(confirmation, 1);
            }
            Err(e) => {
                ctx.errors
                    .record(format!("cannot read {}: {e}", trash_dir.display()));
                return StepReport::failed(confirmation, 1);
            }
        };

        match deleter::delete_guarded(ctx, &entries) {
            Ok(bytes) => StepReport::reclaimed(confirmation, bytes),
            Err(_) => StepReport::failed(confirmation, 1),
        }
    }
}
