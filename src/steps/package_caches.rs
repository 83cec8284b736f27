use std::path::PathBuf;

use crate::context::RunContext;
use crate::deleter;
use crate::step::{Step, StepReport};

pub struct PackageCaches;

impl PackageCaches {
    /// Cache directories relative to the cleanup root.
    fn targets(ctx: &RunContext) -> Vec<PathBuf> {
        vec![
            ctx.root.join(".npm/_cacache"),
            ctx.root.join("Library/Caches/Yarn"),
            ctx.root.join("Library/Caches/pip"),
            ctx.root.join(".cargo/registry/cache"),
        ]
    }
}

impl Step for PackageCaches {
    fn name(&self) -> &'static str {
        "package-caches"
    }

    fn label(&self) -> &'static str {
        "Package Manager Caches"
    }

    fn run(&self, ctx: &mut RunContext) -> StepReport {
        let confirmation = ctx.confirm("Clean package manager caches?");
        if !confirmation.accepted() {
            return StepReport::skipped(confirmation);
        }

        let targets = Self::targets(ctx);
        let bytes = match deleter::delete_guarded(ctx, &targets) {
            Ok(bytes) => bytes,
            Err(_) => return StepReport::failed(confirmation, 1),
        };

        // Homebrew prunes its own cache; skipped in fast mode because
        // it re-scans every installed formula.
        if !ctx.flags.fast {
            let status = super::run_tool(ctx, "brew", &["cleanup", "-s"]);
            if status != 0 {
                return StepReport::failed(confirmation, status);
            }
        }
        StepReport::reclaimed(confirmation, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RunFlags;
    use std::fs;
    use std::io::Cursor;

    fn context_with(root: &std::path::Path, input: &'static str, flags: RunFlags) -> RunContext {
        RunContext::new(root.to_path_buf(), flags).with_input(Box::new(Cursor::new(input)))
    }

    #[test]
    fn deletes_the_cache_directories_on_yes() {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        let npm = root.join(".npm/_cacache");
        fs::create_dir_all(&npm).unwrap();
        fs::write(npm.join("blob"), vec![0u8; 2048]).unwrap();

        let flags = RunFlags {
            fast: true,
            ..RunFlags::default()
        };
        let mut ctx = context_with(&root, "y\n", flags);
        let report = PackageCaches.run(&mut ctx);

        assert_eq!(report.status, 0);
        assert!(report.bytes_reclaimed.unwrap() >= 2048);
        assert!(!npm.exists());
        assert!(ctx.errors.is_empty());
    }

    #[test]
    fn declining_leaves_everything_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        let npm = root.join(".npm/_cacache");
        fs::create_dir_all(&npm).unwrap();

        let mut ctx = context_with(&root, "n\n", RunFlags::default());
        let report = PackageCaches.run(&mut ctx);

        assert!(!report.confirmation.accepted());
        assert_eq!(report.bytes_reclaimed, None);
        assert!(npm.exists());
    }
}
