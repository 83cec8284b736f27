use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::context::RunContext;
use crate::errors::PathViolation;
use crate::{guard, output, size, utils};

/// Validate, measure, then remove a batch of paths.
///
/// Validation is all-or-nothing: the first path that escapes the root
/// fails the whole batch before anything is touched. Removal is
/// best-effort: one path failing to delete does not stop the rest.
/// The returned figure is the usage measured before deletion; it is
/// what the batch was expected to reclaim, not a post-deletion audit.
pub fn delete_guarded(ctx: &mut RunContext, paths: &[PathBuf]) -> Result<u64, PathViolation> {
    let mut accepted = Vec::new();
    for path in paths {
        // Globs that matched nothing arrive still carrying their
        // wildcard token; they are not part of the batch.
        if utils::is_unmatched_pattern(path) {
            continue;
        }
        let verdict = guard::validate(&ctx.root, path);
        if !verdict.accepted {
            let violation = PathViolation {
                requested: verdict.requested,
                resolved: verdict.resolved,
            };
            ctx.errors.record(violation.to_string());
            return Err(violation);
        }
        accepted.push(path.clone());
    }

    let bytes = size::measure(&accepted);

    if ctx.flags.dry_run {
        for path in &accepted {
            output::print_would_remove(&utils::display_path(&ctx.root, path));
        }
        return Ok(bytes);
    }

    for path in &accepted {
        match remove_entry(path) {
            Ok(()) => {}
            Err(e) => ctx
                .errors
                .record(format!("failed to remove {}: {e}", path.display())),
        }
    }
    Ok(bytes)
}

/// Recursive removal of a file, directory, or symlink. A path that is
/// already gone is a tolerated no-op.
fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = match path.symlink_metadata() {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RunFlags;
    use std::fs;

    fn context_at(root: &Path, flags: RunFlags) -> RunContext {
        RunContext::new(root.to_path_buf(), flags)
            .with_input(Box::new(std::io::Cursor::new("")))
    }

    fn canonical_tempdir() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let canonical = fs::canonicalize(dir.path()).unwrap();
        (dir, canonical)
    }

    #[test]
    fn deletes_an_accepted_batch_and_reports_its_size() {
        let (_dir, root) = canonical_tempdir();
        let a = root.join("a");
        let b = root.join("b");
        fs::write(&a, vec![0u8; 1000]).unwrap();
        fs::write(&b, vec![0u8; 2000]).unwrap();

        let mut ctx = context_at(&root, RunFlags::default());
        let bytes = delete_guarded(&mut ctx, &[a.clone(), b.clone()]).unwrap();

        assert!(bytes >= 3000);
        assert!(!a.exists());
        assert!(!b.exists());
        assert!(ctx.errors.is_empty());
    }

    #[test]
    fn validation_is_all_or_nothing() {
        let (_dir, root) = canonical_tempdir();
        let outside_dir = tempfile::tempdir().unwrap();
        let a = root.join("a");
        let b = root.join("b");
        let outside = outside_dir.path().join("victim");
        fs::write(&a, b"x").unwrap();
        fs::write(&b, b"x").unwrap();
        fs::write(&outside, b"x").unwrap();

        let mut ctx = context_at(&root, RunFlags::default());
        let batch = vec![a.clone(), outside.clone(), b.clone()];
        let err = delete_guarded(&mut ctx, &batch).unwrap_err();

        assert_eq!(err.requested, outside);
        assert!(a.exists());
        assert!(b.exists());
        assert!(outside.exists());
        assert_eq!(ctx.errors.count(), 1);
    }

    #[test]
    fn dry_run_touches_nothing_and_is_repeatable() {
        let (_dir, root) = canonical_tempdir();
        let a = root.join("a");
        fs::write(&a, vec![0u8; 1000]).unwrap();

        let flags = RunFlags {
            dry_run: true,
            ..RunFlags::default()
        };
        let mut ctx = context_at(&root, flags);
        let first = delete_guarded(&mut ctx, &[a.clone()]).unwrap();
        let second = delete_guarded(&mut ctx, &[a.clone()]).unwrap();

        assert_eq!(first, second);
        assert!(first >= 1000);
        assert!(a.exists());
        assert!(ctx.errors.is_empty());
    }

    #[test]
    fn unmatched_patterns_are_omitted_not_errors() {
        let (_dir, root) = canonical_tempdir();
        let a = root.join("a");
        fs::write(&a, vec![0u8; 1000]).unwrap();
        let leftover = root.join("nothing/*");

        let mut ctx = context_at(&root, RunFlags::default());
        let bytes = delete_guarded(&mut ctx, &[leftover, a.clone()]).unwrap();

        assert!(bytes >= 1000);
        assert!(!a.exists());
        assert!(ctx.errors.is_empty());
    }

    #[test]
    fn missing_paths_are_tolerated_no_ops() {
        let (_dir, root) = canonical_tempdir();
        let gone = root.join("gone");
        let real = root.join("real");
        fs::write(&real, b"x").unwrap();

        let mut ctx = context_at(&root, RunFlags::default());
        let bytes = delete_guarded(&mut ctx, &[gone, real.clone()]).unwrap();

        assert!(bytes > 0);
        assert!(!real.exists());
        assert!(ctx.errors.is_empty());
    }

    #[test]
    fn symlink_batches_remove_the_link_not_the_target() {
        let (_dir, root) = canonical_tempdir();
        let target = root.join("real");
        fs::write(&target, b"x").unwrap();
        let link = root.join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let mut ctx = context_at(&root, RunFlags::default());
        delete_guarded(&mut ctx, &[link.clone()]).unwrap();

        assert!(!link.exists());
        assert!(target.exists());
    }
}
