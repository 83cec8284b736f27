use std::fs;
use std::path::{Path, PathBuf};

/// Verdict on one candidate deletion path.
#[derive(Debug, Clone)]
pub struct PathValidation {
    pub requested: PathBuf,
    pub resolved: PathBuf,
    pub accepted: bool,
}

/// Resolve `candidate` and check that it stays inside `root`.
///
/// Symlinks are followed to their final target: a link sitting under
/// the root but pointing elsewhere is rejected, a link elsewhere whose
/// target lies under the root passes. A candidate that cannot be
/// resolved (already deleted, unreadable) is tested literally, so
/// removing something that no longer exists is not itself a violation.
/// Containment compares path components, never raw strings, so
/// `/home/u2` is not inside `/home/u`.
pub fn validate(root: &Path, candidate: &Path) -> PathValidation {
    let root = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let resolved = fs::canonicalize(candidate).unwrap_or_else(|_| candidate.to_path_buf());
    let accepted = resolved.starts_with(&root);
    PathValidation {
        requested: candidate.to_path_buf(),
        resolved,
        accepted,
    }
}
