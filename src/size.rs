use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Allocation unit reported by `Metadata::blocks`, per POSIX.
const BLOCK_SIZE: u64 = 512;

/// Point-in-time disk usage of a batch of paths, in bytes.
///
/// An empty batch measures zero. A missing path contributes zero, as
/// does any entry whose metadata cannot be read; nothing here ever
/// fails the batch. Usage is summed in 512-byte blocks across the
/// whole batch and converted to bytes by a single multiplication at
/// the end, so the unit factor is applied exactly once per total.
pub fn measure(paths: &[PathBuf]) -> u64 {
    let blocks: u64 = paths.iter().map(|path| entry_blocks(path)).sum();
    blocks * BLOCK_SIZE
}

/// Allocated blocks of a file, or of everything under a directory.
fn entry_blocks(path: &Path) -> u64 {
    if path.is_dir() {
        WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.metadata().ok())
            .map(|meta| meta.blocks())
            .sum()
    } else {
        path.symlink_metadata().map(|meta| meta.blocks()).unwrap_or(0)
    }
}
