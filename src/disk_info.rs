use std::ffi::CString;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Capacity of the filesystem holding a path, taken with statvfs.
#[derive(Debug, Clone, Copy)]
pub struct DiskSnapshot {
    pub total: u64,
    pub available: u64,
}

impl DiskSnapshot {
    /// Free space gained between this snapshot and a later one.
    pub fn freed_since(&self, later: &DiskSnapshot) -> u64 {
        later.available.saturating_sub(self.available)
    }
}

pub fn snapshot(path: &Path) -> Option<DiskSnapshot> {
    let c_path = CString::new(path.as_os_str().as_bytes()).ok()?;
    let mut stat = MaybeUninit::<libc::statvfs>::uninit();
    let ret = unsafe { libc::statvfs(c_path.as_ptr(), stat.as_mut_ptr()) };
    if ret != 0 {
        return None;
    }
    let stat = unsafe { stat.assume_init() };
    let block_size = stat.f_frsize as u64;
    Some(DiskSnapshot {
        total: stat.f_blocks as u64 * block_size,
        available: stat.f_bavail as u64 * block_size,
    })
}
